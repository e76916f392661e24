//! The `highlight` command: render source files as highlighted HTML, JSON
//! or a span listing.
//!
//! Accepts files and directories. Directories are walked for files a lexer
//! claims (`*.wren`), skipping hidden entries, `target/` and anything in
//! `exclude_patterns`; the files are then highlighted in parallel and
//! printed in path order.

use std::path::{Path, PathBuf};

use bialet_docs_config::DocsConfig;
use bialet_highlight::{find_lexer_for_path, HighlightOptions, Highlighted, Highlighter, HtmlFormatter};
use bialet_lexer::Mode;
use rayon::prelude::*;
use serde::Serialize;

use super::lex::write_span_line;
use super::{read_file, CommandError};


/// Warning type reported for unterminated input and error spans.
const HIGHLIGHTING_FAILURE: &str = "misc.highlighting_failure";

/// How highlighted output is printed.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Html,
    /// One JSON object per file, one per line.
    Json,
    /// Coalesced spans, one per line.
    Spans,
}

impl OutputFormat {
    fn parse(name: &str) -> Option<Self> {
        match name {
            "html" => Some(OutputFormat::Html),
            "json" => Some(OutputFormat::Json),
            "spans" => Some(OutputFormat::Spans),
            _ => None,
        }
    }
}

/// Parsed `highlight` arguments.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HighlightArgs {
    pub format: OutputFormat,
    /// Explicit config file; otherwise `bialetdoc.toml` in the working
    /// directory, if present.
    pub config: Option<PathBuf>,
    /// Language for every file, overriding file-name detection.
    pub lang: Option<String>,
    pub paths: Vec<PathBuf>,
}

/// Parse the arguments following `bialetdoc highlight`.
pub fn parse_highlight_args(args: &[String]) -> Result<HighlightArgs, CommandError> {
    let mut parsed = HighlightArgs::default();
    for arg in args {
        if let Some(format) = arg.strip_prefix("--format=") {
            parsed.format = OutputFormat::parse(format).ok_or_else(|| {
                CommandError::Usage(format!("unknown format '{format}' (expected html, json or spans)"))
            })?;
        } else if let Some(path) = arg.strip_prefix("--config=") {
            parsed.config = Some(PathBuf::from(path));
        } else if let Some(lang) = arg.strip_prefix("--lang=") {
            parsed.lang = Some(lang.to_owned());
        } else if arg.starts_with('-') {
            return Err(CommandError::Usage(format!("unknown option: {arg}")));
        } else {
            parsed.paths.push(PathBuf::from(arg));
        }
    }
    if parsed.paths.is_empty() {
        return Err(CommandError::Usage("no input paths given".to_owned()));
    }
    Ok(parsed)
}

/// Rendered output for one file, plus warnings destined for stderr.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FileOutput {
    pub text: String,
    pub warnings: Vec<String>,
}

#[derive(Serialize)]
struct JsonDocument<'a> {
    path: &'a Path,
    language: Option<&'static str>,
    #[serde(flatten)]
    highlighted: &'a Highlighted,
}

/// Run the command: highlight every input and print the results.
pub fn run_highlight(args: &[String]) -> Result<(), CommandError> {
    let args = parse_highlight_args(args)?;
    let config = match &args.config {
        Some(path) => DocsConfig::load(path)?,
        None => DocsConfig::load_or_default(Path::new("."))?,
    };

    let files = collect_files(&args.paths, &config);
    tracing::debug!(files = files.len(), "collected inputs");

    // `collect` on an indexed parallel iterator keeps input order.
    let results: Vec<Result<FileOutput, CommandError>> = files
        .par_iter()
        .map(|path| render_file(path, &args, &config))
        .collect();

    let total = results.len();
    let mut failed = 0;
    for result in results {
        match result {
            Ok(output) => {
                print!("{}", output.text);
                for warning in output.warnings {
                    eprintln!("warning: {warning}");
                }
            }
            Err(e) => {
                eprintln!("error: {e}");
                failed += 1;
            }
        }
    }

    if failed == 0 {
        Ok(())
    } else {
        Err(CommandError::Failed { failed, total })
    }
}

/// Highlight and render one file.
#[tracing::instrument(level = "debug", skip_all, fields(path = %path.display()))]
pub fn render_file(
    path: &Path,
    args: &HighlightArgs,
    config: &DocsConfig,
) -> Result<FileOutput, CommandError> {
    let source = read_file(path)?;
    let options = HighlightOptions {
        guess_lang: config.highlight_options.guess_lang,
    };
    let highlighter = match &args.lang {
        Some(lang) => Highlighter::for_language(lang, options)?,
        None => Highlighter::for_path(path, &config.highlight_language, options)?,
    };
    let highlighted = highlighter.highlight(&source);

    let mut warnings = Vec::new();
    if !config.is_warning_suppressed(HIGHLIGHTING_FAILURE) {
        if let Some(mode) = highlighted.unterminated {
            // A nested root is only ever opened by `(`.
            let open = match mode {
                Mode::Root => "an unclosed `(`".to_owned(),
                mode => mode.to_string(),
            };
            warnings.push(format!(
                "{}: input ends inside {open} [{HIGHLIGHTING_FAILURE}]",
                path.display()
            ));
        }
        if highlighted.has_errors() {
            warnings.push(format!(
                "{}: could not classify some characters [{HIGHLIGHTING_FAILURE}]",
                path.display()
            ));
        }
    }

    let text = match args.format {
        OutputFormat::Html => {
            let label = bialet_highlight::escape(&path.display().to_string());
            let mut text = format!("<!-- {label} -->\n");
            text.push_str(&HtmlFormatter::default().format(&source, &highlighted.spans));
            text
        }
        OutputFormat::Json => {
            let document = JsonDocument {
                path,
                language: highlighter.lexer().map(|l| l.name),
                highlighted: &highlighted,
            };
            let mut text = serde_json::to_string(&document)?;
            text.push('\n');
            text
        }
        OutputFormat::Spans => {
            let mut text = format!("==> {} <==\n", path.display());
            for span in &highlighted.spans {
                write_span_line(&mut text, span, &source);
            }
            text
        }
    };

    Ok(FileOutput { text, warnings })
}

/// Expand `paths` into the files to highlight. Each directory's files are
/// sorted by path; files named directly are always kept, in given order.
pub fn collect_files(paths: &[PathBuf], config: &DocsConfig) -> Vec<PathBuf> {
    let mut files = Vec::new();
    for path in paths {
        if path.is_dir() {
            let mut found = Vec::new();
            visit_source_files(path, config, &mut |file| found.push(file.to_path_buf()));
            found.sort();
            files.extend(found);
        } else {
            files.push(path.clone());
        }
    }
    files
}

fn visit_source_files<F: FnMut(&Path)>(dir: &Path, config: &DocsConfig, callback: &mut F) {
    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            tracing::warn!(dir = %dir.display(), error = %e, "cannot read directory");
            return;
        }
    };

    for entry in entries.flatten() {
        let path = entry.path();

        if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
            if name.starts_with('.') || name == "target" {
                continue;
            }
        }
        if config.is_excluded(&path) {
            continue;
        }

        if path.is_dir() {
            visit_source_files(&path, config, callback);
        } else if find_lexer_for_path(&path).is_some() {
            callback(&path);
        }
    }
}
