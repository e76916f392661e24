//! The documentation configuration document.
//!
//! Every table and field is optional in the file; anything left out takes
//! the value from [`DocsConfig::default`], which matches the settings the
//! Bialet documentation is published with.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};
use crate::pattern::wildcard_match;


/// Conventional file name, looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "bialetdoc.toml";

/// Markup language of a documentation source file.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SourceFormat {
    #[serde(rename = "restructuredtext")]
    ReStructuredText,
    #[serde(rename = "markdown")]
    Markdown,
}

/// Top-level configuration.
///
/// Scalar and array fields come before the tables so the document
/// serializes in the order a person would write it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocsConfig {
    pub project: String,
    pub copyright: String,
    pub author: String,
    pub version: String,
    /// Build extensions to enable, by module name.
    pub extensions: Vec<String>,
    pub templates_path: Vec<String>,
    /// File name globs skipped when collecting sources.
    pub exclude_patterns: Vec<String>,
    /// Language of code blocks that don't name one.
    pub highlight_language: String,
    /// Warning types to silence. `misc` silences every `misc.*` warning.
    pub suppress_warnings: Vec<String>,
    pub highlight_options: HighlightOptionsConfig,
    pub html: HtmlConfig,
    pub ogp: OpenGraphConfig,
    /// File suffix (with leading dot) to source format.
    pub source_suffix: BTreeMap<String, SourceFormat>,
}

/// `[highlight_options]`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HighlightOptionsConfig {
    /// Highlight unknown languages as plain text instead of failing.
    pub guess_lang: bool,
}

/// `[html]`
///
/// Path and URL fields left as an empty string are unset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HtmlConfig {
    pub theme: String,
    pub static_path: Vec<String>,
    pub favicon: String,
    pub show_copyright: bool,
    pub show_sphinx: bool,
    pub theme_options: ThemeOptions,
}

/// `[html.theme_options]`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeOptions {
    pub repository_url: String,
    pub path_to_docs: String,
    pub use_edit_page_button: bool,
    pub use_repository_button: bool,
    pub use_issues_button: bool,
    pub logo: LogoOptions,
}

/// `[html.theme_options.logo]`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogoOptions {
    pub text: String,
    pub image_light: String,
    pub image_dark: String,
}

/// `[ogp]`: Open Graph metadata for link previews.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OpenGraphConfig {
    pub site_url: String,
    pub image: String,
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|&s| s.to_owned()).collect()
}

impl Default for DocsConfig {
    fn default() -> Self {
        DocsConfig {
            project: "Bialet".to_owned(),
            copyright: "2024, Rodrigo Arce".to_owned(),
            author: "Rodrigo Arce".to_owned(),
            version: "0.4".to_owned(),
            extensions: strings(&["myst_parser", "sphinx_design", "sphinxext.opengraph"]),
            templates_path: strings(&["_templates"]),
            exclude_patterns: strings(&["requirements.txt"]),
            highlight_language: "wren".to_owned(),
            suppress_warnings: strings(&["misc.highlighting_failure"]),
            highlight_options: HighlightOptionsConfig { guess_lang: false },
            html: HtmlConfig::default(),
            ogp: OpenGraphConfig {
                site_url: "https://bialet.dev/".to_owned(),
                image: "https://bialet.dev/_static/og-image.png".to_owned(),
            },
            source_suffix: BTreeMap::from([
                (".rst".to_owned(), SourceFormat::ReStructuredText),
                (".txt".to_owned(), SourceFormat::Markdown),
                (".md".to_owned(), SourceFormat::Markdown),
            ]),
        }
    }
}

impl Default for HtmlConfig {
    fn default() -> Self {
        HtmlConfig {
            theme: "sphinx_book_theme".to_owned(),
            static_path: strings(&["_static"]),
            favicon: "../src/favicon.ico".to_owned(),
            show_copyright: false,
            show_sphinx: false,
            theme_options: ThemeOptions::default(),
        }
    }
}

impl Default for ThemeOptions {
    fn default() -> Self {
        ThemeOptions {
            repository_url: "https://github.com/bialet/bialet".to_owned(),
            path_to_docs: "docs".to_owned(),
            use_edit_page_button: true,
            use_repository_button: true,
            use_issues_button: true,
            logo: LogoOptions {
                text: "Bialet Documentation".to_owned(),
                image_light: "_static/logo.png".to_owned(),
                image_dark: "_static/logo.png".to_owned(),
            },
        }
    }
}

impl DocsConfig {
    /// Parse a TOML document. `origin` is only used in error messages.
    pub fn from_toml_str(text: &str, origin: &Path) -> Result<Self> {
        toml::from_str(text).map_err(|source| ConfigError::Parse {
            path: origin.to_path_buf(),
            source,
        })
    }

    /// Read and parse a configuration file.
    #[tracing::instrument(level = "debug", skip_all, fields(path = %path.display()))]
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&text, path)?;
        tracing::debug!(project = %config.project, "configuration loaded");
        Ok(config)
    }

    /// Load [`CONFIG_FILE_NAME`] from `dir`, or the defaults if there is none.
    pub fn load_or_default(dir: &Path) -> Result<Self> {
        let path = dir.join(CONFIG_FILE_NAME);
        if path.is_file() {
            Self::load(&path)
        } else {
            tracing::debug!(dir = %dir.display(), "no configuration file, using defaults");
            Ok(Self::default())
        }
    }

    /// Render back to TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Source format for `path`, by its suffix.
    pub fn source_format(&self, path: &Path) -> Option<SourceFormat> {
        let ext = path.extension()?.to_str()?;
        self.source_suffix.get(&format!(".{ext}")).copied()
    }

    /// Whether `path` matches an entry of `exclude_patterns`.
    ///
    /// Patterns are tried against the file name and against the whole path
    /// with `/` separators; `*` matches any run and `?` any one character.
    pub fn is_excluded(&self, path: &Path) -> bool {
        let file_name = path.file_name().and_then(|n| n.to_str());
        let full = path.to_string_lossy().replace('\\', "/");
        self.exclude_patterns.iter().any(|pattern| {
            file_name.is_some_and(|name| wildcard_match(pattern, name))
                || wildcard_match(pattern, &full)
        })
    }

    /// Whether warnings of type `name` (e.g. `misc.highlighting_failure`)
    /// are silenced.
    pub fn is_warning_suppressed(&self, name: &str) -> bool {
        self.suppress_warnings.iter().any(|entry| {
            name == entry
                || name
                    .strip_prefix(entry.as_str())
                    .is_some_and(|rest| rest.starts_with('.'))
        })
    }
}
