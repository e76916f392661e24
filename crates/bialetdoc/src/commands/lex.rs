//! The `lex` command: dump raw classifier spans.

use std::fmt::Write as _;
use std::path::Path;

use bialet_lexer::{classify, Spanned};

use super::{read_file, CommandError};

/// Print every span of `path`, uncoalesced.
pub fn lex_file(path: &str) -> Result<(), CommandError> {
    let content = read_file(Path::new(path))?;
    let listing = format_spans(&content);
    let count = listing.lines().count();
    println!("Spans for '{path}' ({count} spans):");
    print!("{listing}");
    Ok(())
}

/// One line per span: `  Category @ start..end "text"`.
pub fn format_spans(source: &str) -> String {
    let mut out = String::new();
    for span in classify(source) {
        write_span_line(&mut out, &span, source);
    }
    out
}

pub(crate) fn write_span_line(out: &mut String, span: &Spanned, source: &str) {
    writeln!(
        out,
        "  {} @ {}..{} {:?}",
        span.category,
        span.start,
        span.end,
        span.text(source)
    )
    .ok();
}
