//! HTML rendering of highlighted spans.
//!
//! Output uses the short CSS classes from [`TokenCategory::css_class`], so
//! existing highlighting stylesheets apply unchanged. Spans are closed
//! before every newline and reopened after it; no element crosses a line.

use std::fmt::{self, Write};

use bialet_lexer::{Spanned, TokenCategory};

#[cfg(test)]
mod tests;

/// Renders spans as `<span class="…">` runs inside a `<pre>` block.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HtmlFormatter {
    /// Prepended to every CSS class.
    pub class_prefix: String,
    /// Class of the wrapping `<div>`.
    pub wrapper_class: String,
    /// Emit only the spans, without `<div><pre>`.
    pub nowrap: bool,
}

impl Default for HtmlFormatter {
    fn default() -> Self {
        HtmlFormatter {
            class_prefix: String::new(),
            wrapper_class: "highlight".to_owned(),
            nowrap: false,
        }
    }
}

impl HtmlFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Render to a new string.
    pub fn format(&self, source: &str, spans: &[Spanned]) -> String {
        let mut out = String::with_capacity(source.len() * 2);
        self.write(source, spans, &mut out).ok();
        out
    }

    /// Render into any [`fmt::Write`] sink.
    pub fn write(&self, source: &str, spans: &[Spanned], out: &mut impl Write) -> fmt::Result {
        if !self.nowrap {
            out.write_str("<div class=\"")?;
            write_escaped(out, &self.wrapper_class)?;
            out.write_str("\"><pre>")?;
        }
        for span in spans {
            self.write_span(span.category, span.text(source), out)?;
        }
        if !self.nowrap {
            out.write_str("</pre></div>\n")?;
        }
        Ok(())
    }

    fn write_span(&self, category: TokenCategory, text: &str, out: &mut impl Write) -> fmt::Result {
        let mut lines = text.split('\n');
        if let Some(first) = lines.next() {
            self.write_line_piece(category, first, out)?;
        }
        for line in lines {
            out.write_char('\n')?;
            self.write_line_piece(category, line, out)?;
        }
        Ok(())
    }

    fn write_line_piece(&self, category: TokenCategory, piece: &str, out: &mut impl Write) -> fmt::Result {
        if piece.is_empty() {
            return Ok(());
        }
        out.write_str("<span class=\"")?;
        write_escaped(out, &self.class_prefix)?;
        out.write_str(category.css_class())?;
        out.write_str("\">")?;
        write_escaped(out, piece)?;
        out.write_str("</span>")
    }
}

/// Write `text` with `& < > " '` replaced by entities.
pub fn write_escaped(out: &mut impl Write, text: &str) -> fmt::Result {
    let mut last = 0;
    for (i, b) in text.bytes().enumerate() {
        let entity = match b {
            b'&' => "&amp;",
            b'<' => "&lt;",
            b'>' => "&gt;",
            b'"' => "&quot;",
            b'\'' => "&#39;",
            _ => continue,
        };
        out.write_str(&text[last..i])?;
        out.write_str(entity)?;
        last = i + 1;
    }
    out.write_str(&text[last..])
}

/// Escape `text` into a new string.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    write_escaped(&mut out, text).ok();
    out
}
