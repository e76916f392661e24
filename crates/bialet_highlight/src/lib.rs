//! Syntax highlighting for Bialet documentation.
//!
//! Sits between [`bialet_lexer`] and whatever renders the docs:
//!
//! - [`registry`]: which lexer handles a language name or file.
//! - [`highlight()`]: classify and coalesce, reporting unclosed modes.
//! - [`HtmlFormatter`]: spans to `<span class="…">` markup.
//!
//! ```
//! use bialet_highlight::{highlight, HtmlFormatter};
//!
//! let source = "var x = \"hi\"";
//! let html = HtmlFormatter::default().format(source, &highlight(source).spans);
//! assert!(html.contains("<span class=\"k\">var</span>"));
//! ```

mod highlight;
mod html;
pub mod registry;

pub use highlight::{highlight, HighlightError, HighlightOptions, Highlighted, Highlighter};
pub use html::{escape, write_escaped, HtmlFormatter};
pub use registry::{find_lexer, find_lexer_for_path, LexerInfo};
