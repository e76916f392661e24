//! Classification for display.
//!
//! [`highlight`] runs the classifier to completion and merges runs of equal
//! categories, which is what a renderer wants: `/* a /* b */ */` is one
//! comment, not seven pieces. [`Highlighter`] adds language resolution on
//! top, following the documentation config.

use std::path::Path;

use bialet_lexer::{classify, Mode, Spanned, TokenCategory};
use serde::Serialize;

use crate::registry::{find_lexer, find_lexer_for_path, LexerInfo};


/// Errors from resolving a highlighter.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HighlightError {
    #[error("no lexer for language `{language}`")]
    UnknownLanguage { language: String },
}

/// Highlighting behaviour taken from the documentation config.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct HighlightOptions {
    /// Fall back to plain text instead of failing on an unknown language.
    pub guess_lang: bool,
}

/// Coalesced spans for one document.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Highlighted {
    pub spans: Vec<Spanned>,
    /// The innermost mode still open at end of input, if any.
    ///
    /// `Some(Mode::StringDouble)` means a string was never closed; the
    /// rest of the input was classified as string text.
    pub unterminated: Option<Mode>,
}

impl Highlighted {
    /// Plain text: the whole input as one [`TokenCategory::Other`] span.
    pub fn plain(source: &str) -> Self {
        let spans = if source.is_empty() {
            Vec::new()
        } else {
            vec![Spanned::new(0, source.len(), TokenCategory::Other)]
        };
        Highlighted {
            spans,
            unterminated: None,
        }
    }

    /// Whether any span is an [`TokenCategory::Error`].
    pub fn has_errors(&self) -> bool {
        self.spans.iter().any(|s| s.category == TokenCategory::Error)
    }
}

/// Classify `source` and merge adjacent spans of the same category.
#[tracing::instrument(level = "debug", skip_all, fields(len = source.len()))]
pub fn highlight(source: &str) -> Highlighted {
    let mut classifier = classify(source);
    let mut spans: Vec<Spanned> = Vec::new();
    let mut raw_count = 0usize;

    for span in classifier.by_ref() {
        raw_count += 1;
        match spans.last_mut() {
            Some(last) if last.category == span.category && last.end == span.start => {
                last.end = span.end;
            }
            _ => spans.push(span),
        }
    }

    let unterminated = (classifier.depth() > 1).then(|| classifier.current_mode());
    if let Some(mode) = unterminated {
        tracing::debug!(%mode, depth = classifier.depth(), "input ended inside an open mode");
    }
    tracing::trace!(raw = raw_count, coalesced = spans.len(), "highlight complete");

    Highlighted {
        spans,
        unterminated,
    }
}

/// A resolved language plus options.
#[derive(Copy, Clone, Debug)]
pub struct Highlighter {
    lexer: Option<&'static LexerInfo>,
    options: HighlightOptions,
}

impl Highlighter {
    /// Resolve `language` (a lexer name or alias).
    ///
    /// With `guess_lang` set, an unknown language gives a plain-text
    /// highlighter instead of an error.
    pub fn for_language(language: &str, options: HighlightOptions) -> Result<Self, HighlightError> {
        match find_lexer(language) {
            Some(lexer) => Ok(Highlighter {
                lexer: Some(lexer),
                options,
            }),
            None if options.guess_lang => {
                tracing::debug!(language, "unknown language, falling back to plain text");
                Ok(Highlighter {
                    lexer: None,
                    options,
                })
            }
            None => Err(HighlightError::UnknownLanguage {
                language: language.to_owned(),
            }),
        }
    }

    /// Resolve from a file name, or `fallback` when no lexer claims it.
    pub fn for_path(
        path: &Path,
        fallback: &str,
        options: HighlightOptions,
    ) -> Result<Self, HighlightError> {
        match find_lexer_for_path(path) {
            Some(lexer) => Ok(Highlighter {
                lexer: Some(lexer),
                options,
            }),
            None => Self::for_language(fallback, options),
        }
    }

    /// The resolved lexer, or `None` for plain text.
    pub fn lexer(&self) -> Option<&'static LexerInfo> {
        self.lexer
    }

    pub fn options(&self) -> HighlightOptions {
        self.options
    }

    pub fn highlight(&self, source: &str) -> Highlighted {
        match self.lexer {
            Some(_) => highlight(source),
            None => Highlighted::plain(source),
        }
    }
}
