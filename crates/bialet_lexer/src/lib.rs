//! Lexical classifier for Bialet's Wren dialect.
//!
//! Turns source text into a lazy sequence of [`Spanned`] values, each a
//! byte range tagged with a [`TokenCategory`]. The output is meant for
//! presentation (syntax highlighting in rendered documentation): no tree is
//! built and no semantic analysis is performed.
//!
//! # Architecture
//!
//! ```text
//! &str ──► Cursor ──► Classifier ──► Spanned { start, end, category }
//!                        │
//!                        ├── mode stack (SmallVec<[Mode; 8]>)
//!                        └── Mode::rule_set() ──► ordered &'static [Rule]
//! ```
//!
//! At each position the rules of the current [`Mode`] are tried in declared
//! order and the first one that matches wins. A rule may push a mode or pop
//! back to the enclosing one. Text no rule accepts is emitted one character
//! at a time as [`TokenCategory::Error`], so the spans always cover the whole
//! input.
//!
//! # Example
//!
//! ```
//! use bialet_lexer::{classify, TokenCategory};
//!
//! let source = "var x = 1";
//! let categories: Vec<_> = classify(source).map(|s| s.category).collect();
//! assert_eq!(categories[0], TokenCategory::Keyword);
//! ```

mod category;
mod classifier;
mod cursor;
mod mode;
mod pattern;
mod rules;

pub use category::TokenCategory;
pub use classifier::{classify, Classifier, Spanned};
pub use cursor::Cursor;
pub use mode::Mode;
pub use pattern::Pattern;
pub use rules::{Action, Rule, RuleSet};
