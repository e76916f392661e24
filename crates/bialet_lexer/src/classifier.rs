//! The mode-stack classifier.
//!
//! [`Classifier`] is an iterator of [`Spanned`] values. It holds a cursor
//! and a stack of [`Mode`]s seeded with [`Mode::Root`]; nothing else. The
//! stack is never empty: a pop at depth one leaves it alone.
//!
//! # Unmatched input
//!
//! When no rule of the current mode matches, the character at the cursor is
//! emitted on its own as [`TokenCategory::Error`] and scanning continues in
//! the same mode.
//!
//! Unterminated strings and comments are not detected here: the rest of the
//! input is simply classified under the open mode. Callers that care can
//! inspect [`Classifier::current_mode`] once the iterator is exhausted.

use std::iter::FusedIterator;

use smallvec::{smallvec, SmallVec};

use crate::category::TokenCategory;
use crate::cursor::Cursor;
use crate::mode::Mode;
use crate::rules::{Action, Rule};


/// A classified byte range of the input.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Spanned {
    /// Byte offset of the first byte.
    pub start: usize,
    /// Byte offset one past the last byte.
    pub end: usize,
    pub category: TokenCategory,
}

impl Spanned {
    #[inline]
    pub const fn new(start: usize, end: usize, category: TokenCategory) -> Self {
        Spanned {
            start,
            end,
            category,
        }
    }

    /// Length in bytes.
    #[inline]
    pub const fn len(&self) -> usize {
        self.end - self.start
    }

    /// Always `false` for spans produced by the classifier.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// The covered text. Empty if the span does not fit `source`.
    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        source.get(self.start..self.end).unwrap_or("")
    }
}

/// Lazy classifier over one input text.
///
/// Created by [`classify`]. Each document gets a fresh classifier; no state
/// carries over between inputs.
#[derive(Clone, Debug)]
pub struct Classifier<'a> {
    cursor: Cursor<'a>,
    stack: SmallVec<[Mode; 8]>,
}

/// Classify `source`, starting in [`Mode::Root`].
pub fn classify(source: &str) -> Classifier<'_> {
    Classifier::new(source)
}

impl<'a> Classifier<'a> {
    pub fn new(source: &'a str) -> Self {
        Classifier {
            cursor: Cursor::new(source),
            stack: smallvec![Mode::Root],
        }
    }

    /// The mode on top of the stack.
    #[inline]
    pub fn current_mode(&self) -> Mode {
        self.stack.last().copied().unwrap_or(Mode::Root)
    }

    /// Stack depth. Always at least one.
    #[inline]
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// The full mode stack, bottom first.
    pub fn modes(&self) -> &[Mode] {
        &self.stack
    }

    /// Bytes consumed so far.
    #[inline]
    pub fn offset(&self) -> usize {
        self.cursor.pos()
    }

    /// First rule of the current mode that matches at the cursor.
    fn find_match(&self) -> Option<(&'static Rule, usize)> {
        self.current_mode()
            .rule_set()
            .iter()
            .find_map(|rule| rule.pattern.match_at(self.cursor).map(|len| (rule, len)))
    }

    fn apply(&mut self, action: Action) {
        match action {
            Action::Stay => {}
            Action::Push(mode) => self.stack.push(mode),
            Action::Pop => {
                if self.stack.len() > 1 {
                    self.stack.pop();
                }
            }
        }
    }
}

impl Iterator for Classifier<'_> {
    type Item = Spanned;

    fn next(&mut self) -> Option<Spanned> {
        if self.cursor.is_eof() {
            return None;
        }
        let start = self.cursor.pos();

        if let Some((rule, len)) = self.find_match() {
            self.cursor.advance_n(len);
            self.apply(rule.action);
            return Some(Spanned::new(start, start + len, rule.category));
        }

        self.cursor.advance_char();
        Some(Spanned::new(start, self.cursor.pos(), TokenCategory::Error))
    }
}

impl FusedIterator for Classifier<'_> {}
