//! Scanning modes.

use std::fmt;

/// A named classifier state selecting the active rule set.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Mode {
    /// Top-level code. Also re-entered for every `(`.
    Root,
    /// Inside `/* ... */`. Nests.
    Comment,
    /// Inside `"..."`.
    StringDouble,
    /// Inside `'...'`.
    StringSingle,
    /// Markup after an HTML tag, up to the next tag.
    Html,
    /// Inside `%( ... )` within a string.
    Interpolation,
    /// Inside `{{ ... }}`.
    HtmlInterpolation,
}

impl Mode {
    /// Every mode, in declaration order.
    pub const ALL: [Mode; 7] = [
        Mode::Root,
        Mode::Comment,
        Mode::StringDouble,
        Mode::StringSingle,
        Mode::Html,
        Mode::Interpolation,
        Mode::HtmlInterpolation,
    ];

    /// Lowercase mode name, e.g. `"string_double"`.
    pub const fn name(self) -> &'static str {
        match self {
            Mode::Root => "root",
            Mode::Comment => "comment",
            Mode::StringDouble => "string_double",
            Mode::StringSingle => "string_single",
            Mode::Html => "html",
            Mode::Interpolation => "interpolation",
            Mode::HtmlInterpolation => "html_interpolation",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Mode {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}
