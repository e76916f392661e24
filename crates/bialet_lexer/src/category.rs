//! Token categories.
//!
//! The dotted names and short CSS classes are an external contract: style
//! sheets and downstream renderers key off them, so neither may change.

use std::fmt;


/// Presentation category assigned to a span of source text.
///
/// Flat, payload-free, one byte. Discriminants are grouped by family so a
/// category can be compared or stored as a `u8`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[repr(u8)]
pub enum TokenCategory {
    // Trivia: 0-1
    Whitespace = 0,
    Punctuation = 1,

    // Keywords & operators: 8-11
    Keyword = 8,
    KeywordConstant = 9,
    Operator = 10,
    OperatorWord = 11,

    // Names: 16-19
    Name = 16,
    NameClass = 17,
    NameVariableClass = 18,
    NameVariableInstance = 19,

    // Numbers: 24-25
    NumberHex = 24,
    NumberFloat = 25,

    // Strings: 32-37
    String = 32,
    StringDouble = 33,
    StringSingle = 34,
    StringBacktick = 35,
    StringEscape = 36,
    StringInterpol = 37,

    // Comments: 48-50
    CommentSingle = 48,
    CommentMultiline = 49,
    CommentSpecial = 50,

    // Pass-through & errors
    Other = 64,
    Error = 255,
}

impl TokenCategory {
    /// Every category, in declaration order.
    pub const ALL: [TokenCategory; 23] = [
        TokenCategory::Whitespace,
        TokenCategory::Punctuation,
        TokenCategory::Keyword,
        TokenCategory::KeywordConstant,
        TokenCategory::Operator,
        TokenCategory::OperatorWord,
        TokenCategory::Name,
        TokenCategory::NameClass,
        TokenCategory::NameVariableClass,
        TokenCategory::NameVariableInstance,
        TokenCategory::NumberHex,
        TokenCategory::NumberFloat,
        TokenCategory::String,
        TokenCategory::StringDouble,
        TokenCategory::StringSingle,
        TokenCategory::StringBacktick,
        TokenCategory::StringEscape,
        TokenCategory::StringInterpol,
        TokenCategory::CommentSingle,
        TokenCategory::CommentMultiline,
        TokenCategory::CommentSpecial,
        TokenCategory::Other,
        TokenCategory::Error,
    ];

    /// Stable dotted name, e.g. `"Name.Class"`.
    pub const fn name(self) -> &'static str {
        match self {
            TokenCategory::Whitespace => "Whitespace",
            TokenCategory::Punctuation => "Punctuation",
            TokenCategory::Keyword => "Keyword",
            TokenCategory::KeywordConstant => "Keyword.Constant",
            TokenCategory::Operator => "Operator",
            TokenCategory::OperatorWord => "Operator.Word",
            TokenCategory::Name => "Name",
            TokenCategory::NameClass => "Name.Class",
            TokenCategory::NameVariableClass => "Name.Variable.Class",
            TokenCategory::NameVariableInstance => "Name.Variable.Instance",
            TokenCategory::NumberHex => "Number.Hex",
            TokenCategory::NumberFloat => "Number.Float",
            TokenCategory::String => "String",
            TokenCategory::StringDouble => "String.Double",
            TokenCategory::StringSingle => "String.Single",
            TokenCategory::StringBacktick => "String.Backtick",
            TokenCategory::StringEscape => "String.Escape",
            TokenCategory::StringInterpol => "String.Interpol",
            TokenCategory::CommentSingle => "Comment.Single",
            TokenCategory::CommentMultiline => "Comment.Multiline",
            TokenCategory::CommentSpecial => "Comment.Special",
            TokenCategory::Other => "Other",
            TokenCategory::Error => "Error",
        }
    }

    /// Stable short CSS class, e.g. `"nc"` for `Name.Class`.
    pub const fn css_class(self) -> &'static str {
        match self {
            TokenCategory::Whitespace => "w",
            TokenCategory::Punctuation => "p",
            TokenCategory::Keyword => "k",
            TokenCategory::KeywordConstant => "kc",
            TokenCategory::Operator => "o",
            TokenCategory::OperatorWord => "ow",
            TokenCategory::Name => "n",
            TokenCategory::NameClass => "nc",
            TokenCategory::NameVariableClass => "vc",
            TokenCategory::NameVariableInstance => "vi",
            TokenCategory::NumberHex => "mh",
            TokenCategory::NumberFloat => "mf",
            TokenCategory::String => "s",
            TokenCategory::StringDouble => "s2",
            TokenCategory::StringSingle => "s1",
            TokenCategory::StringBacktick => "sb",
            TokenCategory::StringEscape => "se",
            TokenCategory::StringInterpol => "si",
            TokenCategory::CommentSingle => "c1",
            TokenCategory::CommentMultiline => "cm",
            TokenCategory::CommentSpecial => "cs",
            TokenCategory::Other => "x",
            TokenCategory::Error => "err",
        }
    }

    /// Parent in the dotted hierarchy, or `None` for a top-level category.
    ///
    /// `Name.Variable.Class` has no `Name.Variable` variant of its own, so
    /// its parent is `Name`.
    pub const fn parent(self) -> Option<TokenCategory> {
        match self {
            TokenCategory::KeywordConstant => Some(TokenCategory::Keyword),
            TokenCategory::OperatorWord => Some(TokenCategory::Operator),
            TokenCategory::NameClass
            | TokenCategory::NameVariableClass
            | TokenCategory::NameVariableInstance => Some(TokenCategory::Name),
            TokenCategory::StringDouble
            | TokenCategory::StringSingle
            | TokenCategory::StringBacktick
            | TokenCategory::StringEscape
            | TokenCategory::StringInterpol => Some(TokenCategory::String),
            _ => None,
        }
    }

    /// Inverse of [`name()`](Self::name).
    pub fn from_name(name: &str) -> Option<TokenCategory> {
        Self::ALL.into_iter().find(|c| c.name() == name)
    }

    /// Returns `true` for the three comment categories.
    #[inline]
    pub fn is_comment(self) -> bool {
        matches!(
            self,
            TokenCategory::CommentSingle
                | TokenCategory::CommentMultiline
                | TokenCategory::CommentSpecial
        )
    }

    /// Returns `true` for `String` and every `String.*` category.
    #[inline]
    pub fn is_string(self) -> bool {
        self == TokenCategory::String || self.parent() == Some(TokenCategory::String)
    }
}

impl fmt::Display for TokenCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for TokenCategory {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}
