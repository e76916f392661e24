//! Rule tables, one ordered list per [`Mode`].
//!
//! Order within a table is significant: the classifier takes the first rule
//! that matches, not the longest. Keywords must come before the identifier
//! rules, comments before the operator run, and so on. Do not reorder.

use crate::category::TokenCategory as Cat;
use crate::mode::Mode;
use crate::pattern::Pattern;


/// What a matching rule does to the mode stack.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Action {
    /// Stay in the current mode.
    Stay,
    /// Enter a mode; it becomes current until popped.
    Push(Mode),
    /// Return to the enclosing mode. No-op at the bottom of the stack.
    Pop,
}

/// One `(pattern, category, action)` entry of a rule table.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Rule {
    pub pattern: Pattern,
    pub category: Cat,
    pub action: Action,
}

/// A mode's own rules, plus the mode whose rules are tried after them.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct RuleSet {
    pub rules: &'static [Rule],
    pub include: Option<Mode>,
}

const fn rule(pattern: Pattern, category: Cat, action: Action) -> Rule {
    Rule {
        pattern,
        category,
        action,
    }
}

const fn stay(pattern: Pattern, category: Cat) -> Rule {
    rule(pattern, category, Action::Stay)
}

const KEYWORDS: &[&str] = &[
    "as",
    "break",
    "class",
    "construct",
    "continue",
    "else",
    "for",
    "foreign",
    "if",
    "import",
    "return",
    "static",
    "super",
    "this",
    "var",
    "while",
];

const CONSTANTS: &[&str] = &["true", "false", "null"];

const WORD_OPERATORS: &[&str] = &["in", "is"];

/// Characters valid after `\` in both string forms.
const ESCAPE_CHARS: &[u8] = b"\\%\"0abefnrtv";

static ROOT: [Rule; 24] = [
    stay(Pattern::Whitespace, Cat::Whitespace),
    // Markup
    rule(Pattern::Literal("{{"), Cat::StringInterpol, Action::Push(Mode::HtmlInterpolation)),
    rule(Pattern::HtmlTag, Cat::Other, Action::Push(Mode::Html)),
    stay(Pattern::Literal("<!doctype html>"), Cat::Other),
    stay(Pattern::OneOf(b",\\[]{}"), Cat::Punctuation),
    // `(` enters a fresh root, so inside an interpolation the matching `)`
    // pops back here as punctuation instead of closing the interpolation.
    rule(Pattern::Literal("("), Cat::Punctuation, Action::Push(Mode::Root)),
    rule(Pattern::Literal(")"), Cat::Punctuation, Action::Pop),
    // Keywords
    stay(Pattern::Words(KEYWORDS), Cat::Keyword),
    stay(Pattern::Words(CONSTANTS), Cat::KeywordConstant),
    stay(Pattern::Words(WORD_OPERATORS), Cat::OperatorWord),
    // Comments
    rule(Pattern::Literal("/*"), Cat::CommentMultiline, Action::Push(Mode::Comment)),
    stay(Pattern::LineComment, Cat::CommentSingle),
    stay(Pattern::SpecialComment, Cat::CommentSpecial),
    // Names and operators
    stay(Pattern::OperatorRun, Cat::Operator),
    stay(Pattern::LowerName, Cat::Name),
    stay(Pattern::UpperName, Cat::NameClass),
    stay(Pattern::ClassVariable, Cat::NameVariableClass),
    stay(Pattern::InstanceVariable, Cat::NameVariableInstance),
    // Numbers
    stay(Pattern::HexNumber, Cat::NumberHex),
    stay(Pattern::Decimal, Cat::NumberFloat),
    // Strings
    stay(Pattern::RawString, Cat::String),
    rule(Pattern::Literal("\""), Cat::StringDouble, Action::Push(Mode::StringDouble)),
    rule(Pattern::Literal("'"), Cat::StringSingle, Action::Push(Mode::StringSingle)),
    // Queries
    stay(Pattern::Backtick, Cat::StringBacktick),
];

static COMMENT: [Rule; 3] = [
    rule(Pattern::Literal("/*"), Cat::CommentMultiline, Action::Push(Mode::Comment)),
    rule(Pattern::Literal("*/"), Cat::CommentMultiline, Action::Pop),
    stay(Pattern::CommentText, Cat::CommentMultiline),
];

static STRING_DOUBLE: [Rule; 7] = [
    rule(Pattern::Literal("\""), Cat::StringDouble, Action::Pop),
    stay(Pattern::CharEscape(ESCAPE_CHARS), Cat::StringEscape),
    stay(Pattern::HexEscape { marker: b'x', digits: 2 }, Cat::StringEscape),
    stay(Pattern::HexEscape { marker: b'u', digits: 4 }, Cat::StringEscape),
    stay(Pattern::HexEscape { marker: b'U', digits: 8 }, Cat::StringEscape),
    rule(Pattern::Literal("%("), Cat::StringInterpol, Action::Push(Mode::Interpolation)),
    stay(Pattern::StringText { quote: b'"' }, Cat::StringDouble),
];

static STRING_SINGLE: [Rule; 7] = [
    rule(Pattern::Literal("'"), Cat::StringSingle, Action::Pop),
    stay(Pattern::CharEscape(ESCAPE_CHARS), Cat::StringEscape),
    stay(Pattern::HexEscape { marker: b'x', digits: 2 }, Cat::StringEscape),
    stay(Pattern::HexEscape { marker: b'u', digits: 4 }, Cat::StringEscape),
    stay(Pattern::HexEscape { marker: b'U', digits: 8 }, Cat::StringEscape),
    rule(Pattern::Literal("%("), Cat::StringInterpol, Action::Push(Mode::Interpolation)),
    stay(Pattern::StringText { quote: b'\'' }, Cat::StringSingle),
];

static HTML: [Rule; 3] = [
    rule(Pattern::MarkupTag, Cat::Other, Action::Pop),
    rule(Pattern::Literal("{{"), Cat::StringInterpol, Action::Push(Mode::HtmlInterpolation)),
    stay(Pattern::MarkupText, Cat::Other),
];

static INTERPOLATION: [Rule; 1] = [rule(Pattern::Literal(")"), Cat::StringInterpol, Action::Pop)];

static HTML_INTERPOLATION: [Rule; 1] =
    [rule(Pattern::Literal("}}"), Cat::StringInterpol, Action::Pop)];

impl Mode {
    /// The ordered rules for this mode.
    pub fn rule_set(self) -> RuleSet {
        match self {
            Mode::Root => RuleSet {
                rules: &ROOT,
                include: None,
            },
            Mode::Comment => RuleSet {
                rules: &COMMENT,
                include: None,
            },
            Mode::StringDouble => RuleSet {
                rules: &STRING_DOUBLE,
                include: None,
            },
            Mode::StringSingle => RuleSet {
                rules: &STRING_SINGLE,
                include: None,
            },
            Mode::Html => RuleSet {
                rules: &HTML,
                include: None,
            },
            Mode::Interpolation => RuleSet {
                rules: &INTERPOLATION,
                include: Some(Mode::Root),
            },
            Mode::HtmlInterpolation => RuleSet {
                rules: &HTML_INTERPOLATION,
                include: Some(Mode::Root),
            },
        }
    }
}

impl RuleSet {
    /// All rules in match order: own rules first, then the included mode's.
    pub fn iter(self) -> impl Iterator<Item = &'static Rule> {
        let included = self.include.map_or(&[][..], |m| m.rule_set().rules);
        self.rules.iter().chain(included)
    }
}
