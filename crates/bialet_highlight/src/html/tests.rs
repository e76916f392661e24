use super::*;
use bialet_lexer::TokenCategory::{CommentMultiline, Keyword, Other, StringDouble, Whitespace};
use pretty_assertions::assert_eq;

fn nowrap() -> HtmlFormatter {
    HtmlFormatter {
        nowrap: true,
        ..HtmlFormatter::default()
    }
}

#[test]
fn escapes_all_five() {
    assert_eq!(escape("<a href=\"x\">&'"), "&lt;a href=&quot;x&quot;&gt;&amp;&#39;");
    assert_eq!(escape("plain é"), "plain é");
}

#[test]
fn wraps_by_default() {
    let source = "if";
    let html = HtmlFormatter::default().format(source, &[Spanned::new(0, 2, Keyword)]);
    assert_eq!(
        html,
        "<div class=\"highlight\"><pre><span class=\"k\">if</span></pre></div>\n"
    );
}

#[test]
fn class_prefix_applies_to_every_span() {
    let formatter = HtmlFormatter {
        class_prefix: "tok-".into(),
        ..nowrap()
    };
    let source = "if x";
    let spans = [
        Spanned::new(0, 2, Keyword),
        Spanned::new(2, 3, Whitespace),
        Spanned::new(3, 4, TokenCategory::Name),
    ];
    assert_eq!(
        formatter.format(source, &spans),
        "<span class=\"tok-k\">if</span><span class=\"tok-w\"> </span><span class=\"tok-n\">x</span>"
    );
}

#[test]
fn spans_split_at_newlines() {
    let source = "/* a\nb */";
    let html = nowrap().format(source, &[Spanned::new(0, source.len(), CommentMultiline)]);
    assert_eq!(
        html,
        "<span class=\"cm\">/* a</span>\n<span class=\"cm\">b */</span>"
    );
}

#[test]
fn blank_lines_emit_no_empty_spans() {
    let source = "\n\n";
    let html = nowrap().format(source, &[Spanned::new(0, 2, Whitespace)]);
    assert_eq!(html, "\n\n");
}

#[test]
fn markup_in_source_is_escaped() {
    let source = "<p>\"hi\"</p>";
    let spans = [
        Spanned::new(0, 3, Other),
        Spanned::new(3, 7, StringDouble),
        Spanned::new(7, 11, Other),
    ];
    let html = nowrap().format(source, &spans);
    assert_eq!(
        html,
        "<span class=\"x\">&lt;p&gt;</span><span class=\"s2\">&quot;hi&quot;</span><span class=\"x\">&lt;/p&gt;</span>"
    );
}

#[test]
fn wrapper_class_is_escaped() {
    let formatter = HtmlFormatter {
        wrapper_class: "a\"b".into(),
        ..HtmlFormatter::default()
    };
    assert_eq!(
        formatter.format("", &[]),
        "<div class=\"a&quot;b\"><pre></pre></div>\n"
    );
}
