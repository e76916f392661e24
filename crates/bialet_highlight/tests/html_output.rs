//! Property tests for rendered HTML.
//!
//! For any input:
//! 1. No raw `<` or `&` from the input survives outside of our own tags.
//! 2. No `<span>` element contains a newline.
//! 3. Stripping tags and unescaping gives back the input.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]
#![allow(
    clippy::disallowed_types,
    reason = "proptest macros internally use Arc"
)]

use bialet_highlight::{highlight, HtmlFormatter};
use proptest::prelude::*;

fn render(source: &str) -> String {
    let formatter = HtmlFormatter {
        nowrap: true,
        ..HtmlFormatter::default()
    };
    formatter.format(source, &highlight(source).spans)
}

/// Remove `<span class="…">` and `</span>`, leaving escaped text.
fn strip_tags(html: &str) -> Result<String, TestCaseError> {
    let mut text = String::new();
    let mut rest = html;
    while let Some(open) = rest.find('<') {
        text.push_str(&rest[..open]);
        let close = rest[open..].find('>');
        prop_assert!(close.is_some(), "unclosed tag in {:?}", html);
        let tag = &rest[open..=open + close.unwrap_or(0)];
        prop_assert!(
            tag == "</span>" || tag.starts_with("<span class=\""),
            "foreign tag {:?}",
            tag
        );
        rest = &rest[open + tag.len()..];
    }
    text.push_str(rest);
    Ok(text)
}

fn unescape(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}

fn source_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        any::<String>(),
        "[<>&\"'a-z(){}%\\\\\n /*]{0,64}",
    ]
}

proptest! {
    #[test]
    fn text_round_trips_through_markup(source in source_strategy()) {
        let html = render(&source);
        let text = strip_tags(&html)?;
        prop_assert!(!text.contains('<'));
        prop_assert!(!text.contains('>'));
        prop_assert_eq!(unescape(&text), source);
    }

    #[test]
    fn no_span_crosses_a_line(source in source_strategy()) {
        let html = render(&source);
        for element in html.split("<span").skip(1) {
            let body = element.split("</span>").next().unwrap();
            prop_assert!(!body.contains('\n'), "newline inside {:?}", body);
        }
    }
}

#[test]
fn renders_a_page_fragment() {
    let source = "class Home {\n  static html { <h1>{{ title }}</h1> }\n}\n";
    let html = HtmlFormatter::default().format(source, &highlight(source).spans);
    assert!(html.starts_with("<div class=\"highlight\"><pre>"));
    assert!(html.contains("<span class=\"nc\">Home</span>"));
    assert!(html.contains("<span class=\"si\">{{</span>"));
    assert!(html.contains("&lt;h1&gt;"));
    assert!(html.ends_with("</pre></div>\n"));
}
