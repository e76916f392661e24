//! Property-based tests for the classifier.
//!
//! For arbitrary input, and for input built from the grammar's own
//! delimiters, the classifier must:
//! 1. Cover every byte exactly once, in order, with non-empty spans.
//! 2. Keep at least one mode on the stack after every span.
//! 3. Produce the same spans when run twice.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]
#![allow(
    clippy::disallowed_types,
    reason = "proptest macros internally use Arc"
)]

use bialet_lexer::{classify, Mode, Spanned, TokenCategory};
use proptest::prelude::*;

/// Fragments that open, close or escape modes, mixed with plain text.
fn fragment_strategy() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec![
        "(", ")", "\"", "'", "\"\"\"", "%(", "\\", "\\n", "\\x4", "\\u00e9", "/*", "*/", "//",
        "#", "#a(", "{{", "}}", "{", "<p>", "</p>", "<", ">", "<!doctype html>", "`", ".", "if",
        "is", "true", "Foo", "_bar", "__baz", "0x1f", "3.14", "1e", " ", "\n", "é", "@", "x",
    ])
}

fn soup_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(fragment_strategy(), 0..48).prop_map(|parts| parts.concat())
}

fn assert_covers(source: &str) -> Result<(), TestCaseError> {
    let mut classifier = classify(source);
    let mut expected_start = 0;
    while let Some(Spanned { start, end, .. }) = classifier.next() {
        prop_assert_eq!(start, expected_start, "gap or overlap in {:?}", source);
        prop_assert!(end > start, "empty span at {} in {:?}", start, source);
        prop_assert!(source.is_char_boundary(end), "split character in {:?}", source);
        prop_assert!(classifier.depth() >= 1);
        expected_start = end;
    }
    prop_assert_eq!(expected_start, source.len());
    prop_assert_eq!(classifier.offset(), source.len());
    Ok(())
}

proptest! {
    #[test]
    fn arbitrary_text_is_fully_covered(source in any::<String>()) {
        assert_covers(&source)?;
    }

    #[test]
    fn delimiter_soup_is_fully_covered(source in soup_strategy()) {
        assert_covers(&source)?;
    }

    #[test]
    fn classification_is_deterministic(source in soup_strategy()) {
        let first: Vec<_> = classify(&source).collect();
        let second: Vec<_> = classify(&source).collect();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn balanced_interpolation_returns_to_root(
        parts in prop::collection::vec("[a-z0-9 +]{0,6}", 1..6)
    ) {
        let source = format!("\"{}\"", parts.join("%(x)"));
        let mut classifier = classify(&source);
        classifier.by_ref().for_each(drop);
        prop_assert_eq!(classifier.modes(), &[Mode::Root][..]);
    }

    #[test]
    fn unmatched_input_is_one_character_per_error(source in soup_strategy()) {
        for span in classify(&source) {
            if span.category == TokenCategory::Error {
                prop_assert_eq!(span.text(&source).chars().count(), 1);
            }
        }
    }
}
