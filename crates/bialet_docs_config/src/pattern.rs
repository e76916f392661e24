//! Shell-style wildcards for `exclude_patterns`.

/// Match `text` against `pattern`, where `*` matches any run of characters
/// (including none) and `?` exactly one. Everything else is literal.
pub fn wildcard_match(pattern: &str, text: &str) -> bool {
    let pattern: Vec<char> = pattern.chars().collect();
    let text: Vec<char> = text.chars().collect();

    let (mut p, mut t) = (0, 0);
    // Last `*` seen, and the text position it is currently absorbing up to.
    let mut backtrack: Option<(usize, usize)> = None;

    while t < text.len() {
        match pattern.get(p) {
            Some('*') => {
                backtrack = Some((p, t));
                p += 1;
            }
            Some(&c) if c == '?' || c == text[t] => {
                p += 1;
                t += 1;
            }
            _ => match backtrack {
                Some((star, absorbed)) => {
                    p = star + 1;
                    t = absorbed + 1;
                    backtrack = Some((star, absorbed + 1));
                }
                None => return false,
            },
        }
    }
    pattern[p..].iter().all(|&c| c == '*')
}

#[cfg(test)]
mod tests {
    use super::wildcard_match;

    #[test]
    fn literal() {
        assert!(wildcard_match("requirements.txt", "requirements.txt"));
        assert!(!wildcard_match("requirements.txt", "requirements.txt.bak"));
        assert!(!wildcard_match("requirements.txt", "requirements"));
    }

    #[test]
    fn star() {
        assert!(wildcard_match("*.txt", "notes.txt"));
        assert!(wildcard_match("*.txt", ".txt"));
        assert!(wildcard_match("_build/*", "_build/html/index.html"));
        assert!(wildcard_match("a*b*c", "aXXbYYc"));
        assert!(!wildcard_match("a*b*c", "aXXbYY"));
        assert!(wildcard_match("*", ""));
    }

    #[test]
    fn question_mark() {
        assert!(wildcard_match("v?.md", "v1.md"));
        assert!(!wildcard_match("v?.md", "v10.md"));
        assert!(wildcard_match("?", "é"));
    }
}
