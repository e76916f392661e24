use super::*;
use pretty_assertions::assert_eq;

#[test]
fn alias_and_name_resolve() {
    assert_eq!(find_lexer("bialet"), Some(&WREN));
    assert_eq!(find_lexer("wren"), Some(&WREN));
    assert_eq!(find_lexer("Wren"), Some(&WREN));
    assert_eq!(find_lexer("  BIALET "), Some(&WREN));
}

#[test]
fn unknown_language_is_none() {
    assert_eq!(find_lexer("python"), None);
    assert_eq!(find_lexer(""), None);
}

#[test]
fn path_lookup_uses_file_name() {
    assert_eq!(find_lexer_for_path(Path::new("app/index.wren")), Some(&WREN));
    assert_eq!(find_lexer_for_path(Path::new("index.wren.bak")), None);
    assert_eq!(find_lexer_for_path(Path::new(".wren")), None);
    assert_eq!(find_lexer_for_path(Path::new("app/")), None);
}

#[test]
fn exact_filename_globs() {
    assert!(matches_filename("Makefile", "Makefile"));
    assert!(!matches_filename("Makefile", "makefile"));
    assert!(matches_filename("*.wren", "a.wren"));
}

#[test]
fn later_registration_wins_alias() {
    static OTHER: LexerInfo = LexerInfo {
        name: "Other",
        aliases: &["bialet"],
        filenames: &[],
        url: "",
    };
    let mut registry = LexerRegistry::new();
    registry.register(&WREN);
    registry.register(&OTHER);
    assert_eq!(registry.get("bialet"), Some(&OTHER));
    assert_eq!(registry.get("wren"), Some(&WREN));
    assert_eq!(registry.len(), 2);
}

#[test]
fn global_registry_lists_builtins() {
    let names: Vec<_> = global_registry().lexers().map(|l| l.name).collect();
    assert_eq!(names, vec!["Wren"]);
    assert!(!global_registry().is_empty());
}
