//! Lexer registry.
//!
//! Maps language names and file names to the lexers this crate knows. The
//! documentation config names its default language (`highlight_language`)
//! and code blocks name theirs; both resolve here.

use std::path::Path;
use std::sync::OnceLock;

use rustc_hash::FxHashMap;

#[cfg(test)]
mod tests;

/// Static metadata describing one lexer.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct LexerInfo {
    /// Display name.
    pub name: &'static str,
    /// Short names accepted in code blocks and config.
    pub aliases: &'static [&'static str],
    /// File name globs. Only `*.ext` and exact names are supported.
    pub filenames: &'static [&'static str],
    pub url: &'static str,
}

/// Bialet's Wren dialect.
pub static WREN: LexerInfo = LexerInfo {
    name: "Wren",
    aliases: &["bialet"],
    filenames: &["*.wren"],
    url: "https://bialet.dev",
};

static BUILTIN_LEXERS: [&LexerInfo; 1] = [&WREN];

static GLOBAL_REGISTRY: OnceLock<LexerRegistry> = OnceLock::new();

/// Lookup table from lowercased alias or name to lexer.
pub struct LexerRegistry {
    by_alias: FxHashMap<String, &'static LexerInfo>,
    lexers: Vec<&'static LexerInfo>,
}

impl LexerRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        LexerRegistry {
            by_alias: FxHashMap::default(),
            lexers: Vec::new(),
        }
    }

    /// Register a lexer under its name and every alias.
    ///
    /// Later registrations win on alias clashes.
    pub fn register(&mut self, info: &'static LexerInfo) {
        for key in std::iter::once(info.name).chain(info.aliases.iter().copied()) {
            self.by_alias.insert(key.to_ascii_lowercase(), info);
        }
        self.lexers.push(info);
    }

    /// Look up a lexer by name or alias, ignoring ASCII case.
    pub fn get(&self, language: &str) -> Option<&'static LexerInfo> {
        self.by_alias
            .get(&language.trim().to_ascii_lowercase())
            .copied()
    }

    /// First lexer whose filename globs match the file name of `path`.
    pub fn for_path(&self, path: &Path) -> Option<&'static LexerInfo> {
        let file_name = path.file_name()?.to_str()?;
        self.lexers
            .iter()
            .copied()
            .find(|info| info.filenames.iter().any(|glob| matches_filename(glob, file_name)))
    }

    /// All registered lexers, in registration order.
    pub fn lexers(&self) -> impl Iterator<Item = &'static LexerInfo> + '_ {
        self.lexers.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.lexers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lexers.is_empty()
    }
}

impl Default for LexerRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// The registry with every built-in lexer.
pub fn global_registry() -> &'static LexerRegistry {
    GLOBAL_REGISTRY.get_or_init(|| {
        let mut registry = LexerRegistry::new();
        for info in BUILTIN_LEXERS {
            registry.register(info);
        }
        registry
    })
}

/// Resolve a language name or alias against the built-in lexers.
pub fn find_lexer(language: &str) -> Option<&'static LexerInfo> {
    global_registry().get(language)
}

/// Resolve a lexer from a file path's name.
pub fn find_lexer_for_path(path: &Path) -> Option<&'static LexerInfo> {
    global_registry().for_path(path)
}

fn matches_filename(glob: &str, file_name: &str) -> bool {
    match glob.strip_prefix('*') {
        Some(suffix) => file_name.len() > suffix.len() && file_name.ends_with(suffix),
        None => glob == file_name,
    }
}
