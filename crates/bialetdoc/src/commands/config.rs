//! The `config` command: print the resolved configuration as JSON.

use std::path::Path;

use bialet_docs_config::DocsConfig;

use super::CommandError;

/// Print the configuration at `path`, or the one in the working
/// directory (falling back to defaults) when no path is given.
pub fn show_config(path: Option<&str>) -> Result<(), CommandError> {
    let config = match path {
        Some(path) => DocsConfig::load(Path::new(path))?,
        None => DocsConfig::load_or_default(Path::new("."))?,
    };
    println!("{}", render_config(&config)?);
    Ok(())
}

/// Pretty-printed JSON for `config`.
pub fn render_config(config: &DocsConfig) -> Result<String, CommandError> {
    Ok(serde_json::to_string_pretty(config)?)
}
