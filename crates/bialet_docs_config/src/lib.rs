//! Configuration for the Bialet documentation build.
//!
//! A single TOML document ([`CONFIG_FILE_NAME`]) describes the project,
//! the HTML theme, Open Graph metadata, which files are sources and how
//! code is highlighted. See [`DocsConfig`] for the schema.

mod config;
mod error;
mod pattern;

pub use config::{
    DocsConfig, HighlightOptionsConfig, HtmlConfig, LogoOptions, OpenGraphConfig, SourceFormat,
    ThemeOptions, CONFIG_FILE_NAME,
};
pub use error::{ConfigError, Result};
pub use pattern::wildcard_match;
