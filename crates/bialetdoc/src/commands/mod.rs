//! Command handlers.
//!
//! Each submodule implements one CLI command. Shared pieces (`read_file`
//! and the error type) live here.

use std::io;
use std::path::{Path, PathBuf};

use bialet_docs_config::ConfigError;
use bialet_highlight::HighlightError;
use thiserror::Error;

mod config;
mod highlight;
mod lex;

pub use config::{render_config, show_config};
pub use highlight::{
    collect_files, parse_highlight_args, render_file, run_highlight, FileOutput, HighlightArgs,
    OutputFormat,
};
pub use lex::{format_spans, lex_file};

/// Why a command failed. `main` prints it and exits with status 1.
#[derive(Error, Debug)]
pub enum CommandError {
    #[error("cannot find file '{}'", .0.display())]
    NotFound(PathBuf),

    #[error("permission denied reading '{}'", .0.display())]
    PermissionDenied(PathBuf),

    #[error("'{}' contains invalid UTF-8 data", .0.display())]
    InvalidUtf8(PathBuf),

    #[error("error reading '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Highlight(#[from] HighlightError),

    #[error("failed to write JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Bad command-line arguments.
    #[error("{0}")]
    Usage(String),

    #[error("{failed} of {total} files could not be highlighted")]
    Failed { failed: usize, total: usize },
}

/// Read a source file, mapping I/O failures to readable errors.
pub(crate) fn read_file(path: &Path) -> Result<String, CommandError> {
    std::fs::read_to_string(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => CommandError::NotFound(path.to_path_buf()),
        io::ErrorKind::PermissionDenied => CommandError::PermissionDenied(path.to_path_buf()),
        io::ErrorKind::InvalidData => CommandError::InvalidUtf8(path.to_path_buf()),
        _ => CommandError::Read {
            path: path.to_path_buf(),
            source: e,
        },
    })
}
