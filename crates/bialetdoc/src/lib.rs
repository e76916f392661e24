//! Command handlers for the `bialetdoc` CLI.
//!
//! The binary in `main.rs` only parses the command name and dispatches
//! here, so every command is also callable (and testable) as a function.

use std::sync::Once;

pub mod commands;

static TRACING_INIT: Once = Once::new();

/// Install a tracing subscriber when `RUST_LOG` is set.
///
/// Output is an indented span tree on stderr, e.g.
/// `RUST_LOG=bialet_highlight=debug bialetdoc highlight docs/`.
/// Safe to call more than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(tracing_tree::HierarchicalLayer::new(2).with_targets(true))
                .with(filter)
                .init();
        }
    });
}
