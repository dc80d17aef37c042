//! Ember command-line host.
//!
//! The `ember` binary is a thin dispatcher over [`commands`]. Every command
//! has a variant that takes its input and output streams explicitly, so the
//! whole surface can be driven in-process from tests.

pub mod commands;
mod error;
pub mod options;

use std::sync::Once;

pub use error::CliError;
pub use options::{RunOptions, MAX_DEPTH_ENV};

static TRACING_INIT: Once = Once::new();

/// Install the tracing subscriber.
///
/// Does nothing unless `RUST_LOG` is set. Output is an indented call tree on
/// stderr so it never mixes with program output.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(
                    tracing_tree::HierarchicalLayer::new(2)
                        .with_writer(std::io::stderr)
                        .with_targets(true),
                )
                .with(filter)
                .init();
        }
    });
}
