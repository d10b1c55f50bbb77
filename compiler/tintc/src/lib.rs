//! The `tint` command-line tool.
//!
//! Thin front end over `tint_markup`: argument handling lives in [`cli`],
//! one module per command under [`commands`].

use std::sync::Once;

pub mod cli;
pub mod color_mode;
pub mod commands;
mod error;

pub use cli::{Command, Input, Invocation};
pub use color_mode::ColorMode;
pub use error::CliError;

static TRACING_INIT: Once = Once::new();

/// Install the tracing subscriber.
///
/// Enable with `RUST_LOG=tint_markup=trace` to see every directive as it is
/// resolved, or `RUST_LOG=tintc=debug` for command dispatch.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_level(true),
                )
                .with(filter)
                .init();
        }
    });
}
