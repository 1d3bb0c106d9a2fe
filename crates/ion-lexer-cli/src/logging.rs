//! Logging setup for the CLI.
//!
//! `RUST_LOG` takes precedence. Without it, the level is derived from the
//! number of `-d` flags.

use std::io;

use tracing_subscriber::{filter::LevelFilter, fmt, prelude::*, EnvFilter};

pub(crate) fn level_for_verbosity(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

pub(crate) fn init(verbosity: u8) {
    let filter = EnvFilter::builder()
        .with_default_directive(level_for_verbosity(verbosity).into())
        .from_env_lossy();

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .compact()
                .with_target(true)
                .with_writer(io::stderr),
        )
        .with(filter)
        .init();
}
