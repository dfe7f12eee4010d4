//! Donkey lexer CLI.
//!
//! Inspect how Donkey source is classified: dump token streams, render
//! highlighted HTML, and list the registered lexers.
//!
//! ```text
//! file(s) ──► read ──► DonkeyLexer ──► token dump | HTML
//! ```

pub mod commands;
pub mod options;

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize `tracing` output for the CLI.
///
/// Call this once at startup. Safe to call multiple times.
/// Enable with `RUST_LOG=donkey_lexer=debug` or `RUST_LOG=donkey_lexer=trace`.
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
