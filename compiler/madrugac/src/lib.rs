//! Library surface of the `madruga` CLI.
//!
//! The binary is thin I/O glue around [`madruga_lexer`]: a file-mode
//! driver and a line-oriented REPL, one module per command.

pub mod commands;

use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber.
///
/// Filtered via the `MADRUGA_LOG` environment variable (`warn` when
/// unset), writing to stderr so token output on stdout stays clean.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_env("MADRUGA_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
