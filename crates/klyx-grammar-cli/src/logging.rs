use std::io::IsTerminal;

use tracing_subscriber::{EnvFilter, fmt};

type InitError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Install the stderr subscriber, or say on stderr why it could not be installed.
pub fn init(verbosity: u8) {
    if let Err(err) = try_init(verbosity) {
        eprintln!("warning: logging disabled: {err}");
    }
}

/// `RUST_LOG` takes precedence over `-v`.
pub fn try_init(verbosity: u8) -> Result<(), InitError> {
    let directive = match verbosity {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directive));
    let use_ansi = std::env::var_os("NO_COLOR").is_none() && std::io::stderr().is_terminal();

    fmt::fmt()
        .with_env_filter(filter)
        .with_ansi(use_ansi)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init()
}

#[cfg(test)]
#[path = "logging_tests.rs"]
mod logging_tests;
