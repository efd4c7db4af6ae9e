//! Diagnostic logging setup.
//!
//! Progress and summary lines go to stdout; `tracing` diagnostics go to
//! stderr so they never mix with piped JSON or YAML output.

use tracing::Level;
use tracing_subscriber::EnvFilter;

use crate::error::{AppError, AppResult};

/// Map CLI verbosity flags to a log level.
///
/// `quiet` wins over any `-v` count.
pub fn level_for(verbose: u8, quiet: bool) -> Level {
    match (quiet, verbose) {
        (true, _) => Level::ERROR,
        (false, 0) => Level::WARN,
        (false, 1) => Level::DEBUG,
        (false, _) => Level::TRACE
    }
}

/// Initialize the stderr subscriber.
///
/// `RUST_LOG` takes precedence over the CLI-derived level when set.
pub fn init_logging(verbose: u8, quiet: bool) -> AppResult<()> {
    let level = level_for(verbose, quiet);
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.as_str().to_lowercase()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| AppError::internal(format!("Failed to initialize logging: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_levels() {
        let cases = [
            ((true, 0), Level::ERROR),
            ((true, 3), Level::ERROR),
            ((false, 0), Level::WARN),
            ((false, 1), Level::DEBUG),
            ((false, 2), Level::TRACE),
            ((false, 9), Level::TRACE)
        ];

        for ((quiet, verbose), expected) in cases {
            assert_eq!(
                level_for(verbose, quiet),
                expected,
                "quiet={}, verbose={}",
                quiet,
                verbose
            );
        }
    }
}
