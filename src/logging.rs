//! Logging setup for the CLI and the browser build.

/// Default filter when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "info,traffic_grid=debug";

/// Initialize the fmt subscriber. `RUST_LOG` overrides [`DEFAULT_FILTER`].
///
/// Logs go to stderr; stdout carries the headless JSON output.
#[cfg(all(feature = "cli", not(target_arch = "wasm32")))]
pub fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    // Ignore the error if a subscriber is already set
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Route tracing output and panics to the browser console.
#[cfg(all(target_arch = "wasm32", feature = "wasm"))]
pub fn init_logging() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();
}

#[cfg(all(test, feature = "cli", not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_parses() {
        assert!(tracing_subscriber::EnvFilter::try_new(DEFAULT_FILTER).is_ok());
    }

    #[test]
    fn test_init_logging_twice_does_not_panic() {
        init_logging();
        init_logging();
    }
}
