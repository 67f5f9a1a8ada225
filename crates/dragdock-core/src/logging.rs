#![forbid(unsafe_code)]

//! Logging and tracing support.
//!
//! Re-exports the `tracing` macros when the `tracing` feature is enabled and
//! falls back to no-op macros otherwise, so call sites can always write
//! `crate::debug!(...)` without feature gates.
//!
//! With `tracing-json`, [`init_json_logging`] installs a JSON subscriber
//! filtered by `RUST_LOG`.

#[cfg(feature = "tracing")]
pub use tracing::{debug, trace};

#[cfg(not(feature = "tracing"))]
mod noop_macros {
    /// No-op debug macro when tracing is disabled.
    #[macro_export]
    macro_rules! debug {
        ($($arg:tt)*) => {};
    }

    /// No-op trace macro when tracing is disabled.
    #[macro_export]
    macro_rules! trace {
        ($($arg:tt)*) => {};
    }
}

/// Install a global JSON subscriber honouring `RUST_LOG` (default `info`).
///
/// Returns `false` if a global subscriber was already set.
#[cfg(feature = "tracing-json")]
pub fn init_json_logging() -> bool {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .json()
        .with_env_filter(filter)
        .try_init()
        .is_ok()
}

#[cfg(all(test, feature = "tracing-json"))]
mod tests {
    use super::*;

    #[test]
    fn json_logging_installs_once() {
        let _ = init_json_logging();
        assert!(!init_json_logging(), "second install must be refused");
    }
}
