//! Tracing subscriber initialization for the demo binary.
//!
//! The library itself only emits events; it never installs a subscriber.
//! The binary initializes one writing to stderr, leaving stdout for the
//! sorted output.

use thiserror::Error;

/// Error type for logging initialization failures.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// Tracing subscriber already initialized
    #[error("tracing subscriber already initialized")]
    SubscriberAlreadySet,
}

/// Initialize the tracing subscriber with stderr output.
///
/// Respects the `RUST_LOG` environment variable, defaults to "info" level.
///
/// # Errors
///
/// Returns [`LoggingError::SubscriberAlreadySet`] if a global subscriber
/// was installed earlier in the process.
pub fn init() -> Result<(), LoggingError> {
    use tracing_subscriber::EnvFilter;

    // Respect RUST_LOG, default to "info"
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|_| LoggingError::SubscriberAlreadySet)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_twice_reports_already_set() {
        // Whichever call runs second must fail; the first may race with
        // other tests that also install a subscriber.
        let _ = init();
        assert!(matches!(init(), Err(LoggingError::SubscriberAlreadySet)));
    }
}
