//! Logging initialisation via tracing-subscriber.
//!
//! Call [`init`] once at startup, after settings are resolved.

use tracing_subscriber::EnvFilter;

use crate::error::AppError;

/// Install the global tracing subscriber, writing to stderr.
///
/// `level` accepts standard filter directives (`"error"`, `"warn"`,
/// `"info"`, `"debug"`, `"trace"`). `RUST_LOG` takes precedence when set;
/// `level` is the fallback.
pub fn init(level: &str) -> Result<(), AppError> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .map_err(|e| AppError::Logger(format!("invalid log level '{level}': {e}")))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| AppError::Logger(format!("failed to set subscriber: {e}")))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_level_is_a_valid_filter() {
        // Level names are case-insensitive; the resolved default is "INFO".
        assert!(EnvFilter::try_new("INFO").is_ok());
        assert!(EnvFilter::try_new("debug").is_ok());
    }

    #[test]
    fn init_succeeds_or_already_init() {
        // May already be set by a prior test in the same process — both
        // outcomes are fine.
        match init("info") {
            Ok(()) => {}
            Err(AppError::Logger(msg)) if msg.contains("set subscriber") => {}
            Err(e) => panic!("unexpected error: {e}"),
        }
    }
}
