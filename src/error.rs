//! Application-wide error types.

use std::{io, path::PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    /// An integer-typed settings variable holds a value that does not parse.
    #[error("invalid integer for {key}: '{value}'")]
    MalformedInteger { key: &'static str, value: String },

    /// The cache directory could not be created.
    #[error("cannot create cache directory {}: {source}", .path.display())]
    CacheDir { path: PathBuf, source: io::Error },

    #[error("logger error: {0}")]
    Logger(String),

    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn malformed_integer_display() {
        let e = AppError::MalformedInteger {
            key: "PORT",
            value: "not-a-number".into(),
        };
        assert!(e.to_string().contains("PORT"));
        assert!(e.to_string().contains("not-a-number"));
    }

    #[test]
    fn cache_dir_carries_underlying_error() {
        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
        let e = AppError::CacheDir {
            path: PathBuf::from("/var/cache/viewer"),
            source: io_err,
        };
        assert!(e.to_string().contains("/var/cache/viewer"));
        assert!(e.source().is_some());
    }

    #[test]
    fn logger_error_display() {
        let e = AppError::Logger("already initialized".into());
        assert!(e.to_string().contains("already initialized"));
    }

    #[test]
    fn io_error_converts() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file missing");
        let e: AppError = io_err.into();
        assert!(e.to_string().contains("io error"));
        let _: &dyn Error = &e;
    }
}
