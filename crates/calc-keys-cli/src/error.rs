//! Error types for the CLI

use thiserror::Error;

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// Errors that can occur in the CLI
#[derive(Debug, Error)]
pub enum CliError {
    /// Vocabulary lookup failure
    #[error(transparent)]
    Key(#[from] calc_keys::error::KeyError),

    /// IO error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use calc_keys::error::KeyError;

    #[test]
    fn test_key_error_passes_through() {
        let err: CliError = KeyError::unknown_name("MODULO").into();
        assert!(err.to_string().contains("unknown operator name"));
    }

    #[test]
    fn test_io_error_from() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err: CliError = io_err.into();
        assert!(err.to_string().contains("I/O"));
    }
}
