//! Error types for vocabulary lookups

use thiserror::Error;

/// Result type for vocabulary operations
pub type KeyResult<T> = Result<T, KeyError>;

/// Errors raised when a foreign string fails vocabulary lookup
///
/// The vocabulary itself has no runtime failure modes; these only occur
/// when parsing strings that originate outside the closed set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeyError {
    /// The token is not one of the eleven operator glyphs
    #[error("unknown operator glyph: {token:?}")]
    UnknownOperator {
        /// The rejected token
        token: String,
    },

    /// The name is not one of the eleven symbolic operator names
    #[error("unknown operator name: {name:?}")]
    UnknownName {
        /// The rejected name
        name: String,
    },
}

impl KeyError {
    /// Create an unknown-operator error
    #[must_use]
    pub fn unknown_operator(token: impl Into<String>) -> Self {
        Self::UnknownOperator {
            token: token.into(),
        }
    }

    /// Create an unknown-name error
    #[must_use]
    pub fn unknown_name(name: impl Into<String>) -> Self {
        Self::UnknownName { name: name.into() }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_operator_display() {
        let err = KeyError::unknown_operator("*");
        assert!(err.to_string().contains("unknown operator glyph"));
        assert!(err.to_string().contains('*'));
    }

    #[test]
    fn test_unknown_name_display() {
        let err = KeyError::unknown_name("MODULO");
        assert!(err.to_string().contains("unknown operator name"));
        assert!(err.to_string().contains("MODULO"));
    }

    #[test]
    fn test_error_is_error_trait() {
        let err: Box<dyn std::error::Error> = Box::new(KeyError::unknown_operator("^"));
        assert!(err.to_string().contains("glyph"));
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(
            KeyError::unknown_operator("*"),
            KeyError::unknown_operator("*")
        );
        assert_ne!(
            KeyError::unknown_operator("C"),
            KeyError::unknown_name("C")
        );
    }
}
