//! Core error types

use thiserror::Error;

/// Errors raised while building rules or segmenting text
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// A template produced a pattern the engine could not compile
    #[error("invalid pattern '{pattern}': {reason}")]
    InvalidPattern {
        /// The pattern source that failed to compile
        pattern: String,
        /// Compiler diagnostic
        reason: String,
    },

    /// Input text was empty or whitespace-only
    #[error("no text to segment")]
    EmptyInput,

    /// A rewrite or boundary rule set is malformed
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The pattern engine gave up while matching (e.g. backtrack limit)
    #[error("pattern '{pattern}' failed while matching: {reason}")]
    PatternRuntime {
        /// The pattern source being matched
        pattern: String,
        /// Engine diagnostic
        reason: String,
    },
}

impl CoreError {
    pub(crate) fn config(msg: impl Into<String>) -> Self {
        CoreError::Configuration(msg.into())
    }
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CoreError::InvalidPattern {
            pattern: "(?<=a".to_string(),
            reason: "unclosed group".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid pattern '(?<=a': unclosed group"
        );
        assert_eq!(CoreError::EmptyInput.to_string(), "no text to segment");
        assert_eq!(
            CoreError::config("missing replacement").to_string(),
            "configuration error: missing replacement"
        );
    }
}
