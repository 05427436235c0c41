//! Error types for the tabledef library.
//!
//! Spec *invalidity* is not an error: the rule engines return a
//! [`Verdict`](crate::validate::Verdict) value instead of failing. This enum
//! covers the ambient surface only - file I/O, malformed spec files, and the
//! CLI refusing to compile a spec that did not validate.

use thiserror::Error;

/// Main error type for tabledef operations.
#[derive(Error, Debug)]
pub enum DdlError {
    /// Spec handling error (unsupported file extension, misuse of the API).
    #[error("Spec error: {0}")]
    Spec(String),

    /// A spec failed validation and the caller asked for generated DDL.
    /// Carries the full error list, one message per line.
    #[error("Validation failed:\n{0}")]
    Validation(String),

    /// IO error (reading spec files).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML deserialization error.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl DdlError {
    /// Build a `Validation` error from a list of rule-engine messages.
    pub fn validation(errors: &[String]) -> Self {
        DdlError::Validation(errors.join("\n"))
    }

    /// Format error with full details including error chain.
    pub fn format_detailed(&self) -> String {
        let mut output = format!("Error: {}", self);

        let mut source = std::error::Error::source(self);
        let mut depth = 1;
        while let Some(err) = source {
            output.push_str(&format!("\nCaused by:\n  {}: {}", depth, err));
            source = err.source();
            depth += 1;
        }

        output
    }

    /// Process exit code for the CLI.
    ///
    /// - 1: spec/config errors (bad file contents, misuse)
    /// - 2: validation failure
    /// - 7: IO errors (file not found, permissions)
    pub fn exit_code(&self) -> u8 {
        match self {
            DdlError::Spec(_) | DdlError::Yaml(_) | DdlError::Json(_) => 1,
            DdlError::Validation(_) => 2,
            DdlError::Io(_) => 7,
        }
    }
}

/// Result type alias for tabledef operations.
pub type Result<T> = std::result::Result<T, DdlError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(DdlError::Spec("x".into()).exit_code(), 1);
        assert_eq!(DdlError::Validation("x".into()).exit_code(), 2);
        let io = DdlError::Io(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"));
        assert_eq!(io.exit_code(), 7);
    }

    #[test]
    fn test_validation_joins_messages() {
        let err = DdlError::validation(&["first".to_string(), "second".to_string()]);
        let text = err.to_string();
        assert!(text.contains("first\nsecond"));
    }

    #[test]
    fn test_format_detailed_includes_chain() {
        let io = DdlError::Io(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"));
        let detailed = io.format_detailed();
        assert!(detailed.starts_with("Error: IO error"));
    }
}
