//! Custom error types for Budget Planner
//!
//! Store operations never fail: invalid input is absorbed as a no-op. The
//! errors here cover the surfaces around the store (configuration, files,
//! script parsing).

use thiserror::Error;

/// The main error type for Budget Planner operations
#[derive(Error, Debug)]
pub enum PlannerError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// YAML serialization errors
    #[error("YAML error: {0}")]
    Yaml(String),

    /// A malformed line in an intent script
    #[error("Parse error on line {line}: {message}")]
    Parse { line: usize, message: String },

}

impl PlannerError {
    /// Create a parse error for a script line
    pub fn parse(line: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            line,
            message: message.into(),
        }
    }
}

impl From<std::io::Error> for PlannerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for PlannerError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<serde_yaml::Error> for PlannerError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Yaml(err.to_string())
    }
}

/// Result type alias for Budget Planner operations
pub type PlannerResult<T> = Result<T, PlannerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PlannerError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_error_variants_are_exhaustive() {
        let errors = [
            PlannerError::Config("c".into()),
            PlannerError::Io("i".into()),
            PlannerError::Json("j".into()),
            PlannerError::Yaml("y".into()),
            PlannerError::parse(1, "p"),
        ];
        for err in errors {
            match err {
                PlannerError::Config(_)
                | PlannerError::Io(_)
                | PlannerError::Json(_)
                | PlannerError::Yaml(_)
                | PlannerError::Parse { .. } => {}
            }
        }
    }

    #[test]
    fn test_parse_error() {
        let err = PlannerError::parse(3, "unknown command 'bogus'");
        assert_eq!(
            err.to_string(),
            "Parse error on line 3: unknown command 'bogus'"
        );
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: PlannerError = io_err.into();
        assert!(matches!(err, PlannerError::Io(_)));
    }
}
