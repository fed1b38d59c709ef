use thiserror::Error;

/// Unified error type for version-bump operations
#[derive(Error, Debug)]
pub enum BumpError {
    #[error("Argument error: {0}")]
    Arguments(String),

    #[error("Version parsing error: {0}")]
    Version(String),

    #[error("Invalid pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in version-bump
pub type Result<T> = std::result::Result<T, BumpError>;

impl BumpError {
    /// Create an argument-validation error with context
    pub fn arguments(msg: impl Into<String>) -> Self {
        BumpError::Arguments(msg.into())
    }

    /// Create a version error with context
    pub fn version(msg: impl Into<String>) -> Self {
        BumpError::Version(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = BumpError::arguments("missing --to");
        assert_eq!(err.to_string(), "Argument error: missing --to");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: BumpError = io_err.into();
        assert!(err.to_string().contains("I/O error"));
    }

    #[test]
    fn test_error_constructors() {
        assert!(BumpError::version("test").to_string().contains("Version"));
        assert!(BumpError::arguments("test")
            .to_string()
            .contains("Argument"));
    }

    #[test]
    fn test_error_messages_are_descriptive() {
        let error_pairs = vec![
            (BumpError::arguments("x"), "Argument error"),
            (BumpError::version("x"), "Version parsing error"),
        ];

        for (err, expected_prefix) in error_pairs {
            let msg = err.to_string();
            assert!(
                msg.starts_with(expected_prefix),
                "Error message should start with '{}', but got '{}'",
                expected_prefix,
                msg
            );
        }
    }
}
