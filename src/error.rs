//! Error types for strongpass

use thiserror::Error;

/// Main error type for password generation
#[derive(Error, Debug)]
pub enum PasswordError {
    /// The randomness source could not produce output
    #[error("Random source unavailable: {0}")]
    RandomSourceUnavailable(String),

    /// Configuration could not be parsed or is unusable
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl From<serde_json::Error> for PasswordError {
    fn from(err: serde_json::Error) -> Self {
        PasswordError::InvalidConfig(err.to_string())
    }
}

/// Result type alias for password operations
pub type Result<T> = std::result::Result<T, PasswordError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PasswordError::RandomSourceUnavailable("getrandom failed".to_string());
        assert!(err.to_string().contains("getrandom failed"));
        assert!(err.to_string().starts_with("Random source unavailable"));

        let err = PasswordError::InvalidConfig("length".to_string());
        assert_eq!(err.to_string(), "Invalid configuration: length");
    }

    #[test]
    fn test_error_from_serde_json() {
        let json_err = serde_json::from_str::<u32>("not a number").unwrap_err();
        let err: PasswordError = json_err.into();
        match err {
            PasswordError::InvalidConfig(msg) => assert!(!msg.is_empty()),
            _ => panic!("Expected InvalidConfig"),
        }
    }
}
