//! Shared Error Types
//!
//! Errors raised while validating data that arrives from API clients.
//! The backend maps every variant to `400 Bad Request`.
//!
//! # Usage
//!
//! ```rust
//! use storefront::shared::error::SharedError;
//!
//! let error = SharedError::validation("email", "Email must contain '@'");
//! ```
use thiserror::Error;

/// Client input errors
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SharedError {
    /// A field is present but its value is not acceptable
    #[error("Validation error in field '{field}': {message}")]
    ValidationError {
        /// The field that failed validation
        field: String,
        /// Human-readable error message
        message: String,
    },

    /// The request body could not be decoded at all
    #[error("Malformed request: {message}")]
    MalformedRequest {
        /// Human-readable error message
        message: String,
    },
}

impl SharedError {
    /// Create a new validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a new malformed request error
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedRequest {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error() {
        let error = SharedError::validation("email", "Invalid email format");
        match error {
            SharedError::ValidationError { field, message } => {
                assert_eq!(field, "email");
                assert_eq!(message, "Invalid email format");
            }
            _ => panic!("Expected ValidationError"),
        }
    }

    #[test]
    fn test_malformed_error() {
        let error = SharedError::malformed("expected JSON body");
        assert_eq!(error.to_string(), "Malformed request: expected JSON body");
    }

    #[test]
    fn test_validation_display_names_field() {
        let error = SharedError::validation("username", "must not be empty");
        assert!(error.to_string().contains("'username'"));
    }
}
