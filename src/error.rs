//! Error types for the contact cards front end.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use thiserror::Error;

/// Errors that can occur when talking to the cards API.
#[derive(Error, Debug)]
pub enum CardsApiError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    HttpError(String),

    /// API returned a non-success status code
    #[error("API error (status {status}): {message}")]
    ApiError { status: u16, message: String },

    /// Failed to parse JSON response
    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Network timeout
    #[error("Request timeout")]
    Timeout,
}

/// Errors surfaced to the user by the views.
///
/// Both kinds end the current user action. They are shown as text and never
/// retried automatically.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ViewError {
    /// The contact list could not be read.
    #[error("Failed to fetch cards: {0}")]
    FetchFailed(String),

    /// The contact could not be created.
    #[error("Failed to insert the data: {0}")]
    SubmitFailed(String),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with CardsApiError
pub type CardsApiResult<T> = Result<T, CardsApiError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CardsApiError::Timeout;
        assert_eq!(err.to_string(), "Request timeout");

        let err = ConfigError::InvalidValue {
            var: "REQUEST_TIMEOUT".to_string(),
            reason: "Must be greater than zero".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid value for REQUEST_TIMEOUT: Must be greater than zero"
        );

        let err = ViewError::FetchFailed("API error (status 500): boom".to_string());
        assert_eq!(
            err.to_string(),
            "Failed to fetch cards: API error (status 500): boom"
        );
    }

    #[test]
    fn test_api_error_variants() {
        let err = CardsApiError::ApiError {
            status: 503,
            message: "Service unavailable".to_string(),
        };
        assert!(err.to_string().contains("503"));
        assert!(err.to_string().contains("Service unavailable"));
    }
}
