//! Error types and classification for GetAlts client operations.

use crate::types::ActivationId;
use std::time::Duration;
use thiserror::Error;

/// Trait for errors that can be classified as retryable or permanent.
///
/// The client never retries on its own. This trait gives callers two levels
/// of classification to build their own policy on top of it:
///
/// 1. **Call-level** (`is_retryable`): whether repeating the same request
///    against the same activation might succeed. Network failures and timeouts
///    fall here.
///
/// 2. **Operation-level** (`should_retry_operation`): whether starting over
///    (buying a new number, or waiting for the code again) might succeed even
///    though this particular call will not.
///
/// # Examples
///
/// ```rust
/// use getalts_client::RetryableError;
///
/// enum MyError {
///     NetworkTimeout,
///     CodeNeverArrived,
///     InvalidToken,
/// }
///
/// impl RetryableError for MyError {
///     fn is_retryable(&self) -> bool {
///         matches!(self, MyError::NetworkTimeout)
///     }
///
///     fn should_retry_operation(&self) -> bool {
///         match self {
///             MyError::NetworkTimeout => true,
///             MyError::CodeNeverArrived => true,
///             MyError::InvalidToken => false,
///         }
///     }
/// }
/// ```
pub trait RetryableError {
    /// Returns true if this error represents a transient failure
    /// that might succeed when the same call is repeated.
    fn is_retryable(&self) -> bool;

    /// Returns true if a fresh operation might succeed.
    ///
    /// Default implementation returns the same as `is_retryable()`.
    fn should_retry_operation(&self) -> bool {
        self.is_retryable()
    }
}

// =============================================================================
// GetAltsError
// =============================================================================

/// Rejection reported by the service in the `error` field of a response.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("GetAlts service error: {message}")]
pub struct ApiError {
    /// Error string exactly as the service sent it (e.g. "NO_BALANCE").
    pub message: String,
}

impl ApiError {
    /// Create a new ApiError from the service message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Main error type for GetAlts client operations.
#[derive(Debug, Error)]
pub enum GetAltsError {
    /// Network failure, timeout, or non-success HTTP status.
    #[error("Failed to send HTTP request: {0}")]
    Transport(#[source] reqwest_middleware::Error),

    /// The service explicitly rejected the request.
    #[error("{0}")]
    Api(#[source] ApiError),

    /// The response could not be decoded, or carried an unknown wire code.
    #[error("Malformed response: {0}")]
    MalformedResponse(#[source] serde_json::Error),

    /// No code was reported before the wait deadline.
    #[error(
        "No code received after {:.1}s (polled {} times); Activation id: {activation_id}",
        elapsed.as_secs_f64(),
        poll_count
    )]
    NoCodeReceived {
        /// Configured maximum wait.
        max_wait: Duration,
        /// Actual elapsed time.
        elapsed: Duration,
        /// Number of status polls made.
        poll_count: u32,
        /// The activation that was waited on.
        activation_id: ActivationId,
    },

    /// The wait was cancelled by the caller.
    #[error(
        "Wait cancelled after {:.1}s (polled {} times); Activation id: {activation_id}",
        elapsed.as_secs_f64(),
        poll_count
    )]
    Cancelled {
        /// Elapsed time before cancellation.
        elapsed: Duration,
        /// Number of status polls made.
        poll_count: u32,
        /// The activation that was waited on.
        activation_id: ActivationId,
    },

    /// Failed to build HTTP client.
    #[error("Failed to build HTTP client: {0}")]
    BuildHttpClient(#[source] reqwest::Error),

    /// The configured endpoint cannot be used as a base URL.
    #[error("Invalid GetAlts endpoint: {endpoint}")]
    InvalidEndpoint { endpoint: String },

    /// Error encoding request query parameters.
    #[error("Error building GetAlts request URL: {0}")]
    BuildRequestUrl(#[source] serde_urlencoded::ser::Error),

    /// Configuration rejected by validation.
    #[error("Invalid client configuration: {reason}")]
    InvalidConfig { reason: String },
}

pub type Result<T> = std::result::Result<T, GetAltsError>;

impl GetAltsError {
    /// The service-supplied message, if this is a service rejection.
    pub fn api_message(&self) -> Option<&str> {
        match self {
            GetAltsError::Api(error) => Some(error.message.as_str()),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for GetAltsError {
    fn from(error: reqwest::Error) -> Self {
        GetAltsError::Transport(reqwest_middleware::Error::Reqwest(error))
    }
}

impl From<reqwest_middleware::Error> for GetAltsError {
    fn from(error: reqwest_middleware::Error) -> Self {
        GetAltsError::Transport(error)
    }
}

impl RetryableError for GetAltsError {
    fn is_retryable(&self) -> bool {
        match self {
            // Network-class failures
            GetAltsError::Transport(_) => true,
            // Service rejections, decode failures, and terminal waits
            GetAltsError::Api(_)
            | GetAltsError::MalformedResponse(_)
            | GetAltsError::NoCodeReceived { .. }
            | GetAltsError::Cancelled { .. }
            | GetAltsError::BuildHttpClient(_)
            | GetAltsError::InvalidEndpoint { .. }
            | GetAltsError::BuildRequestUrl(_)
            | GetAltsError::InvalidConfig { .. } => false,
        }
    }

    fn should_retry_operation(&self) -> bool {
        match self {
            GetAltsError::Transport(_) => true,
            // Waiting again (or with a new number) might succeed
            GetAltsError::NoCodeReceived { .. } => true,
            GetAltsError::Api(_)
            | GetAltsError::MalformedResponse(_)
            | GetAltsError::Cancelled { .. }
            | GetAltsError::BuildHttpClient(_)
            | GetAltsError::InvalidEndpoint { .. }
            | GetAltsError::BuildRequestUrl(_)
            | GetAltsError::InvalidConfig { .. } => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_message() {
        let error = GetAltsError::Api(ApiError::new("NO_BALANCE"));
        assert_eq!(error.api_message(), Some("NO_BALANCE"));
        assert_eq!(error.to_string(), "GetAlts service error: NO_BALANCE");
        assert!(!error.is_retryable());
        assert!(!error.should_retry_operation());
    }

    #[test]
    fn test_no_code_received_classification() {
        let error = GetAltsError::NoCodeReceived {
            max_wait: Duration::from_secs(60),
            elapsed: Duration::from_secs(61),
            poll_count: 12,
            activation_id: ActivationId::new(42),
        };
        assert!(!error.is_retryable());
        assert!(error.should_retry_operation());
        assert!(error.api_message().is_none());
        assert_eq!(
            error.to_string(),
            "No code received after 61.0s (polled 12 times); Activation id: 42"
        );
    }

    #[test]
    fn test_malformed_response_not_retryable() {
        let source = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let error = GetAltsError::MalformedResponse(source);
        assert!(!error.is_retryable());
        assert!(!error.should_retry_operation());
    }
}
