//! Client configuration types.

use crate::errors::{GetAltsError, Result};
use crate::transport::DEFAULT_REQUEST_TIMEOUT;
use std::time::Duration;

/// Default upper bound on how long to wait for a code.
pub const DEFAULT_MAX_WAIT: Duration = Duration::from_secs(60);

/// Default delay between status polls while waiting for a code.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(5);

/// Configuration for the GetAlts client.
///
/// Controls request timeouts and the polling behavior of code waits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Timeout applied to every HTTP request.
    pub request_timeout: Duration,
    /// Maximum time `await_code` waits before giving up.
    pub max_wait: Duration,
    /// Interval between status polls while waiting for a code.
    pub poll_interval: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            max_wait: DEFAULT_MAX_WAIT,
            poll_interval: DEFAULT_POLL_INTERVAL,
        }
    }
}

impl ClientConfig {
    /// Create a new builder for ClientConfig.
    ///
    /// # Example
    ///
    /// ```rust
    /// use getalts_client::ClientConfig;
    /// use std::time::Duration;
    ///
    /// let config = ClientConfig::builder()
    ///     .request_timeout(Duration::from_secs(20))
    ///     .max_wait(Duration::from_secs(180))
    ///     .build();
    ///
    /// assert_eq!(config.request_timeout, Duration::from_secs(20));
    /// assert_eq!(config.max_wait, Duration::from_secs(180));
    /// assert_eq!(config.poll_interval, Duration::from_secs(5));
    /// ```
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::default()
    }

    /// Return this config with a custom request timeout.
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Return this config with a custom maximum wait.
    pub fn with_max_wait(mut self, max_wait: Duration) -> Self {
        self.max_wait = max_wait;
        self
    }

    /// Return this config with a custom poll interval.
    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    /// Check the configuration for values the client cannot work with.
    ///
    /// A zero `max_wait` is allowed: the wait then fails on its first
    /// deadline check.
    pub fn validate(&self) -> Result<()> {
        if self.request_timeout.is_zero() {
            return Err(GetAltsError::InvalidConfig {
                reason: "request_timeout must be greater than zero".to_string(),
            });
        }
        if self.poll_interval.is_zero() {
            return Err(GetAltsError::InvalidConfig {
                reason: "poll_interval must be greater than zero".to_string(),
            });
        }
        Ok(())
    }
}

/// Builder for ClientConfig.
#[derive(Debug, Clone, Default)]
pub struct ClientConfigBuilder {
    config: ClientConfig,
}

impl ClientConfigBuilder {
    /// Create a new builder with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the timeout applied to every HTTP request.
    ///
    /// Default: 10 seconds
    pub fn request_timeout(mut self, timeout: Duration) -> Self {
        self.config.request_timeout = timeout;
        self
    }

    /// Set the default maximum wait for a code.
    ///
    /// Default: 60 seconds
    pub fn max_wait(mut self, max_wait: Duration) -> Self {
        self.config.max_wait = max_wait;
        self
    }

    /// Set the polling interval while waiting for a code.
    ///
    /// Default: 5 seconds
    pub fn poll_interval(mut self, interval: Duration) -> Self {
        self.config.poll_interval = interval;
        self
    }

    /// Build the ClientConfig.
    pub fn build(self) -> ClientConfig {
        self.config
    }
}
