//! Shared error types for SkyCast.
//!
//! `Display` keeps the technical detail for logs; `ConfigError::user_message`
//! is the short hint printed when startup fails.

use thiserror::Error;

/// Network-related errors (HTTP, connectivity).
#[derive(Debug, Error)]
pub enum NetworkError {
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    #[error("Request timed out")]
    Timeout,

    #[error("Server error: {status} - {message}")]
    ServerError { status: u16, message: String },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration file not found: {0}")]
    NotFound(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Configuration parse error: {0}")]
    ParseError(String),
}

impl ConfigError {
    pub fn user_message(&self) -> &'static str {
        match self {
            ConfigError::NotFound(_) => "No configuration directory found. Pass --config <PATH>.",
            ConfigError::Invalid(_) => "Invalid configuration. Check your settings.",
            ConfigError::ParseError(_) => "Configuration file is malformed. Check your settings.",
        }
    }
}

/// Startup hint for a failed config load, if the failure came from [`ConfigError`].
pub fn config_user_message(err: &anyhow::Error) -> Option<&'static str> {
    err.downcast_ref::<ConfigError>().map(ConfigError::user_message)
}

/// Extension trait for converting reqwest errors to our error types.
pub trait ReqwestErrorExt {
    fn into_network_error(self) -> NetworkError;
}

impl ReqwestErrorExt for reqwest::Error {
    fn into_network_error(self) -> NetworkError {
        if self.is_timeout() {
            NetworkError::Timeout
        } else if self.is_decode() {
            NetworkError::InvalidResponse(self.to_string())
        } else if let Some(status) = self.status() {
            NetworkError::ServerError {
                status: status.as_u16(),
                message: self.to_string(),
            }
        } else {
            NetworkError::ConnectionFailed(self.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_keeps_detail() {
        let err = ConfigError::ParseError("expected `=`".into());
        assert!(err.to_string().contains("expected `=`"));
        assert!(!err.user_message().contains('='));
    }

    #[test]
    fn test_not_found_points_at_config_flag() {
        let err = ConfigError::NotFound("platform config directory".into());
        assert!(err.user_message().contains("--config"));
        assert!(!err.user_message().contains("defaults"));
    }

    #[test]
    fn test_config_user_message_downcasts() {
        let err: anyhow::Error = ConfigError::Invalid("bad url".into()).into();
        assert_eq!(
            config_user_message(&err),
            Some("Invalid configuration. Check your settings.")
        );

        let other = anyhow::anyhow!("disk full");
        assert_eq!(config_user_message(&other), None);
    }
}
