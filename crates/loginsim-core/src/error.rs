//! Error types for the login controller

use std::time::Duration;

use thiserror::Error;

use crate::lockout::describe_duration;

pub type Result<T> = std::result::Result<T, ConfigError>;

/// Failures surfaced to the user as a single transient message.
///
/// None of these leave the controller: they are stored in the form state and
/// rendered through `Display`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LoginError {
    #[error("Please fill in all fields.")]
    Validation,

    #[error("Access blocked. Please wait a few seconds.")]
    LockedOut,

    #[error("Invalid credentials.")]
    InvalidCredentials,

    #[error("Too many attempts. Locked for {}.", describe_duration(.duration))]
    TooManyAttempts { duration: Duration },

    #[error("Failed to load profile data.")]
    Fetch(#[source] FetchError),
}

impl LoginError {
    /// Whether this is the lockout notice rather than a submit failure
    pub fn is_lockout_notice(&self) -> bool {
        matches!(self, LoginError::TooManyAttempts { .. })
    }
}

/// Profile lookup failures
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("Profile service unavailable: {0}")]
    Unavailable(String),
}

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Could not determine config directory")]
    NoConfigDir,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Serialization error: {0}")]
    Serialize(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lockout_message_names_duration() {
        let err = LoginError::TooManyAttempts {
            duration: Duration::from_secs(10),
        };
        assert_eq!(err.to_string(), "Too many attempts. Locked for 10 seconds.");
        assert!(err.is_lockout_notice());
    }

    #[test]
    fn test_fetch_error_keeps_source() {
        use std::error::Error as _;

        let err = LoginError::Fetch(FetchError::Unavailable("timeout".to_string()));
        assert_eq!(err.to_string(), "Failed to load profile data.");
        assert!(err.source().is_some());
        assert!(!err.is_lockout_notice());
    }
}
