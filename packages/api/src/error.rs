//! Crate-wide error type.
//!
//! [`AdminError`] is what every fallible operation in this crate returns. At the
//! server-function boundary it is flattened into a `ServerFnError` whose message is
//! the `Display` text below, so those strings are what administrators see.

use thiserror::Error;

#[cfg(feature = "server")]
use crate::backend::BackendError;

#[derive(Error, Debug)]
pub enum AdminError {
    #[error("Unknown item type: {0}")]
    UnknownItemType(String),

    #[error("Not authenticated")]
    NotAuthenticated,

    #[error("{0}")]
    InvalidInput(String),

    #[cfg(feature = "server")]
    #[error(transparent)]
    Backend(#[from] BackendError),

    #[cfg(feature = "server")]
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[cfg(feature = "server")]
    #[error("Session error: {0}")]
    Session(#[from] tower_sessions::session::Error),
}

pub type AdminResult<T> = Result<T, AdminError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_are_user_facing() {
        assert_eq!(
            AdminError::UnknownItemType("beer".into()).to_string(),
            "Unknown item type: beer"
        );
        assert_eq!(AdminError::NotAuthenticated.to_string(), "Not authenticated");
        assert_eq!(
            AdminError::InvalidInput("Please enter a valid URL".into()).to_string(),
            "Please enter a valid URL"
        );
    }
}
