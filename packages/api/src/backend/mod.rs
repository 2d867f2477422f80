//! # Backend API client
//!
//! Every request the dashboard makes to the catalog backend goes through
//! [`BackendClient`]. [`ItemApi`] and [`UserApi`] add the typed routes on top of it:
//! item routes come from the item-type registry, user routes are fixed.
//!
//! No retries and no timeouts beyond reqwest's defaults. A failed request is
//! reported once as a [`BackendError`].

mod client;
mod items;
mod users;

pub use client::BackendClient;
pub use items::ItemApi;
pub use users::UserApi;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum BackendError {
    /// The request never got an HTTP response (DNS, refused connection, TLS...).
    #[error("Could not reach the backend: {0}")]
    Unreachable(#[source] reqwest::Error),

    /// The backend answered with a non-success status.
    #[error("{message}")]
    Status { status: u16, message: String },

    #[error("Unexpected response from the backend: {0}")]
    Decode(String),
}

impl BackendError {
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// 401 or 403: the token was refused.
    pub fn is_rejection(&self) -> bool {
        matches!(self.status(), Some(401 | 403))
    }
}
