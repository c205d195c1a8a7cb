//! Rewrite request failures.
//!
//! Exactly two kinds reach the user: the request never produced a usable
//! response (transport, including a success body that is not JSON), or the
//! service answered with a non-success status (application). Both collapse
//! to a single user-facing line via [`RewriteError::user_message`].

use crate::traits::HttpError;

/// Shown for every transport failure.
pub const NETWORK_ERROR_MESSAGE: &str = "Network error. Please check your connection.";

/// Shown for application failures whose body carries no `error` field.
pub const REQUEST_FAILED_MESSAGE: &str = "Request failed. Please try again.";

/// Failure of a single rewrite call.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RewriteError {
    /// No application response was received.
    #[error("transport failure: {0}")]
    Transport(#[from] HttpError),

    /// The service answered with a non-success status.
    #[error("rewrite service returned HTTP {status}")]
    Application {
        status: u16,
        /// The body's `error` field, when present.
        message: Option<String>,
    },

    /// A success status whose body is not JSON.
    #[error("undecodable success body (HTTP {status}): {detail}")]
    UndecodableBody { status: u16, detail: String },
}

impl RewriteError {
    /// True for the transport category of the error taxonomy.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            RewriteError::Transport(_) | RewriteError::UndecodableBody { .. }
        )
    }

    /// The single line shown in the error banner.
    pub fn user_message(&self) -> String {
        match self {
            RewriteError::Transport(_) => NETWORK_ERROR_MESSAGE.to_string(),
            RewriteError::Application {
                message: Some(message),
                ..
            } => message.clone(),
            RewriteError::Application { message: None, .. } => REQUEST_FAILED_MESSAGE.to_string(),
            RewriteError::UndecodableBody { .. } => NETWORK_ERROR_MESSAGE.to_string(),
        }
    }
}
