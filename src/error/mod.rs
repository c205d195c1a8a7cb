//! Error types for AssignMate.
//!
//! - [`RewriteError`]: outcome of a failed rewrite call, with the fixed
//!   user-facing messages
//! - [`ConfigError`]: bad environment or command-line configuration
//!
//! Transport and clipboard errors live next to their traits in
//! [`crate::traits`].

mod config;
mod rewrite;

pub use config::ConfigError;
pub use rewrite::{RewriteError, NETWORK_ERROR_MESSAGE, REQUEST_FAILED_MESSAGE};
