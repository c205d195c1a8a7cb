//! Wire and domain models for the rewriting service.

pub mod mode;
pub mod request;

pub use mode::{Mode, ParseModeError};
pub use request::{ErrorBody, RewriteRequest, RewriteResponse};
