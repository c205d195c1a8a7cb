//! AppMessage enum for async communication within the application.

use super::controller::RequestId;
use crate::error::RewriteError;

/// Messages received from async operations
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// A rewrite call finished, successfully or not
    RewriteCompleted {
        id: RequestId,
        outcome: Result<String, RewriteError>,
    },
}
