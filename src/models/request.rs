use serde::{Deserialize, Serialize};

use super::mode::Mode;

/// Request body for the rewrite endpoint
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RewriteRequest {
    /// Text to rewrite, sent as typed (not trimmed)
    pub text: String,
    /// Rewrite intensity
    pub mode: Mode,
}

impl RewriteRequest {
    pub fn new(text: impl Into<String>, mode: Mode) -> Self {
        Self {
            text: text.into(),
            mode,
        }
    }
}

/// Successful response body. Unknown fields are ignored; a missing or
/// null `rewrittenText` decodes as `None`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RewriteResponse {
    #[serde(default)]
    pub rewritten_text: Option<String>,
}

/// Failure response body. The `error` field is optional.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}
