//! Clipboard trait abstraction.
//!
//! The rewrite result is pushed to the system clipboard as a one-way write.
//! Callers decide what to do with failures; the session controller only logs
//! them.

/// Clipboard access errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClipboardError {
    /// No clipboard is reachable (headless session, missing display server)
    #[error("Clipboard unavailable: {0}")]
    Unavailable(String),
    /// The write was rejected
    #[error("Clipboard write failed: {0}")]
    WriteFailed(String),
}

/// Trait for writing text to a clipboard.
pub trait Clipboard: Send {
    /// Replace the clipboard contents with `text`.
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}
