//! Clipboard for sessions that never copy.

use crate::traits::{Clipboard, ClipboardError};

/// Rejects every write without touching the OS clipboard.
///
/// Used by headless print mode, which writes the result to stdout.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoClipboard;

impl Clipboard for NoClipboard {
    fn set_text(&mut self, _text: &str) -> Result<(), ClipboardError> {
        Err(ClipboardError::Unavailable("clipboard disabled".to_string()))
    }
}
