//! In-memory clipboard for testing.

use std::sync::{Arc, Mutex};

use crate::traits::{Clipboard, ClipboardError};

/// Clipboard that keeps every write in memory.
///
/// Clones share state, so a test can hand one clone to the app and inspect
/// the other.
#[derive(Debug, Clone, Default)]
pub struct MemoryClipboard {
    writes: Arc<Mutex<Vec<String>>>,
    failure: Arc<Mutex<Option<ClipboardError>>>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent write fail with `error`.
    pub fn fail_with(&self, error: ClipboardError) {
        *self.failure.lock().unwrap() = Some(error);
    }

    /// Most recent successful write.
    pub fn contents(&self) -> Option<String> {
        self.writes.lock().unwrap().last().cloned()
    }

    /// Number of successful writes.
    pub fn write_count(&self) -> usize {
        self.writes.lock().unwrap().len()
    }
}

impl Clipboard for MemoryClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        if let Some(err) = self.failure.lock().unwrap().clone() {
            return Err(err);
        }
        self.writes.lock().unwrap().push(text.to_string());
        Ok(())
    }
}
