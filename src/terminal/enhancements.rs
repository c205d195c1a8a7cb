//! Keyboard enhancement support (Kitty protocol).
//!
//! With the Kitty keyboard protocol the terminal reports Ctrl+Enter as its
//! own key, which is one of the submit bindings. Terminals without it still
//! have Ctrl+S. Failures here are silent.

use crossterm::{
    event::{KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags},
    execute,
};
use std::io::Write;

/// Push keyboard enhancement flags onto the stack.
///
/// Returns `true` if the push succeeded.
pub fn push_keyboard_enhancements<W: Write>(writer: &mut W) -> bool {
    execute!(
        writer,
        PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES)
    )
    .is_ok()
}

/// Pop keyboard enhancement flags from the stack.
pub fn pop_keyboard_enhancements<W: Write>(writer: &mut W) -> bool {
    execute!(writer, PopKeyboardEnhancementFlags).is_ok()
}
