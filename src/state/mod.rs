//! Application state.

pub mod session;

pub use session::{word_count, Phase, Session, Theme, MAX_WORDS_HINT};
