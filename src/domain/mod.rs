//! Presentation-side domain objects.

pub mod input;

pub use input::InputBuffer;
