//! Trait abstractions for dependency injection and testability.
//!
//! # Traits
//!
//! - [`HttpClient`] - HTTP POST used by the rewrite client
//! - [`Clipboard`] - one-way clipboard write

pub mod clipboard;
pub mod http;

pub use clipboard::{Clipboard, ClipboardError};
pub use http::{Headers, HttpClient, HttpError, Response};
