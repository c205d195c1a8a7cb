//! Mock implementations for testing.
//!
//! Test doubles for the trait abstractions, so the session controller can be
//! exercised without network access or a display server.
//!
//! # Available Mocks
//!
//! - [`MockHttpClient`] - HTTP client with configurable responses
//! - [`MemoryClipboard`] - clipboard that records writes

pub mod clipboard;
pub mod http;

pub use clipboard::MemoryClipboard;
pub use http::{MockHttpClient, MockResponse, RecordedRequest};
