//! Concrete implementations of trait abstractions.
//!
//! # Adapters
//!
//! - [`ReqwestHttpClient`] - HTTP client using reqwest
//! - [`SystemClipboard`] - OS clipboard using arboard
//! - [`NoClipboard`] - Rejects writes; for sessions without a clipboard
//!
//! # Mock Implementations
//!
//! The [`mock`] submodule provides test doubles:
//! - [`mock::MockHttpClient`] - Configurable HTTP responses with request recording
//! - [`mock::MemoryClipboard`] - In-memory clipboard with optional failure

pub mod arboard_clipboard;
pub mod mock;
pub mod no_clipboard;
pub mod reqwest_http;

pub use arboard_clipboard::SystemClipboard;
pub use mock::{MemoryClipboard, MockHttpClient};
pub use no_clipboard::NoClipboard;
pub use reqwest_http::ReqwestHttpClient;
