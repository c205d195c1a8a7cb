//! Common test utilities for integration tests.
//!
//! ```ignore
//! mod common;
//! use common::{test_app, render_rows};
//!
//! let app = test_app("https://rewrite.test");
//! let rows = render_rows(&app, 100, 30);
//! ```

#![allow(dead_code)]

use std::sync::Arc;

use assignmate::adapters::mock::{MemoryClipboard, MockHttpClient};
use assignmate::adapters::ReqwestHttpClient;
use assignmate::app::{App, SessionController};
use assignmate::config::AppConfig;
use assignmate::rewrite::RewriteClient;
use assignmate::state::Session;
use assignmate::ui;
use ratatui::{backend::TestBackend, Terminal};

/// Client that talks to `endpoint` over real HTTP.
pub fn http_client(endpoint: &str) -> RewriteClient {
    RewriteClient::with_http(endpoint, Arc::new(ReqwestHttpClient::new()))
}

/// Controller over real HTTP with an in-memory clipboard.
pub fn http_controller(endpoint: &str) -> (SessionController, MemoryClipboard) {
    let clipboard = MemoryClipboard::new();
    let controller = SessionController::new(
        Session::new(),
        http_client(endpoint),
        Box::new(clipboard.clone()),
    );
    (controller, clipboard)
}

/// App over the recording mock client. No request is ever answered unless
/// the test configures a response.
pub fn test_app() -> (App, MockHttpClient, MemoryClipboard) {
    let http = MockHttpClient::new();
    let clipboard = MemoryClipboard::new();
    let app = App::with_parts(
        &AppConfig::default(),
        RewriteClient::with_http("https://rewrite.test/api/rewrite", Arc::new(http.clone())),
        Box::new(clipboard.clone()),
    );
    (app, http, clipboard)
}

/// Render `app` into a `width` x `height` buffer, one string per row.
pub fn render_rows(app: &App, width: u16, height: u16) -> Vec<String> {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|f| ui::render(f, app)).unwrap();
    let buffer = terminal.backend().buffer();
    (0..height)
        .map(|y| {
            (0..width)
                .map(|x| buffer[(x, y)].symbol().to_string())
                .collect::<String>()
        })
        .collect()
}

pub fn screen_contains(rows: &[String], needle: &str) -> bool {
    rows.iter().any(|row| row.contains(needle))
}
