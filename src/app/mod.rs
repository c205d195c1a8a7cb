//! Application state and logic for the TUI.
//!
//! - [`App`] - top-level state held by the event loop
//! - [`SessionController`] - owner of the rewrite session
//! - [`AppMessage`] - messages from spawned rewrite calls

mod controller;
mod handlers;
mod messages;

pub use controller::{PendingRewrite, RequestId, SessionController, SubmitRejection};
pub use messages::AppMessage;

use std::cell::Cell;
use std::sync::Arc;

use tokio::sync::mpsc;

use crate::adapters::{ReqwestHttpClient, SystemClipboard};
use crate::config::AppConfig;
use crate::domain::InputBuffer;
use crate::rewrite::RewriteClient;
use crate::state::Session;
use crate::traits::Clipboard;

/// Main application state
pub struct App {
    /// Rewrite session and its collaborators
    pub controller: SessionController,
    /// Text area editor; mirrored into the session after every edit
    pub input: InputBuffer,
    /// Flag to track if the app should quit
    pub should_quit: bool,
    /// Animation tick counter (spinner)
    pub tick_count: u64,
    /// First visible line of the result panel
    pub result_scroll: u16,
    /// Largest useful `result_scroll`, recorded by the last render
    pub result_max_scroll: Cell<u16>,
    /// Receiver for async messages; taken by the event loop
    pub message_rx: Option<mpsc::UnboundedReceiver<AppMessage>>,
    /// Sender handed to spawned rewrite calls
    pub message_tx: mpsc::UnboundedSender<AppMessage>,
}

impl App {
    /// Build the app with the production HTTP client and system clipboard.
    pub fn new(config: &AppConfig) -> Self {
        let client =
            RewriteClient::with_http(config.endpoint.clone(), Arc::new(ReqwestHttpClient::new()));
        Self::with_parts(config, client, Box::new(SystemClipboard::new()))
    }

    /// Build the app over explicit collaborators.
    pub fn with_parts(
        config: &AppConfig,
        client: RewriteClient,
        clipboard: Box<dyn Clipboard>,
    ) -> Self {
        let session = Session::new()
            .with_mode(config.mode)
            .with_theme(config.theme);
        let (message_tx, message_rx) = mpsc::unbounded_channel();

        Self {
            controller: SessionController::new(session, client, clipboard),
            input: InputBuffer::new(),
            should_quit: false,
            tick_count: 0,
            result_scroll: 0,
            result_max_scroll: Cell::new(0),
            message_rx: Some(message_rx),
            message_tx,
        }
    }

    pub fn session(&self) -> &Session {
        self.controller.session()
    }

    pub fn needs_redraw(&self) -> bool {
        self.controller.needs_redraw()
    }

    pub fn mark_dirty(&mut self) {
        self.controller.mark_dirty();
    }

    pub fn mark_drawn(&mut self) {
        self.controller.mark_drawn();
    }

    pub fn is_loading(&self) -> bool {
        self.session().is_loading()
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Advance animations. The spinner only moves while loading.
    pub fn tick(&mut self) {
        self.tick_count = self.tick_count.wrapping_add(1);
        if self.is_loading() {
            self.mark_dirty();
        }
    }

    /// Start a rewrite in the background.
    ///
    /// The call runs on its own task and reports back through
    /// [`AppMessage::RewriteCompleted`]. Returns whether a request started.
    pub fn submit(&mut self) -> bool {
        let pending = match self.controller.submit() {
            Ok(pending) => pending,
            Err(_) => return false,
        };

        let client = self.controller.client().clone();
        let message_tx = self.message_tx.clone();
        tokio::spawn(async move {
            let outcome = client.rewrite(&pending.request).await;
            let _ = message_tx.send(AppMessage::RewriteCompleted {
                id: pending.id,
                outcome,
            });
        });
        true
    }

    pub fn handle_message(&mut self, message: AppMessage) {
        match message {
            AppMessage::RewriteCompleted { id, outcome } => {
                if self.controller.complete(id, outcome) {
                    self.result_scroll = 0;
                }
            }
        }
    }

    /// Copy the editor contents into the session.
    fn sync_input(&mut self) {
        self.controller.set_input_text(self.input.text());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::{MemoryClipboard, MockHttpClient, MockResponse};
    use crate::models::Mode;
    use crate::state::{Phase, Theme};

    fn app(response: MockResponse) -> (App, MockHttpClient) {
        let http = MockHttpClient::new();
        http.set_default_response(response);
        let client = RewriteClient::with_http("https://rewrite.test", Arc::new(http.clone()));
        let app = App::with_parts(
            &AppConfig::default(),
            client,
            Box::new(MemoryClipboard::new()),
        );
        (app, http)
    }

    #[test]
    fn test_config_seeds_session() {
        let config = AppConfig::default()
            .with_mode(Mode::Aggressive)
            .with_theme(Theme::Dark);
        let app = App::with_parts(
            &config,
            RewriteClient::with_http("https://rewrite.test", Arc::new(MockHttpClient::new())),
            Box::new(MemoryClipboard::new()),
        );
        assert_eq!(app.session().mode(), Mode::Aggressive);
        assert_eq!(app.session().theme(), Theme::Dark);
        assert_eq!(app.session().phase(), Phase::Idle);
    }

    #[tokio::test]
    async fn test_submit_round_trip_through_channel() {
        let (mut app, http) = app(MockResponse::json(200, r#"{"rewrittenText":"done"}"#));
        let mut rx = app.message_rx.take().unwrap();
        app.input = InputBuffer::with_text("hello world");
        app.sync_input();

        assert!(app.submit());
        assert!(app.is_loading());

        let message = rx.recv().await.unwrap();
        app.handle_message(message);

        assert!(!app.is_loading());
        assert_eq!(app.session().result(), Some("done"));
        assert_eq!(http.request_count(), 1);
    }

    #[tokio::test]
    async fn test_submit_blank_does_not_spawn() {
        let (mut app, http) = app(MockResponse::json(200, "{}"));
        assert!(!app.submit());
        tokio::task::yield_now().await;
        assert_eq!(http.request_count(), 0);
    }

    #[test]
    fn test_tick_redraws_only_while_loading() {
        let (mut app, _) = app(MockResponse::json(200, "{}"));
        app.mark_drawn();
        app.tick();
        assert!(!app.needs_redraw());
        assert_eq!(app.tick_count, 1);
    }
}
