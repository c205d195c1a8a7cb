//! Rewrite session controller.
//!
//! Owns the [`Session`], the [`RewriteClient`] and the clipboard. Every
//! mutation goes through here and marks the view dirty, so the event loop
//! redraws before it reads the next input.
//!
//! Submission is split in two halves so the event loop never blocks:
//! [`SessionController::submit`] applies the start transition and hands back
//! a [`PendingRewrite`]; whoever performs the call reports back through
//! [`SessionController::complete`]. [`SessionController::submit_and_wait`]
//! does both in one await for callers that can block.

use crate::error::RewriteError;
use crate::models::{Mode, RewriteRequest};
use crate::rewrite::RewriteClient;
use crate::state::Session;
use crate::traits::Clipboard;

/// Identifies one submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequestId(pub u64);

/// A submission that has entered the loading phase and still needs its call.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingRewrite {
    pub id: RequestId,
    pub request: RewriteRequest,
}

/// Why a submit did not start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitRejection {
    /// Trimmed input is empty.
    BlankInput,
    /// A request is already in flight.
    InFlight,
}

pub struct SessionController {
    session: Session,
    client: RewriteClient,
    clipboard: Box<dyn Clipboard>,
    next_id: u64,
    in_flight: Option<RequestId>,
    needs_redraw: bool,
}

impl SessionController {
    pub fn new(session: Session, client: RewriteClient, clipboard: Box<dyn Clipboard>) -> Self {
        Self {
            session,
            client,
            clipboard,
            next_id: 0,
            in_flight: None,
            needs_redraw: true,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn client(&self) -> &RewriteClient {
        &self.client
    }

    /// Request currently awaiting its outcome, if any.
    pub fn in_flight(&self) -> Option<RequestId> {
        self.in_flight
    }

    pub fn needs_redraw(&self) -> bool {
        self.needs_redraw
    }

    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    /// Called by the event loop after drawing.
    pub fn mark_drawn(&mut self) {
        self.needs_redraw = false;
    }

    /// Start a submission.
    ///
    /// Blank input and a second submit while one is in flight are both
    /// rejected without touching the session.
    pub fn submit(&mut self) -> Result<PendingRewrite, SubmitRejection> {
        if self.in_flight.is_some() {
            tracing::debug!("submit rejected: request already in flight");
            return Err(SubmitRejection::InFlight);
        }
        let Some(request) = self.session.begin_submit() else {
            tracing::debug!("submit ignored: blank input");
            return Err(SubmitRejection::BlankInput);
        };

        let id = RequestId(self.next_id);
        self.next_id += 1;
        self.in_flight = Some(id);
        self.mark_dirty();

        tracing::info!(
            request_id = id.0,
            mode = %request.mode,
            words = self.session.word_count(),
            "rewrite submitted"
        );
        Ok(PendingRewrite { id, request })
    }

    /// Apply the outcome of the request `id`.
    ///
    /// Returns false and changes nothing when `id` is not the in-flight
    /// request.
    pub fn complete(&mut self, id: RequestId, outcome: Result<String, RewriteError>) -> bool {
        if self.in_flight != Some(id) {
            tracing::warn!(request_id = id.0, "discarding outcome of stale request");
            return false;
        }
        self.in_flight = None;

        match &outcome {
            Ok(text) => tracing::info!(request_id = id.0, chars = text.len(), "rewrite succeeded"),
            Err(err) if err.is_transport() => {
                tracing::warn!(request_id = id.0, error = %err, "rewrite transport failure")
            }
            Err(err) => tracing::warn!(request_id = id.0, error = %err, "rewrite rejected by service"),
        }

        self.session.finish(outcome);
        self.mark_dirty();
        true
    }

    /// Submit and await the outcome in place.
    ///
    /// Returns the rejection when the submit did not start.
    pub async fn submit_and_wait(&mut self) -> Result<(), SubmitRejection> {
        let pending = self.submit()?;
        let client = self.client.clone();
        let outcome = client.rewrite(&pending.request).await;
        self.complete(pending.id, outcome);
        Ok(())
    }

    pub fn set_input_text(&mut self, text: impl Into<String>) {
        self.session.set_input_text(text);
        self.mark_dirty();
    }

    pub fn set_mode(&mut self, mode: Mode) {
        if self.session.mode() != mode {
            tracing::debug!(%mode, "mode changed");
        }
        self.session.set_mode(mode);
        self.mark_dirty();
    }

    pub fn toggle_theme(&mut self) {
        self.session.toggle_theme();
        self.mark_dirty();
    }

    pub fn set_info_visible(&mut self, visible: bool) {
        self.session.set_info_visible(visible);
        self.mark_dirty();
    }

    /// Write the result to the clipboard.
    ///
    /// Does nothing without a non-empty result. Clipboard failures are
    /// logged and otherwise ignored; they never reach the error banner.
    /// Returns whether the write succeeded.
    pub fn copy_result(&mut self) -> bool {
        if !self.session.can_copy() {
            return false;
        }
        let Some(result) = self.session.result() else {
            return false;
        };
        match self.clipboard.set_text(result) {
            Ok(()) => {
                tracing::debug!(chars = result.len(), "result copied to clipboard");
                true
            }
            Err(err) => {
                tracing::warn!(error = %err, "clipboard write failed");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::{MemoryClipboard, MockHttpClient, MockResponse};
    use crate::error::{NETWORK_ERROR_MESSAGE, REQUEST_FAILED_MESSAGE};
    use crate::state::Phase;
    use crate::traits::{ClipboardError, HttpError};
    use std::sync::Arc;

    const URL: &str = "https://rewrite.test/api/rewrite";

    fn controller(response: MockResponse) -> (SessionController, MockHttpClient, MemoryClipboard) {
        let http = MockHttpClient::new();
        http.set_default_response(response);
        let clipboard = MemoryClipboard::new();
        let controller = SessionController::new(
            Session::new(),
            RewriteClient::with_http(URL, Arc::new(http.clone())),
            Box::new(clipboard.clone()),
        );
        (controller, http, clipboard)
    }

    #[tokio::test]
    async fn test_blank_submit_issues_no_request() {
        let (mut ctl, http, _) = controller(MockResponse::json(200, r#"{"rewrittenText":"x"}"#));
        ctl.set_input_text("   ");
        let before = ctl.session().clone();

        assert_eq!(ctl.submit_and_wait().await, Err(SubmitRejection::BlankInput));
        assert_eq!(ctl.session(), &before);
        assert_eq!(http.request_count(), 0);
        assert_eq!(ctl.in_flight(), None);
    }

    #[tokio::test]
    async fn test_scenario_success() {
        let (mut ctl, http, _) = controller(MockResponse::json(
            200,
            r#"{"rewrittenText":"An agile fox, brown in hue, ..."}"#,
        ));
        ctl.set_input_text("The quick brown fox");
        ctl.set_mode(Mode::Academic);

        ctl.submit_and_wait().await.unwrap();

        let requests = http.get_requests();
        assert_eq!(
            requests[0].body.as_deref(),
            Some(r#"{"text":"The quick brown fox","mode":"academic"}"#)
        );
        let session = ctl.session();
        assert_eq!(session.result(), Some("An agile fox, brown in hue, ..."));
        assert_eq!(session.error(), None);
        assert!(!session.is_loading());
        assert_eq!(session.phase(), Phase::Succeeded);
    }

    #[tokio::test]
    async fn test_outcome_messages() {
        let cases = [
            (MockResponse::json(413, r#"{"error":"text too long"}"#), "text too long"),
            (MockResponse::json(500, "{}"), REQUEST_FAILED_MESSAGE),
            (
                MockResponse::Error(HttpError::ConnectionFailed("offline".into())),
                NETWORK_ERROR_MESSAGE,
            ),
        ];

        for (response, expected) in cases {
            let (mut ctl, _, _) = controller(response);
            ctl.set_input_text("some text");
            ctl.submit_and_wait().await.unwrap();

            assert_eq!(ctl.session().error(), Some(expected));
            assert_eq!(ctl.session().result(), None);
            assert!(!ctl.session().is_loading());
            assert_eq!(ctl.in_flight(), None);
        }
    }

    #[tokio::test]
    async fn test_success_body_shapes() {
        let (mut ctl, _, _) = controller(MockResponse::json(200, "{}"));
        ctl.set_input_text("some text");
        ctl.submit_and_wait().await.unwrap();

        assert_eq!(ctl.session().phase(), Phase::Succeeded);
        assert_eq!(ctl.session().error(), None);
        assert!(!ctl.session().can_copy());

        let (mut ctl, _, _) = controller(MockResponse::json(200, "<html>ok</html>"));
        ctl.set_input_text("some text");
        ctl.submit_and_wait().await.unwrap();

        assert_eq!(ctl.session().phase(), Phase::Failed);
        assert_eq!(ctl.session().error(), Some(NETWORK_ERROR_MESSAGE));
        assert_eq!(ctl.session().result(), None);
    }

    #[test]
    fn test_second_submit_rejected_while_in_flight() {
        let (mut ctl, _, _) = controller(MockResponse::json(200, "{}"));
        ctl.set_input_text("text");

        let first = ctl.submit().unwrap();
        assert!(ctl.session().is_loading());
        assert_eq!(ctl.submit(), Err(SubmitRejection::InFlight));
        assert_eq!(ctl.in_flight(), Some(first.id));
    }

    #[test]
    fn test_stale_completion_is_ignored() {
        let (mut ctl, _, _) = controller(MockResponse::json(200, "{}"));
        ctl.set_input_text("text");

        let first = ctl.submit().unwrap();
        assert!(ctl.complete(first.id, Ok("first".to_string())));

        let second = ctl.submit().unwrap();
        assert_ne!(first.id, second.id);
        assert!(!ctl.complete(first.id, Ok("late".to_string())));
        assert!(ctl.session().is_loading());

        assert!(ctl.complete(second.id, Ok("second".to_string())));
        assert_eq!(ctl.session().result(), Some("second"));
    }

    #[test]
    fn test_mutations_mark_dirty() {
        let (mut ctl, _, _) = controller(MockResponse::json(200, "{}"));
        assert!(ctl.needs_redraw());

        ctl.mark_drawn();
        ctl.set_mode(Mode::Aggressive);
        assert!(ctl.needs_redraw());

        ctl.mark_drawn();
        ctl.toggle_theme();
        assert!(ctl.needs_redraw());

        ctl.mark_drawn();
        ctl.set_input_text("a");
        let pending = ctl.submit().unwrap();
        assert!(ctl.needs_redraw());

        ctl.mark_drawn();
        ctl.complete(pending.id, Ok("b".to_string()));
        assert!(ctl.needs_redraw());
    }

    #[test]
    fn test_copy_result() {
        let (mut ctl, _, clipboard) = controller(MockResponse::json(200, "{}"));
        assert!(!ctl.copy_result());
        assert_eq!(clipboard.write_count(), 0);

        ctl.set_input_text("text");
        let pending = ctl.submit().unwrap();
        ctl.complete(pending.id, Ok("line one\nline two".to_string()));

        assert!(ctl.copy_result());
        assert_eq!(clipboard.contents().as_deref(), Some("line one\nline two"));
    }

    #[test]
    fn test_copy_failure_is_silent() {
        let (mut ctl, _, clipboard) = controller(MockResponse::json(200, "{}"));
        ctl.set_input_text("text");
        let pending = ctl.submit().unwrap();
        ctl.complete(pending.id, Ok("result".to_string()));

        clipboard.fail_with(ClipboardError::Unavailable("no display".to_string()));
        assert!(!ctl.copy_result());
        assert_eq!(ctl.session().error(), None);
        assert_eq!(ctl.session().result(), Some("result"));
    }
}
