//! End-to-end flows through the App: keys in, rendered screen out.
//!
//! The HTTP layer is the recording mock; requests are answered through the
//! same message channel the event loop uses.

mod common;

use assignmate::adapters::mock::MockResponse;
use assignmate::app::App;
use assignmate::models::Mode;
use assignmate::state::{Phase, Theme};
use assignmate::traits::ClipboardError;
use common::{render_rows, screen_contains, test_app};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

fn press(app: &mut App, code: KeyCode) {
    app.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE));
}

fn ctrl(app: &mut App, c: char) {
    app.handle_key_event(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL));
}

async fn deliver_next(app: &mut App, rx: &mut tokio::sync::mpsc::UnboundedReceiver<assignmate::app::AppMessage>) {
    let message = rx.recv().await.expect("rewrite task dropped its sender");
    app.handle_message(message);
}

#[tokio::test]
async fn test_paste_submit_and_copy() {
    let (mut app, http, clipboard) = test_app();
    http.set_default_response(MockResponse::json(
        200,
        r#"{"rewrittenText":"A fast brown fox."}"#,
    ));
    let mut rx = app.message_rx.take().unwrap();

    app.handle_paste("The quick brown fox");
    press(&mut app, KeyCode::BackTab);
    assert_eq!(app.session().mode(), Mode::Academic);

    http.hold();
    ctrl(&mut app, 's');
    assert!(app.is_loading());
    let rows = render_rows(&app, 100, 30);
    assert!(screen_contains(&rows, "Processing..."));

    http.release();
    deliver_next(&mut app, &mut rx).await;

    assert_eq!(app.session().phase(), Phase::Succeeded);
    let rows = render_rows(&app, 100, 30);
    assert!(screen_contains(&rows, "Rewritten Output"));
    assert!(screen_contains(&rows, "A fast brown fox."));

    let requests = http.get_requests();
    assert_eq!(requests.len(), 1);
    let body: serde_json::Value =
        serde_json::from_str(requests[0].body.as_deref().unwrap()).unwrap();
    assert_eq!(
        body,
        serde_json::json!({"text": "The quick brown fox", "mode": "academic"})
    );

    ctrl(&mut app, 'y');
    assert_eq!(clipboard.contents().as_deref(), Some("A fast brown fox."));
}

#[tokio::test]
async fn test_double_submit_sends_one_request() {
    let (mut app, http, _) = test_app();
    http.set_default_response(MockResponse::json(200, r#"{"rewrittenText":"once"}"#));
    let mut rx = app.message_rx.take().unwrap();

    app.handle_paste("text");
    http.hold();
    ctrl(&mut app, 's');
    ctrl(&mut app, 's');
    app.handle_key_event(KeyEvent::new(KeyCode::Enter, KeyModifiers::CONTROL));
    http.release();
    deliver_next(&mut app, &mut rx).await;

    tokio::task::yield_now().await;
    assert_eq!(http.request_count(), 1);
    assert!(rx.try_recv().is_err());
    assert_eq!(app.session().result(), Some("once"));
}

#[tokio::test]
async fn test_error_banner_clears_on_edit() {
    let (mut app, http, _) = test_app();
    http.set_default_response(MockResponse::json(400, r#"{"error":"Text too long"}"#));
    let mut rx = app.message_rx.take().unwrap();

    app.handle_paste("text");
    ctrl(&mut app, 's');
    deliver_next(&mut app, &mut rx).await;

    let rows = render_rows(&app, 100, 30);
    assert!(screen_contains(&rows, "⚠"));
    assert!(screen_contains(&rows, "Text too long"));

    press(&mut app, KeyCode::Char('!'));
    let rows = render_rows(&app, 100, 30);
    assert!(!screen_contains(&rows, "Text too long"));
    assert_eq!(app.session().phase(), Phase::Idle);
}

#[tokio::test]
async fn test_clipboard_failure_stays_out_of_banner() {
    let (mut app, http, clipboard) = test_app();
    http.set_default_response(MockResponse::json(200, r#"{"rewrittenText":"result"}"#));
    clipboard.fail_with(ClipboardError::Unavailable("no display".to_string()));
    let mut rx = app.message_rx.take().unwrap();

    app.handle_paste("text");
    ctrl(&mut app, 's');
    deliver_next(&mut app, &mut rx).await;
    ctrl(&mut app, 'y');

    assert_eq!(app.session().error(), None);
    assert_eq!(app.session().result(), Some("result"));
    let rows = render_rows(&app, 100, 30);
    assert!(!screen_contains(&rows, "⚠"));
}

#[tokio::test]
async fn test_whitespace_only_input_is_not_submitted() {
    let (mut app, http, _) = test_app();
    app.handle_paste("   \n  ");
    ctrl(&mut app, 's');

    tokio::task::yield_now().await;
    assert!(!app.is_loading());
    assert_eq!(http.request_count(), 0);
    assert_eq!(app.session().phase(), Phase::Idle);
}

#[test]
fn test_info_overlay_and_theme() {
    let (mut app, _, _) = test_app();

    press(&mut app, KeyCode::F(1));
    let rows = render_rows(&app, 100, 30);
    assert!(screen_contains(&rows, "Rewrite Modes Explained"));
    assert!(screen_contains(&rows, "Lowest AI detection, less formal."));

    press(&mut app, KeyCode::Enter);
    assert!(!app.session().info_visible());
    let rows = render_rows(&app, 100, 30);
    assert!(!screen_contains(&rows, "Rewrite Modes Explained"));

    ctrl(&mut app, 't');
    assert_eq!(app.session().theme(), Theme::Dark);
    let rows = render_rows(&app, 100, 30);
    assert!(screen_contains(&rows, "dark theme"));
}

#[test]
fn test_result_scroll_stops_at_last_line() {
    let (mut app, _, _) = test_app();
    let result: Vec<String> = (1..=40).map(|n| format!("line {:02}", n)).collect();

    app.handle_paste("text");
    let pending = app.controller.submit().unwrap();
    app.controller.complete(pending.id, Ok(result.join("\n")));
    let rows = render_rows(&app, 100, 30);
    assert!(screen_contains(&rows, "line 01"));
    assert!(!screen_contains(&rows, "line 40"));

    for _ in 0..20 {
        press(&mut app, KeyCode::PageDown);
    }
    let max_scroll = app.result_max_scroll.get();
    assert!(max_scroll > 0);
    assert_eq!(app.result_scroll, max_scroll);

    let rows = render_rows(&app, 100, 30);
    assert!(screen_contains(&rows, "line 40"));
    assert!(!screen_contains(&rows, "line 01"));

    press(&mut app, KeyCode::PageDown);
    assert_eq!(app.result_scroll, max_scroll);
}
