//! Headless rewrite: read stdin, run one submission, print the outcome.
//!
//! Goes through the same [`SessionController`] as the TUI so blank input,
//! status handling and error messages behave identically.

use std::io::Read;

use color_eyre::Result;

use crate::adapters::NoClipboard;
use crate::app::SessionController;
use crate::config::AppConfig;
use crate::models::Mode;
use crate::rewrite::RewriteClient;
use crate::state::Session;
use crate::traits::Clipboard;

/// Result of a headless rewrite.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PrintOutcome {
    /// Rewritten text
    Rewritten(String),
    /// User-facing error message
    Failed(String),
    /// Input was blank; nothing was sent
    Blank,
}

impl PrintOutcome {
    pub fn exit_code(&self) -> i32 {
        match self {
            PrintOutcome::Rewritten(_) => 0,
            PrintOutcome::Failed(_) => 1,
            PrintOutcome::Blank => 2,
        }
    }
}

/// Rewrite `text` once. `clipboard` is never written to.
pub async fn rewrite_text(
    client: RewriteClient,
    mode: Mode,
    text: &str,
    clipboard: Box<dyn Clipboard>,
) -> PrintOutcome {
    let mut controller = SessionController::new(Session::new().with_mode(mode), client, clipboard);
    controller.set_input_text(text);

    if controller.submit_and_wait().await.is_err() {
        return PrintOutcome::Blank;
    }

    let session = controller.session();
    match (session.result(), session.error()) {
        (Some(result), _) => PrintOutcome::Rewritten(result.to_string()),
        (None, Some(error)) => PrintOutcome::Failed(error.to_string()),
        (None, None) => PrintOutcome::Failed(crate::error::REQUEST_FAILED_MESSAGE.to_string()),
    }
}

/// Handle `--print`. Returns the process exit code.
pub fn handle_print_command(config: &AppConfig) -> Result<i32> {
    let mut text = String::new();
    std::io::stdin().read_to_string(&mut text)?;

    let runtime = tokio::runtime::Runtime::new()?;
    let client = RewriteClient::with_url(config.endpoint.clone());
    let outcome = runtime.block_on(rewrite_text(
        client,
        config.mode,
        &text,
        Box::new(NoClipboard),
    ));

    match &outcome {
        PrintOutcome::Rewritten(result) => println!("{}", result),
        PrintOutcome::Failed(message) => eprintln!("Error: {}", message),
        PrintOutcome::Blank => eprintln!("Error: nothing to rewrite (input is empty)"),
    }
    Ok(outcome.exit_code())
}
