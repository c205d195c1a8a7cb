//! Rewrite session state.
//!
//! [`Session`] is the whole mutable state of one rewrite interaction. Its
//! methods are the state transitions; they perform no I/O. The
//! [`SessionController`](crate::app::SessionController) drives them and owns
//! the network call.

use std::fmt;
use std::str::FromStr;

use crate::error::{ConfigError, RewriteError};
use crate::models::{Mode, RewriteRequest};

/// Advisory word limit shown next to the word count. Not enforced.
pub const MAX_WORDS_HINT: usize = 1000;

/// Lifecycle phase of the session.
///
/// ```text
/// Idle      --begin_submit(non-blank)--> Loading
/// Loading   --finish(Ok)---------------> Succeeded
/// Loading   --finish(Err)--------------> Failed
/// Succeeded --begin_submit(non-blank)--> Loading
/// Failed    --begin_submit(non-blank)--> Loading
/// Failed    --edit text or mode--------> Idle
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Loading,
    Succeeded,
    Failed,
}

/// Display theme. Orthogonal to the rewrite lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        })
    }
}

impl FromStr for Theme {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            _ => Err(ConfigError::InvalidTheme(s.to_string())),
        }
    }
}

/// Live state of the rewrite interaction.
///
/// Invariant: `result` is only set in [`Phase::Succeeded`] and `error` only
/// in [`Phase::Failed`], so the phase fully determines which outcome is
/// current.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    input_text: String,
    mode: Mode,
    phase: Phase,
    result: Option<String>,
    error: Option<String>,
    info_visible: bool,
    theme: Theme,
}

impl Session {
    /// Empty text, balanced mode, idle, light theme.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn input_text(&self) -> &str {
        &self.input_text
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_loading(&self) -> bool {
        self.phase == Phase::Loading
    }

    pub fn result(&self) -> Option<&str> {
        self.result.as_deref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn info_visible(&self) -> bool {
        self.info_visible
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// True when the trimmed input is empty.
    pub fn is_blank(&self) -> bool {
        self.input_text.trim().is_empty()
    }

    /// Whether the submit control is enabled.
    pub fn can_submit(&self) -> bool {
        !self.is_loading() && !self.is_blank()
    }

    /// Whether the copy control is shown.
    pub fn can_copy(&self) -> bool {
        self.result.as_deref().is_some_and(|r| !r.is_empty())
    }

    pub fn word_count(&self) -> usize {
        word_count(&self.input_text)
    }

    /// Start a submission.
    ///
    /// Blank input is a no-op and returns `None`. Otherwise the session
    /// enters [`Phase::Loading`] with result and error cleared together and
    /// the request to send is returned. This does not guard against an
    /// in-flight request; the controller does.
    pub fn begin_submit(&mut self) -> Option<RewriteRequest> {
        if self.is_blank() {
            return None;
        }
        self.phase = Phase::Loading;
        self.result = None;
        self.error = None;
        Some(RewriteRequest::new(self.input_text.clone(), self.mode))
    }

    /// Apply the outcome of a request. Always leaves the loading phase.
    pub fn finish(&mut self, outcome: Result<String, RewriteError>) {
        match outcome {
            Ok(text) => {
                self.result = Some(text);
                self.error = None;
                self.phase = Phase::Succeeded;
            }
            Err(err) => {
                self.result = None;
                self.error = Some(err.user_message());
                self.phase = Phase::Failed;
            }
        }
    }

    /// Replace the input text. Clears a displayed error.
    pub fn set_input_text(&mut self, text: impl Into<String>) {
        self.input_text = text.into();
        self.clear_stale_error();
    }

    /// Replace the mode. Clears a displayed error.
    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
        self.clear_stale_error();
    }

    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
    }

    pub fn set_info_visible(&mut self, visible: bool) {
        self.info_visible = visible;
    }

    fn clear_stale_error(&mut self) {
        if self.error.take().is_some() && self.phase == Phase::Failed {
            self.phase = Phase::Idle;
        }
    }
}

/// Number of whitespace-delimited tokens in `text`.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}
