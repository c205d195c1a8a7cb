//! Rewrite intensity modes.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Rewrite intensity preset sent to the rewriting service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Formal register
    Academic,
    /// Middle ground between quality and a human feel
    #[default]
    Balanced,
    /// Loosest rewrite
    Aggressive,
}

impl Mode {
    /// All modes in display order.
    pub const ALL: [Mode; 3] = [Mode::Academic, Mode::Balanced, Mode::Aggressive];

    /// Wire name, as sent in the request body.
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Academic => "academic",
            Mode::Balanced => "balanced",
            Mode::Aggressive => "aggressive",
        }
    }

    /// Capitalized name for selector buttons.
    pub fn label(&self) -> &'static str {
        match self {
            Mode::Academic => "Academic",
            Mode::Balanced => "Balanced",
            Mode::Aggressive => "Aggressive",
        }
    }

    /// One-line explanation shown in the info overlay.
    pub fn description(&self) -> &'static str {
        match self {
            Mode::Academic => "Professional, formal, higher AI detection.",
            Mode::Balanced => "Best mix of quality and human feel.",
            Mode::Aggressive => "Lowest AI detection, less formal.",
        }
    }

    pub fn next(&self) -> Mode {
        match self {
            Mode::Academic => Mode::Balanced,
            Mode::Balanced => Mode::Aggressive,
            Mode::Aggressive => Mode::Academic,
        }
    }

    pub fn prev(&self) -> Mode {
        match self {
            Mode::Academic => Mode::Aggressive,
            Mode::Balanced => Mode::Academic,
            Mode::Aggressive => Mode::Balanced,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown mode name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown mode '{0}' (expected academic, balanced or aggressive)")]
pub struct ParseModeError(pub String);

impl FromStr for Mode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "academic" => Ok(Mode::Academic),
            "balanced" => Ok(Mode::Balanced),
            "aggressive" => Ok(Mode::Aggressive),
            _ => Err(ParseModeError(s.to_string())),
        }
    }
}
