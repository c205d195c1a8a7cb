//! Command-line argument parsing.
//!
//! Flags override the environment; see [`CliArgs::apply`].

use crate::config::{validate_url, AppConfig};
use crate::error::ConfigError;
use crate::models::Mode;
use crate::state::Theme;

/// Parsed CLI command to execute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Show usage
    Help,
    /// Rewrite stdin once and print the result
    Print,
    /// Run the TUI application (default)
    #[default]
    RunTui,
}

/// Everything parsed from the command line.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CliArgs {
    pub command: CliCommand,
    pub endpoint: Option<String>,
    pub mode: Option<Mode>,
    pub dark: bool,
}

impl CliArgs {
    /// Layer the flags over `config`.
    pub fn apply(&self, mut config: AppConfig) -> AppConfig {
        if let Some(endpoint) = &self.endpoint {
            config.endpoint = endpoint.clone();
        }
        if let Some(mode) = self.mode {
            config.mode = mode;
        }
        if self.dark {
            config.theme = Theme::Dark;
        }
        config
    }
}

pub const USAGE: &str = "\
Usage: assignmate [OPTIONS]

Options:
  --url <URL>     Rewrite endpoint (env: ASSIGNMATE_URL)
  --mode <MODE>   Initial mode: academic, balanced, aggressive (env: ASSIGNMATE_MODE)
  --dark          Start with the dark theme (env: ASSIGNMATE_THEME)
  --print         Rewrite stdin once and print the result
  -V, --version   Print version
  -h, --help      Print this help

Logging: set ASSIGNMATE_LOG to a filter such as `debug`.";

/// Parse command-line arguments.
///
/// The first item is the program name and is skipped. `--version` and
/// `--help` win over everything else.
///
/// # Examples
///
/// ```
/// use assignmate::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["assignmate".to_string(), "--version".to_string()];
/// assert_eq!(parse_args(args.into_iter()).unwrap().command, CliCommand::Version);
/// ```
pub fn parse_args<I>(args: I) -> Result<CliArgs, ConfigError>
where
    I: Iterator<Item = String>,
{
    let mut parsed = CliArgs::default();
    let mut args = args.skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--version" | "-V" => {
                parsed.command = CliCommand::Version;
                return Ok(parsed);
            }
            "--help" | "-h" => {
                parsed.command = CliCommand::Help;
                return Ok(parsed);
            }
            "--print" => parsed.command = CliCommand::Print,
            "--dark" => parsed.dark = true,
            "--url" => {
                let value = args
                    .next()
                    .ok_or_else(|| ConfigError::MissingValue("--url".to_string()))?;
                parsed.endpoint = Some(validate_url(&value)?);
            }
            "--mode" => {
                let value = args
                    .next()
                    .ok_or_else(|| ConfigError::MissingValue("--mode".to_string()))?;
                parsed.mode = Some(value.parse().map_err(|error| ConfigError::InvalidMode {
                    source_name: "--mode".to_string(),
                    error,
                })?);
            }
            other => return Err(ConfigError::UnknownArgument(other.to_string())),
        }
    }
    Ok(parsed)
}
