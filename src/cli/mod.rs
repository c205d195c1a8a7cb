//! CLI module.
//!
//! Handles command-line flags before the TUI starts:
//! - Argument parsing
//! - Version and help display
//! - Headless `--print` rewrite
//!
//! ```ignore
//! use assignmate::cli::{parse_args, run_cli_command};
//!
//! let args = parse_args(std::env::args())?;
//! if let Some(code) = run_cli_command(&args, &config)? {
//!     std::process::exit(code);
//! }
//! // No CLI command, continue to TUI
//! ```

pub mod args;
pub mod print;
pub mod version;

pub use args::{parse_args, CliArgs, CliCommand, USAGE};
pub use print::{handle_print_command, rewrite_text, PrintOutcome};
pub use version::{handle_version_command, VERSION};

use color_eyre::Result;

use crate::config::AppConfig;

/// Run a CLI command if applicable.
///
/// * `Ok(None)` - the command is `RunTui`
/// * `Ok(Some(code))` - a CLI command ran; exit with `code`
pub fn run_cli_command(args: &CliArgs, config: &AppConfig) -> Result<Option<i32>> {
    match args.command {
        CliCommand::Version => {
            handle_version_command();
            Ok(Some(0))
        }
        CliCommand::Help => {
            println!("{}", USAGE);
            Ok(Some(0))
        }
        CliCommand::Print => handle_print_command(config).map(Some),
        CliCommand::RunTui => Ok(None),
    }
}
