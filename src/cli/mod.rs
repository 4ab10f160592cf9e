//! CLI module.
//!
//! Flags are handled before the TUI starts:
//!
//! ```ignore
//! use mindspoke::cli::{parse_args, run_cli_command, CliCommand};
//!
//! let command = parse_args(std::env::args());
//! if let Some(code) = run_cli_command(&command) {
//!     std::process::exit(code);
//! }
//! // RunTui or Print: needs configuration, continue in main
//! ```

pub mod args;
pub mod print;
pub mod version;

pub use args::{parse_args, CliCommand, USAGE};
pub use print::run_print;
pub use version::{handle_version_command, version_line, VERSION};

/// Run a command that needs no configuration.
///
/// Returns the exit code, or `None` for commands that continue in `main`.
pub fn run_cli_command(command: &CliCommand) -> Option<i32> {
    match command {
        CliCommand::Version => handle_version_command(),
        CliCommand::Help => {
            println!("{}", USAGE);
            Some(0)
        }
        CliCommand::Invalid(reason) => {
            eprintln!("error: {}\n\n{}", reason, USAGE);
            Some(2)
        }
        CliCommand::Print(_) | CliCommand::RunTui => None,
    }
}
