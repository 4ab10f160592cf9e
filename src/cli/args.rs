//! Command-line argument parsing.

use crate::models::{GenerationInput, Mood, TimeOfDay};

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Show usage
    Help,
    /// Generate once and print the share text
    Print(GenerationInput),
    /// Bad arguments; carries the reason
    Invalid(String),
    /// Run the TUI application (default)
    RunTui,
}

pub const USAGE: &str = "\
Usage: mindspoke [OPTIONS]

Without options, starts the interactive journaling screen.

Options:
  -p, --print          Generate one prompt and print it, then exit
  -m, --mood <MOOD>    Happy, Calm, Neutral, Hopeful, Anxious, Stressed, Sad, Tired
  -t, --time <TIME>    Morning, Afternoon, Evening, Night
      --theme <TEXT>   Optional theme for the prompt
  -V, --version        Print version
  -h, --help           Print this help

Environment:
  API_KEY              Generative Language API key (required)";

/// Parse command-line arguments and return the appropriate command.
///
/// `--mood`, `--time` and `--theme` only matter together with `--print`;
/// mood and time fall back to the form defaults.
///
/// ```
/// use mindspoke::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["mindspoke".to_string(), "--version".to_string()];
/// assert_eq!(parse_args(args.into_iter()), CliCommand::Version);
/// ```
pub fn parse_args<I>(args: I) -> CliCommand
where
    I: Iterator<Item = String>,
{
    let mut print = false;
    let mut input = GenerationInput::default();

    // Skip the program name
    let mut args = args.skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--version" | "-V" => return CliCommand::Version,
            "--help" | "-h" => return CliCommand::Help,
            "--print" | "-p" => print = true,
            "--mood" | "-m" => match args.next().map(|v| v.parse::<Mood>()) {
                Some(Ok(mood)) => input.mood = mood,
                Some(Err(e)) => return CliCommand::Invalid(e),
                None => return CliCommand::Invalid("--mood needs a value".to_string()),
            },
            "--time" | "-t" => match args.next().map(|v| v.parse::<TimeOfDay>()) {
                Some(Ok(time)) => input.time_of_day = time,
                Some(Err(e)) => return CliCommand::Invalid(e),
                None => return CliCommand::Invalid("--time needs a value".to_string()),
            },
            "--theme" => match args.next() {
                Some(theme) => input.theme = theme,
                None => return CliCommand::Invalid("--theme needs a value".to_string()),
            },
            other => return CliCommand::Invalid(format!("unknown argument '{}'", other)),
        }
    }

    if print {
        CliCommand::Print(input)
    } else {
        CliCommand::RunTui
    }
}
