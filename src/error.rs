// Error types for the CLI.
// Parse errors are fatal and end the invocation before any prompt is shown.
// Prompt validation never produces an error here: the prompt loop keeps
// asking until the input is accepted.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Error, Debug)]
pub enum CliError {
    /// Unknown flag, missing command or malformed flag value.
    /// The wrapped clap error renders the message and picks the exit code.
    #[error("{0}")]
    InvalidArgument(#[from] clap::Error),

    /// The terminal could not be read from or written to while prompting.
    #[error("prompt failed: {0}")]
    Prompt(#[from] std::io::Error),
}
