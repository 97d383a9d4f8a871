// Library root
// -----------
// The binary (`main.rs`) parses the command line, fills in whatever the
// selected command still needs by prompting, and prints the resulting
// options record for the request executor.
//
// Module responsibilities:
// - `options`: the options record and its defaults.
// - `args`: flag schema and parsing into `Options`.
// - `command`: maps the command name to the fields it requires.
// - `prompt`: the `Prompter` trait and its terminal implementation.
// - `resolve`: prompts for missing fields and merges the answers.
// - `error`: error types shared by the modules above.
pub mod args;
pub mod command;
pub mod error;
pub mod options;
pub mod prompt;
pub mod resolve;

use std::ffi::OsString;

use args::FlagParser;
use error::Result;
use options::Options;
use prompt::Prompter;

/// Parse `tokens` and prompt for anything the command still needs.
/// Parse errors are returned before any prompt is shown.
pub fn run<P, I, T>(parser: &P, prompter: &mut dyn Prompter, tokens: I) -> Result<Options>
where
    P: FlagParser,
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let options = parser.parse(tokens)?;
    resolve::resolve(&options, prompter)
}
