// Entrypoint for the CLI application.
// Parses the command line, prompts for anything the command still needs and
// prints the resolved options as JSON for the request executor.

use std::process;

use twitch_api_cli::args::ClapFlagParser;
use twitch_api_cli::error::CliError;
use twitch_api_cli::prompt::DialoguerPrompter;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let options = match twitch_api_cli::run(
        &ClapFlagParser,
        &mut DialoguerPrompter,
        std::env::args_os(),
    ) {
        Ok(options) => options,
        // clap prints the message and exits 2, or 0 for --help/--version
        Err(CliError::InvalidArgument(e)) => e.exit(),
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(1);
        }
    };

    log::debug!("Resolved options: {:?}", options);
    println!("{}", serde_json::to_string_pretty(&options)?);
    Ok(())
}
