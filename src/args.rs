// Command-line flag parsing.
// The flag schema is declared with clap's derive API. Parsing turns the raw
// token list into an `Options` record with every default already applied,
// so nothing downstream has to tell "missing" apart from "default".

use std::ffi::OsString;

use clap::Parser;
use reqwest::{Method, Url};

use crate::error::Result;
use crate::options::{Options, DEFAULT_HOST, DEFAULT_METHOD};

/// Turns raw command-line tokens into an [`Options`] record.
pub trait FlagParser {
    /// `tokens` includes the program name as its first element, the way
    /// `std::env::args_os()` yields it.
    fn parse<I, T>(&self, tokens: I) -> Result<Options>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone;
}

/// Send requests to the Twitch API from the terminal
#[derive(Parser, Debug)]
#[command(name = "twitch-api-cli", version)]
struct Flags {
    /// `accounts`, `authorize`, `alias`, or the API URL to request
    #[arg(value_name = "COMMAND")]
    command: String,

    /// Positional arguments after the command; accepted and ignored
    #[arg(value_name = "ARGS", hide = true)]
    rest: Vec<String>,

    /// Echo responses as received instead of formatting them
    #[arg(short = 'd', long)]
    dump: bool,

    /// Base URL for API requests [default: https://api.twitch.tv/]
    #[arg(short = 'H', long, value_parser = parse_host)]
    host: Option<String>,

    /// Client ID to authorize, skips the prompt
    #[arg(short = 'c', long)]
    client_id: Option<String>,

    /// Token type to create (`app` or `user`), skips the prompt
    #[arg(short = 't', long)]
    token_type: Option<String>,

    /// HTTP method [default: GET]
    #[arg(short = 'X', long, value_parser = parse_method)]
    method: Option<String>,
}

impl From<Flags> for Options {
    fn from(flags: Flags) -> Self {
        Options {
            dump: flags.dump,
            command: flags.command,
            host: flags.host.unwrap_or_else(|| DEFAULT_HOST.to_string()),
            client_id: flags.client_id.unwrap_or_default(),
            token_type: flags.token_type.unwrap_or_default(),
            method: flags.method.unwrap_or_else(|| DEFAULT_METHOD.to_string()),
        }
    }
}

/// [`FlagParser`] backed by clap. Unknown flags and malformed values are
/// reported as [`CliError::InvalidArgument`](crate::error::CliError).
#[derive(Debug, Default, Clone, Copy)]
pub struct ClapFlagParser;

impl FlagParser for ClapFlagParser {
    fn parse<I, T>(&self, tokens: I) -> Result<Options>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let flags = Flags::try_parse_from(tokens)?;
        log::debug!("Parsed flags: {:?}", flags);
        if !flags.rest.is_empty() {
            log::debug!("Ignoring extra arguments: {:?}", flags.rest);
        }
        Ok(flags.into())
    }
}

const METHODS: [Method; 9] = [
    Method::GET,
    Method::POST,
    Method::PUT,
    Method::DELETE,
    Method::PATCH,
    Method::HEAD,
    Method::CONNECT,
    Method::OPTIONS,
    Method::TRACE,
];

// An empty value falls back to the default, same as leaving the flag out.
fn parse_host(raw: &str) -> std::result::Result<String, String> {
    if raw.is_empty() {
        return Ok(DEFAULT_HOST.to_string());
    }
    let url = Url::parse(raw).map_err(|e| format!("`{raw}` is not a valid URL: {e}"))?;
    match url.scheme() {
        "http" | "https" => Ok(raw.to_string()),
        other => Err(format!("unsupported scheme `{other}`, expected http or https")),
    }
}

fn parse_method(raw: &str) -> std::result::Result<String, String> {
    if raw.is_empty() {
        return Ok(DEFAULT_METHOD.to_string());
    }
    let upper = raw.to_ascii_uppercase();
    Method::from_bytes(upper.as_bytes())
        .ok()
        .filter(|m| METHODS.contains(m))
        .map(|m| m.as_str().to_string())
        .ok_or_else(|| {
            format!("`{raw}` is not an HTTP method, expected one of GET, POST, PUT, DELETE, PATCH, HEAD, CONNECT, OPTIONS, TRACE")
        })
}
