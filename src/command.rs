// Command selected by the first positional argument.
// Each known command lists the fields it needs before it can run; anything
// that is not a known command is taken to be the API URL to request.

/// A field of [`Options`](crate::options::Options) that can be collected
/// interactively.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    ClientId,
    TokenType,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// List stored accounts.
    Accounts,
    /// Create an access token for an application.
    Authorize,
    /// Store a short name for an API URL.
    Alias,
    /// Request the given API URL.
    Url(String),
}

impl Command {
    /// Fields that must be set before the command runs, in prompt order.
    pub fn required_fields(&self) -> &'static [Field] {
        match self {
            Command::Authorize => &[Field::ClientId, Field::TokenType],
            Command::Accounts | Command::Alias | Command::Url(_) => &[],
        }
    }
}

impl From<&str> for Command {
    fn from(raw: &str) -> Self {
        match raw {
            "accounts" => Command::Accounts,
            "authorize" => Command::Authorize,
            "alias" => Command::Alias,
            url => Command::Url(url.to_string()),
        }
    }
}
