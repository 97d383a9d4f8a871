// The options record shared by every stage of the CLI.
// It is built once from the command line, filled in by the resolver and then
// handed to whatever executes the request.

use serde::Serialize;

/// Base URL used when `--host` is not given.
pub const DEFAULT_HOST: &str = "https://api.twitch.tv/";

/// HTTP method used when `--method` is not given.
pub const DEFAULT_METHOD: &str = "GET";

/// Fully defaulted invocation parameters. Empty strings mean "unset" for
/// `client_id` and `token_type`.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Options {
    pub dump: bool,
    pub command: String,
    pub host: String,
    pub client_id: String,
    pub token_type: String,
    pub method: String,
}

impl Options {
    /// Record for `command` with every flag at its default value.
    pub fn new(command: impl Into<String>) -> Self {
        Options {
            dump: false,
            command: command.into(),
            host: DEFAULT_HOST.to_string(),
            client_id: String::new(),
            token_type: String::new(),
            method: DEFAULT_METHOD.to_string(),
        }
    }

    /// The token type, if `token_type` holds one of the accepted values.
    pub fn token_type(&self) -> Option<TokenType> {
        TokenType::from_value(&self.token_type)
    }

    /// Format the record back into command-line tokens (without the program
    /// name). Empty client ID and token type are left out so they stay unset
    /// when parsed again.
    pub fn to_args(&self) -> Vec<String> {
        let mut args = vec![self.command.clone()];
        if self.dump {
            args.push("--dump".to_string());
        }
        args.push(format!("--host={}", self.host));
        if !self.client_id.is_empty() {
            args.push(format!("--client-id={}", self.client_id));
        }
        if !self.token_type.is_empty() {
            args.push(format!("--token-type={}", self.token_type));
        }
        args.push(format!("--method={}", self.method));
        args
    }
}

/// Kind of access token requested by `authorize`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenType {
    App,
    User,
}

impl TokenType {
    pub const ALL: [TokenType; 2] = [TokenType::App, TokenType::User];

    /// Value stored in `Options::token_type`.
    pub fn value(self) -> &'static str {
        match self {
            TokenType::App => "app",
            TokenType::User => "user",
        }
    }

    /// Label shown in the selection prompt.
    pub fn label(self) -> &'static str {
        match self {
            TokenType::App => "Application Access Token",
            TokenType::User => "User Access Token",
        }
    }

    /// Exact match on the stored value; anything else is not a token type.
    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.value() == value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_applies_defaults() {
        let opts = Options::new("accounts");
        assert!(!opts.dump);
        assert_eq!(opts.command, "accounts");
        assert_eq!(opts.host, "https://api.twitch.tv/");
        assert_eq!(opts.client_id, "");
        assert_eq!(opts.token_type, "");
        assert_eq!(opts.method, "GET");
    }

    #[test]
    fn token_type_only_matches_exact_values() {
        assert_eq!(TokenType::from_value("app"), Some(TokenType::App));
        assert_eq!(TokenType::from_value("user"), Some(TokenType::User));
        assert_eq!(TokenType::from_value("User"), None);
        assert_eq!(TokenType::from_value(""), None);
    }

    #[test]
    fn to_args_skips_unset_fields() {
        let opts = Options::new("users");
        assert_eq!(
            opts.to_args(),
            vec!["users", "--host=https://api.twitch.tv/", "--method=GET"]
        );
    }

    #[test]
    fn serializes_as_flat_record() {
        let mut opts = Options::new("authorize");
        opts.client_id = "abc123".into();
        let json = serde_json::to_value(&opts).unwrap();
        assert_eq!(json["client_id"], "abc123");
        assert_eq!(json["token_type"], "");
        assert_eq!(json["dump"], false);
        assert_eq!(json.as_object().unwrap().len(), 6);
    }
}
