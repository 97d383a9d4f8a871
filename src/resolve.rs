// Interactive resolution of missing options.
// The selected command decides which fields are required; only the ones the
// command line left unset are prompted for, in the order the command lists
// them. Answers are merged without touching values the user already gave.

use crate::command::{Command, Field};
use crate::error::Result;
use crate::options::{Options, TokenType};
use crate::prompt::{client_id_not_blank, Choice, Prompter};

pub const CLIENT_ID_PROMPT: &str = "Enter the Client ID of an application to authorize";
pub const TOKEN_TYPE_PROMPT: &str = "What type of token should be created?";

/// Values collected from the prompts. `None` means the field was not asked.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Answers {
    pub client_id: Option<String>,
    pub token_type: Option<String>,
}

/// Prompt for whatever `options.command` still needs and return the merged
/// record. `options` itself is left untouched.
pub fn resolve(options: &Options, prompter: &mut dyn Prompter) -> Result<Options> {
    let command = Command::from(options.command.as_str());
    log::debug!("Resolving options for {:?}", command);

    let mut answers = Answers::default();
    for field in command.required_fields() {
        match field {
            Field::ClientId if options.client_id.is_empty() => {
                log::debug!("Prompting for client ID");
                answers.client_id = Some(prompter.ask_text(CLIENT_ID_PROMPT, &client_id_not_blank)?);
            }
            Field::TokenType if options.token_type().is_none() => {
                log::debug!("Prompting for token type (given: {:?})", options.token_type);
                let choices: Vec<Choice<'_>> = TokenType::ALL
                    .iter()
                    .map(|t| Choice {
                        label: t.label(),
                        value: t.value(),
                    })
                    .collect();
                answers.token_type = Some(prompter.ask_choice(TOKEN_TYPE_PROMPT, &choices)?);
            }
            _ => {}
        }
    }

    Ok(merge(options, answers))
}

/// Fill unset fields from `answers`. A client ID is unset when empty; a token
/// type is unset unless it is exactly `app` or `user`. Set fields always win.
pub fn merge(options: &Options, answers: Answers) -> Options {
    let client_id = match answers.client_id {
        Some(answer) if options.client_id.is_empty() => answer,
        _ => options.client_id.clone(),
    };
    let token_type = match answers.token_type {
        Some(answer) if options.token_type().is_none() => answer,
        _ => options.token_type.clone(),
    };

    Options {
        client_id,
        token_type,
        ..options.clone()
    }
}
