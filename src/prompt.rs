// Prompting layer: asks the user for values the command line did not supply.
// The resolver only talks to the `Prompter` trait; `DialoguerPrompter` is the
// terminal implementation and tests substitute a scripted one.

use crate::error::Result;
use dialoguer::{Input, Select};

/// Checks a free-text answer. `Err` carries the message shown to the user,
/// who is then asked again.
pub type Validator<'a> = &'a dyn Fn(&str) -> std::result::Result<(), String>;

/// One entry of a single-choice prompt: the label shown and the value stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Choice<'a> {
    pub label: &'a str,
    pub value: &'a str,
}

/// Collects a single value interactively.
pub trait Prompter {
    /// Ask for free text. Only returns once `validator` accepts the answer.
    fn ask_text(&mut self, prompt: &str, validator: Validator<'_>) -> Result<String>;

    /// Ask the user to pick one of `choices`; returns the chosen `value`.
    fn ask_choice(&mut self, prompt: &str, choices: &[Choice<'_>]) -> Result<String>;
}

/// Rejects an empty client ID.
pub fn client_id_not_blank(input: &str) -> std::result::Result<(), String> {
    if input.is_empty() {
        Err("Client ID must not be blank.".to_string())
    } else {
        Ok(())
    }
}

/// Terminal prompts using `dialoguer`. Blocks until the user answers.
#[derive(Debug, Default)]
pub struct DialoguerPrompter;

impl Prompter for DialoguerPrompter {
    fn ask_text(&mut self, prompt: &str, validator: Validator<'_>) -> Result<String> {
        // `allow_empty` hands blank answers to the validator so the user sees
        // its message instead of a silent re-prompt.
        let answer = Input::<String>::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .validate_with(|input: &String| validator(input.as_str()))
            .interact_text()?;
        Ok(answer)
    }

    fn ask_choice(&mut self, prompt: &str, choices: &[Choice<'_>]) -> Result<String> {
        let labels: Vec<&str> = choices.iter().map(|c| c.label).collect();
        // `Select` is keyboard-driven: arrow keys and Enter.
        let selection = Select::new()
            .with_prompt(prompt)
            .items(&labels)
            .default(0)
            .interact()?;
        Ok(choices[selection].value.to_string())
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use std::collections::VecDeque;

    /// What a [`ScriptedPrompter`] was asked, in order.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum Asked {
        Text(String),
        Choice(String, Vec<String>),
    }

    /// Answers prompts from a fixed script. Text answers rejected by the
    /// validator are recorded and the next scripted answer is tried, the way
    /// a user retypes after seeing the error.
    #[derive(Debug, Default)]
    pub struct ScriptedPrompter {
        answers: VecDeque<String>,
        pub asked: Vec<Asked>,
        pub rejections: Vec<String>,
    }

    impl ScriptedPrompter {
        pub fn new<I, S>(answers: I) -> Self
        where
            I: IntoIterator<Item = S>,
            S: Into<String>,
        {
            ScriptedPrompter {
                answers: answers.into_iter().map(Into::into).collect(),
                ..Default::default()
            }
        }

        fn next_answer(&mut self) -> String {
            self.answers
                .pop_front()
                .expect("prompted more times than scripted")
        }
    }

    impl Prompter for ScriptedPrompter {
        fn ask_text(&mut self, prompt: &str, validator: Validator<'_>) -> Result<String> {
            self.asked.push(Asked::Text(prompt.to_string()));
            loop {
                let answer = self.next_answer();
                match validator(answer.as_str()) {
                    Ok(()) => return Ok(answer),
                    Err(msg) => self.rejections.push(msg),
                }
            }
        }

        /// Scripted choice answers name the label to pick.
        fn ask_choice(&mut self, prompt: &str, choices: &[Choice<'_>]) -> Result<String> {
            self.asked.push(Asked::Choice(
                prompt.to_string(),
                choices.iter().map(|c| c.label.to_string()).collect(),
            ));
            let label = self.next_answer();
            let choice = choices
                .iter()
                .find(|c| c.label == label)
                .unwrap_or_else(|| panic!("no choice labelled {label:?}"));
            Ok(choice.value.to_string())
        }
    }
}
