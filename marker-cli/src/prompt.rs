//! Credential prompt
//!
//! Asks the operator for the JIRA URL, username and password. Each answer
//! is re-asked until it validates; only an aborted session (EOF) or a
//! terminal I/O failure ends the prompt with an error.

use colored::*;
use marker_core::domain::credentials::Credentials;
use reqwest::Url;
use std::io::{self, BufRead, Write};
use thiserror::Error;

/// Errors that end the prompt
#[derive(Debug, Error)]
pub enum PromptError {
    /// The operator closed the input before answering
    #[error("Prompt aborted before `{field}` was answered")]
    Aborted { field: &'static str },

    /// Reading from or writing to the terminal failed
    #[error("Terminal I/O failed: {0}")]
    Io(#[from] io::Error),
}

/// A single field request
pub struct Question {
    /// Field name, used in errors
    pub name: &'static str,
    /// Text shown to the operator
    pub message: &'static str,
    /// Accepts or rejects an answer
    pub validate: fn(&str) -> bool,
    /// Shown when `validate` rejects an answer
    pub hint: &'static str,
}

/// Provider of interactive answers
pub trait Prompter {
    /// Ask `question` once
    ///
    /// Returns `Ok(None)` when the operator aborts the session.
    fn ask(&mut self, question: &Question) -> io::Result<Option<String>>;

    /// Tell the operator an answer was rejected
    fn reject(&mut self, question: &Question) -> io::Result<()>;
}

/// Prompter reading answers from stdin and writing prompts to stderr
///
/// Stdout is left to the run's progress output.
pub struct StdioPrompter<R> {
    input: R,
}

impl StdioPrompter<io::StdinLock<'static>> {
    pub fn new() -> Self {
        Self {
            input: io::stdin().lock(),
        }
    }
}

#[cfg(test)]
impl<R: BufRead> StdioPrompter<R> {
    pub fn with_input(input: R) -> Self {
        Self { input }
    }
}

impl<R: BufRead> Prompter for StdioPrompter<R> {
    fn ask(&mut self, question: &Question) -> io::Result<Option<String>> {
        let mut stderr = io::stderr();
        write!(stderr, "{} {}: ", "?".green().bold(), question.message.bold())?;
        stderr.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn reject(&mut self, question: &Question) -> io::Result<()> {
        writeln!(io::stderr(), "{} {}", ">>".red(), question.hint.yellow())
    }
}

/// The JIRA URL question
pub const SERVICE_URL: Question = Question {
    name: "service_url",
    message: "JIRA URL",
    validate: is_valid_service_url,
    hint: "Enter an https:// URL with a host, e.g. https://jira.example.com",
};

/// The username question
pub const USERNAME: Question = Question {
    name: "username",
    message: "username",
    validate: is_non_empty,
    hint: "Username is required",
};

/// The password question
pub const PASSWORD: Question = Question {
    name: "password",
    message: "password",
    validate: is_present,
    hint: "Password is required",
};

/// Whether `value` is an `https` URL with a non-empty host
pub fn is_valid_service_url(value: &str) -> bool {
    match Url::parse(value.trim()) {
        Ok(url) => url.scheme() == "https" && url.host_str().is_some_and(|host| !host.is_empty()),
        Err(_) => false,
    }
}

/// Whether `value` has any non-whitespace content
pub fn is_non_empty(value: &str) -> bool {
    !value.trim().is_empty()
}

/// Whether `value` is not the empty string; whitespace counts
pub fn is_present(value: &str) -> bool {
    !value.is_empty()
}

/// Ask `question` until the answer validates
pub fn ask_until_valid(
    prompter: &mut dyn Prompter,
    question: &Question,
) -> Result<String, PromptError> {
    loop {
        let answer = prompter
            .ask(question)?
            .ok_or(PromptError::Aborted {
                field: question.name,
            })?;

        if (question.validate)(&answer) {
            return Ok(answer);
        }

        tracing::debug!(field = question.name, "answer rejected");
        prompter.reject(question)?;
    }
}

/// Collect the three credential fields, in order
///
/// The URL and username are stored trimmed; the password is validated and
/// kept verbatim.
pub fn prompt_credentials(prompter: &mut dyn Prompter) -> Result<Credentials, PromptError> {
    let service_url = ask_until_valid(prompter, &SERVICE_URL)?;
    let username = ask_until_valid(prompter, &USERNAME)?;
    let password = ask_until_valid(prompter, &PASSWORD)?;

    Ok(Credentials::new(
        service_url.trim(),
        username.trim(),
        password,
    ))
}
