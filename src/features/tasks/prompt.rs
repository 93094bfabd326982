//! Line prompts used while creating tasks.
//!
//! The [`PromptProvider`] trait is the suspend point of the task-creation
//! flow: it asks the user for one line of text, and the user may cancel.

use std::io::{self, BufRead, Stderr, StdinLock, Write};

use colored::Colorize;

use crate::error::ScheduleError;

/// Typed at a prompt to cancel task creation.
pub const CANCEL_WORD: &str = "отмена";

/// What the user answered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptReply {
    /// A line of text (possibly empty).
    Line(String),
    /// The user cancelled the request.
    Cancelled,
}

/// A request for one line of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptRequest {
    /// Question shown to the user.
    pub message: String,
    /// Previous input that was not understood, quoted back verbatim.
    pub rejected_input: Option<String>,
    /// Sample inputs shown after a rejection.
    pub examples: Vec<String>,
    /// 1-based attempt number.
    pub attempt: u8,
    /// Total attempts allowed.
    pub max_attempts: u8,
}

impl PromptRequest {
    /// A plain question with no retry context.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            rejected_input: None,
            examples: Vec::new(),
            attempt: 1,
            max_attempts: 1,
        }
    }

    /// Whether this request follows a rejected answer.
    #[must_use]
    pub const fn is_retry(&self) -> bool {
        self.rejected_input.is_some()
    }
}

/// Source of user answers.
#[cfg_attr(test, mockall::automock)]
pub trait PromptProvider {
    /// Ask for one line of text.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying channel fails. A user cancel is
    /// not an error; it is reported as [`PromptReply::Cancelled`].
    fn request_line(&mut self, request: &PromptRequest) -> Result<PromptReply, ScheduleError>;
}

/// Prompt reading from a line-based reader and writing to a terminal.
///
/// End of input or the word [`CANCEL_WORD`] cancels.
pub struct TerminalPrompt<R, W> {
    input: R,
    output: W,
}

impl TerminalPrompt<StdinLock<'static>, Stderr> {
    /// Prompt reading stdin. Questions go to stderr so stdout carries only
    /// the command result.
    #[must_use]
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stderr())
    }
}

impl<R: BufRead, W: Write> TerminalPrompt<R, W> {
    /// Prompt over arbitrary streams.
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    fn show(&mut self, request: &PromptRequest) -> io::Result<()> {
        if let Some(rejected) = &request.rejected_input {
            writeln!(
                self.output,
                "  {} «{}»",
                "Не удалось распознать время:".yellow(),
                rejected
            )?;
            if !request.examples.is_empty() {
                writeln!(self.output, "  {}", "Примеры:".dimmed())?;
                for example in &request.examples {
                    writeln!(self.output, "    {example}")?;
                }
            }
        }
        if request.max_attempts > 1 {
            write!(
                self.output,
                "  {} {} ({}/{}): ",
                ">".green(),
                request.message,
                request.attempt,
                request.max_attempts
            )?;
        } else {
            write!(self.output, "  {} {}: ", ">".green(), request.message)?;
        }
        self.output.flush()
    }
}

impl<R: BufRead, W: Write> PromptProvider for TerminalPrompt<R, W> {
    fn request_line(&mut self, request: &PromptRequest) -> Result<PromptReply, ScheduleError> {
        self.show(request)?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(PromptReply::Cancelled);
        }

        let trimmed = line.trim();
        if trimmed.to_lowercase() == CANCEL_WORD {
            return Ok(PromptReply::Cancelled);
        }
        Ok(PromptReply::Line(trimmed.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prompt(input: &str) -> TerminalPrompt<&[u8], Vec<u8>> {
        TerminalPrompt::new(input.as_bytes(), Vec::new())
    }

    #[test]
    fn test_reads_trimmed_line() {
        let mut p = prompt("  14:30  \n");
        let reply = p.request_line(&PromptRequest::new("Время")).unwrap();
        assert_eq!(reply, PromptReply::Line("14:30".to_string()));
    }

    #[test]
    fn test_empty_line_is_not_cancel() {
        let mut p = prompt("\n");
        let reply = p.request_line(&PromptRequest::new("Время")).unwrap();
        assert_eq!(reply, PromptReply::Line(String::new()));
    }

    #[test]
    fn test_end_of_input_cancels() {
        let mut p = prompt("");
        let reply = p.request_line(&PromptRequest::new("Время")).unwrap();
        assert_eq!(reply, PromptReply::Cancelled);
    }

    #[test]
    fn test_cancel_word_cancels() {
        let mut p = prompt("Отмена\n");
        let reply = p.request_line(&PromptRequest::new("Время")).unwrap();
        assert_eq!(reply, PromptReply::Cancelled);
    }

    #[test]
    fn test_retry_shows_rejected_input_and_examples() {
        let mut p = prompt("семь\n");
        let request = PromptRequest {
            message: "Время".to_string(),
            rejected_input: Some("завтра".to_string()),
            examples: vec!["14:30".to_string(), "пол третьего".to_string()],
            attempt: 2,
            max_attempts: 3,
        };
        p.request_line(&request).unwrap();

        let shown = String::from_utf8(p.output).unwrap();
        assert!(shown.contains("«завтра»"));
        assert!(shown.contains("пол третьего"));
        assert!(shown.contains("(2/3)"));
    }
}
