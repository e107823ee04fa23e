//! Text console for the address book.

use super::formatter::{Formatter, MESSAGE_TAG_SESSION};
use crate::error::{UiError, UiResult};
use crate::models::Person;
use crate::tagging::TaggingLog;
use std::io::{BufRead, Write};
use tracing::debug;

/// Line-oriented console over any reader/writer pair.
pub struct TextUi<R, W> {
    input: R,
    output: W,
    formatter: Formatter,
}

impl<R: BufRead, W: Write> TextUi<R, W> {
    pub fn new(input: R, output: W, formatter: Formatter) -> Self {
        Self {
            input,
            output,
            formatter,
        }
    }

    pub fn formatter(&self) -> &Formatter {
        &self.formatter
    }

    /// Prompt for a command and read it.
    ///
    /// Blank and comment lines are consumed silently. The accepted line is
    /// echoed back before it is returned, without its line terminator.
    ///
    /// # Errors
    ///
    /// Returns `UiError::EndOfInput` once the input is exhausted.
    pub fn read_command(&mut self) -> UiResult<String> {
        write!(self.output, "{}", self.formatter.command_prompt())?;
        self.output.flush()?;

        let line = loop {
            let line = self.read_line()?;
            if !self.formatter.should_ignore(&line) {
                break line;
            }
            debug!("Ignoring input line {:?}", line);
        };

        let echo = format!("[Command entered:{}]", line);
        self.show_to_user(&[echo.as_str()])?;
        Ok(line)
    }

    fn read_line(&mut self) -> UiResult<String> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(UiError::EndOfInput);
        }
        let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed_len);
        Ok(line)
    }

    pub fn show_welcome_message(&mut self, version: &str, storage_file: &str) -> UiResult<()> {
        let lines = self.formatter.welcome_message(version, storage_file);
        self.show_lines(&lines)
    }

    pub fn show_goodbye_message(&mut self) -> UiResult<()> {
        let lines = self.formatter.goodbye_message();
        self.show_lines(&lines)
    }

    pub fn show_init_failed_message(&mut self) -> UiResult<()> {
        let lines = self.formatter.init_failed_message();
        self.show_lines(&lines)
    }

    /// Show each message on its own prefixed line(s).
    pub fn show_to_user(&mut self, messages: &[&str]) -> UiResult<()> {
        for message in messages {
            writeln!(self.output, "{}", self.formatter.formatted_message(message))?;
        }
        Ok(())
    }

    fn show_lines(&mut self, lines: &[String]) -> UiResult<()> {
        let refs: Vec<&str> = lines.iter().map(String::as_str).collect();
        self.show_to_user(&refs)
    }

    /// Show the outcome of a command: the relevant persons, if any, then the
    /// feedback and a divider.
    pub fn show_result_to_user(
        &mut self,
        feedback: &str,
        persons: Option<&[Person]>,
    ) -> UiResult<()> {
        if let Some(persons) = persons {
            self.show_person_list_view(persons)?;
        }
        self.show_to_user(&[feedback, Formatter::DIVIDER])
    }

    /// Show persons as an indexed list with private details hidden.
    pub fn show_person_list_view(&mut self, persons: &[Person]) -> UiResult<()> {
        let formatted: Vec<String> = persons
            .iter()
            .map(|p| self.formatter.person_text_hide_private(p))
            .collect();
        let list = self.formatter.indexed_list(&formatted);
        self.show_to_user(&[list.as_str()])
    }

    /// Show every tag change recorded during the session, in order.
    pub fn show_tag_session(&mut self, log: &TaggingLog) -> UiResult<()> {
        if log.is_empty() {
            return Ok(());
        }
        let summary = log.summary();
        let list = self.formatter.indexed_list(&summary);
        self.show_to_user(&[MESSAGE_TAG_SESSION, list.as_str()])
    }

    /// Give back the underlying reader and writer.
    pub fn into_parts(self) -> (R, W) {
        (self.input, self.output)
    }
}
