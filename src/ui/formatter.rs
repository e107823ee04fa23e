//! Formatter: turns validated data into console text.
//!
//! Nothing here validates. Private fields are replaced by the configured
//! placeholder; everything else is shown as its canonical text.

use crate::domain::Printable;
use crate::models::Person;
use once_cell::sync::Lazy;
use regex::Regex;

/// Comment lines are silently consumed when reading user input.
static COMMENT_LINE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^#.*$").expect("Failed to compile comment line regex"));

pub const MESSAGE_WELCOME: &str = "Welcome to your Address Book!";
pub const MESSAGE_PROGRAM_LAUNCH_ARGS_USAGE: &str =
    "Set ADDRESSBOOK_STORAGE_FILE to use a different storage file.";
pub const MESSAGE_USING_STORAGE_FILE: &str = "Using storage file : ";
pub const MESSAGE_GOODBYE: &str = "Exiting Address Book... Good bye!";
pub const MESSAGE_INIT_FAILED: &str = "Failed to initialise address book application. Exiting...";
pub const MESSAGE_TAG_SESSION: &str = "Tags changed this session:";

/// Formats text for the console.
#[derive(Debug, Clone)]
pub struct Formatter {
    private_placeholder: String,
}

impl Formatter {
    /// A decorative prefix added to the beginning of lines printed by the address book.
    pub const LINE_PREFIX: &'static str = "|| ";

    pub const DIVIDER: &'static str = "===================================================";

    /// Offset required to convert between 1-indexing and 0-indexing.
    pub const DISPLAYED_INDEX_OFFSET: usize = 1;

    pub fn new(private_placeholder: impl Into<String>) -> Self {
        Self {
            private_placeholder: private_placeholder.into(),
        }
    }

    pub fn private_placeholder(&self) -> &str {
        &self.private_placeholder
    }

    pub fn command_prompt(&self) -> String {
        format!("{}Enter command: ", Self::LINE_PREFIX)
    }

    /// True if the raw input line is blank or a comment.
    pub fn should_ignore(&self, raw_input_line: &str) -> bool {
        raw_input_line.trim().is_empty() || self.is_comment_line(raw_input_line)
    }

    pub fn is_comment_line(&self, raw_input_line: &str) -> bool {
        COMMENT_LINE_REGEX.is_match(raw_input_line.trim())
    }

    pub fn welcome_message(&self, version: &str, storage_file: &str) -> Vec<String> {
        vec![
            Self::DIVIDER.to_string(),
            Self::DIVIDER.to_string(),
            MESSAGE_WELCOME.to_string(),
            version.to_string(),
            MESSAGE_PROGRAM_LAUNCH_ARGS_USAGE.to_string(),
            format!("{}{}", MESSAGE_USING_STORAGE_FILE, storage_file),
            Self::DIVIDER.to_string(),
        ]
    }

    pub fn goodbye_message(&self) -> Vec<String> {
        vec![
            MESSAGE_GOODBYE.to_string(),
            Self::DIVIDER.to_string(),
            Self::DIVIDER.to_string(),
        ]
    }

    pub fn init_failed_message(&self) -> Vec<String> {
        vec![
            MESSAGE_INIT_FAILED.to_string(),
            Self::DIVIDER.to_string(),
            Self::DIVIDER.to_string(),
        ]
    }

    /// Prefix every line of `message` with [`Self::LINE_PREFIX`].
    pub fn formatted_message(&self, message: &str) -> String {
        message
            .split('\n')
            .map(|line| format!("{}{}", Self::LINE_PREFIX, line))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Format items as a 1-based indexed list, one item per line.
    pub fn indexed_list<S: AsRef<str>>(&self, items: &[S]) -> String {
        let mut formatted = String::new();
        for (i, item) in items.iter().enumerate() {
            formatted.push_str(&format!(
                "\t{}. {}\n",
                i + Self::DISPLAYED_INDEX_OFFSET,
                item.as_ref()
            ));
        }
        formatted
    }

    /// `"<label>: <value>"`, or the placeholder in place of the value if private.
    pub fn field_text(&self, field: &dyn Printable) -> String {
        if field.is_private() {
            format!("{}: {}", field.label(), self.private_placeholder)
        } else {
            field.printable_string()
        }
    }

    /// A one-line description of `person` with private fields hidden.
    pub fn person_text_hide_private(&self, person: &Person) -> String {
        let mut text = person.name().to_string();
        for detail in person.details() {
            text.push(' ');
            text.push_str(&self.field_text(detail));
        }
        text.push_str(" Tags: ");
        for tag in person.tags() {
            text.push_str(&tag.bracketed());
        }
        text
    }
}

impl Default for Formatter {
    fn default() -> Self {
        Self::new(crate::config::Config::DEFAULT_PRIVATE_PLACEHOLDER)
    }
}
