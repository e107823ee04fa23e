//! Address Book - Main entry point
//!
//! Runs the text console. Command handling lives outside this crate; the
//! console here reads commands until `exit` or end of input.

use addressbook::{Config, Formatter, TaggingLog, TextUi, UiError};
use anyhow::Result;
use std::io;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

const VERSION: &str = concat!("AddressBook Level 1 - Version ", env!("CARGO_PKG_VERSION"));
const COMMAND_EXIT: &str = "exit";

fn main() -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();

    // Load configuration before logging so LOG_LEVEL can apply
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            let mut ui = TextUi::new(stdin.lock(), stdout.lock(), Formatter::default());
            let message = e.to_string();
            ui.show_to_user(&[message.as_str()])?;
            ui.show_init_failed_message()?;
            return Err(e.into());
        }
    };

    // Initialize logging (stderr only to avoid mixing with console output)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_str()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!("Configuration loaded successfully");

    let formatter = Formatter::new(config.private_placeholder.clone());
    let mut ui = TextUi::new(stdin.lock(), stdout.lock(), formatter);
    ui.show_welcome_message(VERSION, &config.storage_file)?;

    // Tag changes made during this session, reported before exit
    let session_log = TaggingLog::new();

    loop {
        let command = match ui.read_command() {
            Ok(command) => command,
            Err(UiError::EndOfInput) => {
                info!("Input closed");
                break;
            }
            Err(e) => {
                error!("Failed to read command: {}", e);
                return Err(e.into());
            }
        };

        if command.trim() == COMMAND_EXIT {
            break;
        }

        let feedback = format!("Unknown command: {}", command.trim());
        ui.show_result_to_user(&feedback, None)?;
    }

    ui.show_tag_session(&session_log)?;
    ui.show_goodbye_message()?;
    info!(tag_changes = session_log.len(), "Address book shutdown complete");
    Ok(())
}
