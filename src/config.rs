//! Configuration loaded from environment variables (and an optional `.env` file).

use crate::error::{AppError, Result};
use std::env;
use std::path::PathBuf;

/// Default file offered by the export/import prompts.
pub const DEFAULT_CONTACTS_FILE: &str = "contacts.txt";

/// Output format of log lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// Runtime settings for the contact manager.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Default filename for export/import (`CONTACTS_FILE`).
    pub contacts_file: PathBuf,
    /// Directory for rolling log files (`CONTACTS_LOG_DIR`). Logs go to stderr when unset.
    pub log_dir: Option<PathBuf>,
    /// Log line format (`CONTACTS_LOG_FORMAT`: `text` or `json`).
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            contacts_file: PathBuf::from(DEFAULT_CONTACTS_FILE),
            log_dir: None,
            log_format: LogFormat::Text,
        }
    }
}

impl Config {
    /// Loads configuration from the environment.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if `CONTACTS_LOG_FORMAT` is neither `text` nor `json`.
    pub fn from_env() -> Result<Self> {
        // A missing .env file is fine.
        dotenv::dotenv().ok();

        let contacts_file = non_empty_var("CONTACTS_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONTACTS_FILE));

        let log_dir = non_empty_var("CONTACTS_LOG_DIR").map(PathBuf::from);

        let log_format = match non_empty_var("CONTACTS_LOG_FORMAT") {
            None => LogFormat::Text,
            Some(value) => match value.to_lowercase().as_str() {
                "text" => LogFormat::Text,
                "json" => LogFormat::Json,
                other => {
                    return Err(AppError::Config(format!(
                        "CONTACTS_LOG_FORMAT must be 'text' or 'json', got '{}'",
                        other
                    )))
                },
            },
        };

        Ok(Self {
            contacts_file,
            log_dir,
            log_format,
        })
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
