//! Error types for the logger system

use super::log_level::LogLevel;
use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// Level name was empty or did not match any canonical name.
    ///
    /// Always carries a usable fallback level so callers may ignore the error.
    #[error("{}", invalid_level_message(.input))]
    InvalidLevel { input: String, fallback: LogLevel },

    /// File sink could not be opened
    #[error("File sink error for '{}': {source}", .path.display())]
    FileSink {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

fn invalid_level_message(input: &str) -> String {
    if input.is_empty() {
        "level is empty".to_string()
    } else {
        format!("invalid log level '{}'", input)
    }
}

impl LoggerError {
    /// Create an invalid level error with the default fallback (Debug)
    pub fn invalid_level(input: impl Into<String>) -> Self {
        LoggerError::InvalidLevel {
            input: input.into(),
            fallback: LogLevel::DEBUG,
        }
    }

    /// Create a file sink error
    pub fn file_sink(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        LoggerError::FileSink {
            path: path.into(),
            source,
        }
    }

    /// The level a caller may use instead of failing, if this error offers one
    pub fn fallback_level(&self) -> Option<LogLevel> {
        match self {
            LoggerError::InvalidLevel { fallback, .. } => Some(*fallback),
            _ => None,
        }
    }
}
