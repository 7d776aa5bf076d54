//! Log level definitions
//!
//! A level is a plain `u8` severity code. The canonical levels are spaced ten
//! apart so intermediate levels can be introduced later without renumbering;
//! any other code is still a valid level and filters by its numeric value.

use super::error::{LoggerError, Result};
use colored::Color;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LogLevel(u8);

/// Canonical display names, used for both parsing and rendering
pub const LEVEL_NAMES: [(LogLevel, &str); 6] = [
    (LogLevel::TRACE, "TRACE"),
    (LogLevel::DEBUG, "DEBUG"),
    (LogLevel::INFO, "INFO"),
    (LogLevel::WARNING, "WARN"),
    (LogLevel::ERROR, "ERROR"),
    (LogLevel::FATAL, "FATAL"),
];

const ANSI_BOLD: &str = "1";
const ANSI_OFF: &str = "0";

fn ansi_escape(codes: &[&str], text: &str) -> String {
    let mut out = String::new();
    for code in codes {
        out.push_str("\x1b[");
        out.push_str(code);
        out.push('m');
    }
    out.push_str(text);
    out.push_str("\x1b[");
    out.push_str(ANSI_OFF);
    out.push('m');
    out
}

/// Built from raw SGR codes rather than `Colorize`, whose output depends on
/// terminal detection and environment variables.
static COLORED_NAMES: LazyLock<Vec<(LogLevel, String)>> = LazyLock::new(|| {
    LEVEL_NAMES
        .iter()
        .map(|&(level, name)| {
            let colored = match level {
                LogLevel::INFO => ansi_escape(&[&*Color::Magenta.to_fg_str()], name),
                LogLevel::WARNING => ansi_escape(&[&*Color::Yellow.to_fg_str()], name),
                LogLevel::ERROR => ansi_escape(&[&*Color::Red.to_fg_str()], name),
                LogLevel::FATAL => ansi_escape(&[&*Color::Red.to_fg_str(), ANSI_BOLD], name),
                _ => name.to_string(),
            };
            (level, colored)
        })
        .collect()
});

impl LogLevel {
    pub const TRACE: LogLevel = LogLevel(0);
    pub const DEBUG: LogLevel = LogLevel(10);
    pub const INFO: LogLevel = LogLevel(20);
    pub const WARNING: LogLevel = LogLevel(30);
    pub const ERROR: LogLevel = LogLevel(40);
    pub const FATAL: LogLevel = LogLevel(50);

    #[must_use]
    pub const fn new(code: u8) -> Self {
        LogLevel(code)
    }

    #[must_use]
    pub const fn as_u8(self) -> u8 {
        self.0
    }

    /// Canonical name, or `None` for codes outside the name table
    pub fn name(self) -> Option<&'static str> {
        LEVEL_NAMES
            .iter()
            .find(|(level, _)| *level == self)
            .map(|(_, name)| *name)
    }

    /// Canonical name wrapped in ANSI color sequences.
    ///
    /// Trace and Debug come back uncolored; non-canonical codes return `None`.
    pub fn colored_name(self) -> Option<&'static str> {
        COLORED_NAMES
            .iter()
            .find(|(level, _)| *level == self)
            .map(|(_, name)| name.as_str())
    }

    pub fn is_canonical(self) -> bool {
        self.name().is_some()
    }

    /// Look up a level by its exact canonical name.
    ///
    /// On failure the returned [`LoggerError::InvalidLevel`] carries
    /// [`LogLevel::DEBUG`] as a fallback.
    pub fn parse(name: &str) -> Result<Self> {
        if name.is_empty() {
            return Err(LoggerError::invalid_level(name));
        }
        LEVEL_NAMES
            .iter()
            .find(|(_, candidate)| *candidate == name)
            .map(|(level, _)| *level)
            .ok_or_else(|| LoggerError::invalid_level(name))
    }

    /// Like [`LogLevel::parse`], but always yields a usable level alongside the error
    ///
    /// ```
    /// use leveled_logger::LogLevel;
    ///
    /// let (level, err) = LogLevel::parse_with_fallback("LOUD");
    /// assert_eq!(level, LogLevel::DEBUG);
    /// assert!(err.is_some());
    /// ```
    pub fn parse_with_fallback(name: &str) -> (Self, Option<LoggerError>) {
        match Self::parse(name) {
            Ok(level) => (level, None),
            Err(err) => (err.fallback_level().unwrap_or(LogLevel::DEBUG), Some(err)),
        }
    }
}

impl Default for LogLevel {
    fn default() -> Self {
        LogLevel::DEBUG
    }
}

impl From<u8> for LogLevel {
    fn from(code: u8) -> Self {
        LogLevel(code)
    }
}

impl From<LogLevel> for u8 {
    fn from(level: LogLevel) -> Self {
        level.0
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => f.write_str(name),
            None => write!(f, "{}", self.0),
        }
    }
}

impl FromStr for LogLevel {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
