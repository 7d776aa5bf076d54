//! Log record handed to formatters

use super::log_level::LogLevel;
use std::panic::Location;

/// A single message on its way to an output.
///
/// The message is already fully rendered; formatters only decorate it.
#[derive(Debug, Clone, Copy)]
pub struct LogRecord<'a> {
    level: LogLevel,
    message: &'a str,
    location: Option<&'static Location<'static>>,
}

impl<'a> LogRecord<'a> {
    /// Create a record without call-site information
    pub fn new(level: LogLevel, message: &'a str) -> Self {
        Self {
            level,
            message,
            location: None,
        }
    }

    pub fn with_location(mut self, location: &'static Location<'static>) -> Self {
        self.location = Some(location);
        self
    }

    pub fn level(&self) -> LogLevel {
        self.level
    }

    pub fn message(&self) -> &'a str {
        self.message
    }

    /// Source location of the logging call, if known
    pub fn location(&self) -> Option<&'static Location<'static>> {
        self.location
    }

    /// `file:line` of the logging call.
    ///
    /// With `short` set, everything up to and including the last path
    /// separator is dropped. Returns `None` when no location was captured.
    pub fn caller(&self, short: bool) -> Option<String> {
        self.location.map(|loc| {
            let file = loc.file();
            let file = if short {
                file.rsplit(['/', '\\']).next().unwrap_or(file)
            } else {
                file
            };
            format!("{}:{}", file, loc.line())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_without_location() {
        let record = LogRecord::new(LogLevel::INFO, "hello\n");
        assert_eq!(record.level(), LogLevel::INFO);
        assert_eq!(record.message(), "hello\n");
        assert!(record.location().is_none());
        assert!(record.caller(true).is_none());
    }

    #[test]
    fn test_caller_long_and_short() {
        let here = Location::caller();
        let record = LogRecord::new(LogLevel::DEBUG, "x").with_location(here);

        let long = record.caller(false).unwrap();
        assert_eq!(long, format!("{}:{}", here.file(), here.line()));

        let short = record.caller(true).unwrap();
        assert_eq!(short, format!("log_record.rs:{}", here.line()));
    }
}
