//! JSON formatter
//!
//! Writes each record as a single-line JSON object (JSONL format):
//!
//! ```text
//! {"timestamp":"2025-01-08T10:30:45.123Z","level":"ERROR","level_value":40,"message":"disk full","file":"src/main.rs","line":12}
//! ```

use crate::core::{Formatter, LogRecord};
use chrono::{DateTime, Utc};
use serde_json::{Map, Value};

#[derive(Debug, Clone, Default)]
pub struct JsonFormatter {
    include_location: bool,
}

impl JsonFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `file` and `line` fields when the call site is known
    #[must_use]
    pub fn with_location(mut self, include: bool) -> Self {
        self.include_location = include;
        self
    }

    fn to_value(&self, record: &LogRecord<'_>, timestamp: &DateTime<Utc>) -> Value {
        let mut json_obj = Map::new();

        json_obj.insert(
            "timestamp".to_string(),
            Value::String(timestamp.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string()),
        );
        json_obj.insert(
            "level".to_string(),
            Value::String(record.level().to_string()),
        );
        json_obj.insert(
            "level_value".to_string(),
            Value::Number(record.level().as_u8().into()),
        );

        // The line terminator belongs to the JSONL framing, not the message
        let message = record.message();
        let message = message
            .strip_suffix('\n')
            .map(|m| m.strip_suffix('\r').unwrap_or(m))
            .unwrap_or(message);
        json_obj.insert("message".to_string(), Value::String(message.to_string()));

        if self.include_location {
            if let Some(location) = record.location() {
                json_obj.insert(
                    "file".to_string(),
                    Value::String(location.file().to_string()),
                );
                json_obj.insert("line".to_string(), Value::Number(location.line().into()));
            }
        }

        Value::Object(json_obj)
    }
}

impl Formatter for JsonFormatter {
    fn format(&self, record: &LogRecord<'_>) -> Vec<u8> {
        let value = self.to_value(record, &Utc::now());
        let mut bytes = serde_json::to_vec(&value).unwrap_or_default();
        bytes.push(b'\n');
        bytes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LogLevel;
    use std::panic::Location;

    fn parse(bytes: &[u8]) -> Value {
        let text = std::str::from_utf8(bytes).expect("utf8");
        assert!(text.ends_with('\n'));
        assert_eq!(text.matches('\n').count(), 1, "one object per line");
        serde_json::from_str(text.trim_end()).expect("valid json")
    }

    #[test]
    fn test_json_format() {
        let formatter = JsonFormatter::new();
        let parsed = parse(&formatter.format(&LogRecord::new(LogLevel::ERROR, "disk full\n")));

        assert_eq!(parsed["level"], "ERROR");
        assert_eq!(parsed["level_value"], 40);
        assert_eq!(parsed["message"], "disk full");
        assert!(parsed["timestamp"].as_str().unwrap().ends_with('Z'));
        assert!(parsed.get("file").is_none());
    }

    #[test]
    fn test_unknown_level() {
        let formatter = JsonFormatter::new();
        let parsed = parse(&formatter.format(&LogRecord::new(LogLevel::new(99), "odd")));
        assert_eq!(parsed["level"], "99");
        assert_eq!(parsed["level_value"], 99);
    }

    #[test]
    fn test_embedded_newlines_stay_on_one_line() {
        let formatter = JsonFormatter::new();
        let parsed = parse(&formatter.format(&LogRecord::new(LogLevel::INFO, "a\nb\r\n")));
        assert_eq!(parsed["message"], "a\nb");
    }

    #[test]
    fn test_location_fields() {
        let here = Location::caller();
        let formatter = JsonFormatter::new().with_location(true);
        let record = LogRecord::new(LogLevel::WARNING, "w").with_location(here);
        let parsed = parse(&formatter.format(&record));

        assert_eq!(parsed["file"], here.file());
        assert_eq!(parsed["line"], here.line());
    }
}
