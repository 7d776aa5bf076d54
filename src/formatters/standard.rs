//! Standard text formatter
//!
//! Produces space-separated segments in a fixed order:
//! date, time, level, prefix, caller, message.
//!
//! ```text
//! 2025-1-8 09:05:03 WARN [api] handler.rs:42 slow response
//! ```
//!
//! The date is `YYYY-M-D` with no zero padding; the time is zero-padded.

use crate::core::{Formatter, LogRecord};
use bitflags::bitflags;
use chrono::{Datelike, Local, NaiveDateTime, Timelike, Utc};
use std::borrow::Cow;

bitflags! {
    /// Segments the [`StdFormatter`] adds around the message
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct FormatFlags: u8 {
        /// `YYYY-M-D`
        const DATE = 1;
        /// `HH:MM:SS`
        const TIME = 1 << 1;
        /// `HH:MM:SS.ffffff`, takes precedence over `TIME`
        const MICROSECONDS = 1 << 2;
        /// Full source path and line of the logging call
        const LONG_FILE = 1 << 3;
        /// File name and line of the logging call, takes precedence over `LONG_FILE`
        const SHORT_FILE = 1 << 4;
        /// Use UTC instead of the local time zone
        const UTC = 1 << 5;
        /// Date and time
        const STD = Self::DATE.bits() | Self::TIME.bits();
    }
}

const UNKNOWN_CALLER: &str = "???";

#[derive(Debug, Clone, Default)]
pub struct StdFormatter {
    prefix: String,
    flags: FormatFlags,
    colored: bool,
}

impl StdFormatter {
    /// Formatter with no prefix, no flags and plain level names
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the literal text written after the level name.
    ///
    /// An empty prefix still occupies a segment, so the output then carries
    /// two spaces between the level and what follows.
    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    #[must_use]
    pub fn with_flags(mut self, flags: FormatFlags) -> Self {
        self.flags = flags;
        self
    }

    /// Wrap INFO, WARN, ERROR and FATAL in ANSI color sequences
    #[must_use]
    pub fn colored(mut self, colored: bool) -> Self {
        self.colored = colored;
        self
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn flags(&self) -> FormatFlags {
        self.flags
    }

    pub fn is_colored(&self) -> bool {
        self.colored
    }

    fn now(&self) -> NaiveDateTime {
        if self.flags.contains(FormatFlags::UTC) {
            Utc::now().naive_utc()
        } else {
            Local::now().naive_local()
        }
    }

    fn render(&self, record: &LogRecord<'_>, now: Option<&NaiveDateTime>) -> String {
        let mut segments: Vec<Cow<'_, str>> = Vec::with_capacity(6);

        if let Some(now) = now {
            if self.flags.contains(FormatFlags::DATE) {
                segments.push(format!("{}-{}-{}", now.year(), now.month(), now.day()).into());
            }
            if self.flags.contains(FormatFlags::MICROSECONDS) {
                // Leap seconds report nanos >= 1e9
                let micros = (now.nanosecond() % 1_000_000_000) / 1_000;
                segments.push(
                    format!(
                        "{:02}:{:02}:{:02}.{:06}",
                        now.hour(),
                        now.minute(),
                        now.second(),
                        micros
                    )
                    .into(),
                );
            } else if self.flags.contains(FormatFlags::TIME) {
                segments.push(
                    format!("{:02}:{:02}:{:02}", now.hour(), now.minute(), now.second()).into(),
                );
            }
        }

        let level = record.level();
        let name = if self.colored {
            level.colored_name()
        } else {
            level.name()
        };
        segments.push(match name {
            Some(name) => Cow::Borrowed(name),
            None => Cow::Owned(level.as_u8().to_string()),
        });

        segments.push(Cow::Borrowed(self.prefix.as_str()));

        if self
            .flags
            .intersects(FormatFlags::SHORT_FILE | FormatFlags::LONG_FILE)
        {
            let short = self.flags.contains(FormatFlags::SHORT_FILE);
            segments.push(match record.caller(short) {
                Some(caller) => Cow::Owned(caller),
                None => Cow::Borrowed(UNKNOWN_CALLER),
            });
        }

        segments.push(Cow::Borrowed(record.message()));
        segments.join(" ")
    }
}

impl Formatter for StdFormatter {
    fn format(&self, record: &LogRecord<'_>) -> Vec<u8> {
        let now = self
            .flags
            .intersects(FormatFlags::DATE | FormatFlags::TIME | FormatFlags::MICROSECONDS)
            .then(|| self.now());
        self.render(record, now.as_ref()).into_bytes()
    }
}
