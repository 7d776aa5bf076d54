//! Formatter trait for rendering records into bytes

use super::log_record::LogRecord;

/// Renders a record into the bytes written to a sink.
///
/// Implementations must be total: every level (canonical or not) and every
/// message produces output. A formatter may be shared by several outputs and
/// must not rely on mutable state between calls.
pub trait Formatter: Send + Sync {
    fn format(&self, record: &LogRecord<'_>) -> Vec<u8>;
}

impl<F> Formatter for F
where
    F: Fn(&LogRecord<'_>) -> Vec<u8> + Send + Sync,
{
    fn format(&self, record: &LogRecord<'_>) -> Vec<u8> {
        self(record)
    }
}
