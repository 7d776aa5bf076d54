//! Registered output: a sink, a minimum level and a formatter

use super::{formatter::Formatter, log_level::LogLevel, log_record::LogRecord};
use std::fmt;
use std::io::{self, Write};
use std::sync::Arc;

pub struct Output {
    sink: Box<dyn Write + Send>,
    min_level: LogLevel,
    formatter: Arc<dyn Formatter>,
}

impl Output {
    pub fn new(
        sink: impl Write + Send + 'static,
        min_level: LogLevel,
        formatter: Arc<dyn Formatter>,
    ) -> Self {
        Self {
            sink: Box::new(sink),
            min_level,
            formatter,
        }
    }

    pub fn min_level(&self) -> LogLevel {
        self.min_level
    }

    /// Whether a message at `level` passes this output's threshold
    #[inline]
    pub fn accepts(&self, level: LogLevel) -> bool {
        self.min_level <= level
    }

    /// Format the record and write it to the sink.
    ///
    /// Short writes are continued until every byte is accepted. The first
    /// error of any kind, `Interrupted` included, ends the attempt.
    pub fn emit(&mut self, record: &LogRecord<'_>) -> io::Result<()> {
        let bytes = self.formatter.format(record);
        let mut remaining = bytes.as_slice();
        while !remaining.is_empty() {
            match self.sink.write(remaining)? {
                0 => return Err(io::Error::from(io::ErrorKind::WriteZero)),
                n => remaining = &remaining[n..],
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Output {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Output")
            .field("min_level", &self.min_level)
            .finish_non_exhaustive()
    }
}
