//! Main logger implementation

use super::{
    formatter::Formatter, log_level::LogLevel, log_record::LogRecord, metrics::LoggerMetrics,
    output::Output,
};
use parking_lot::Mutex;
use std::fmt::Display;
use std::io::Write;
use std::panic::{self, AssertUnwindSafe, Location};
use std::sync::Arc;

/// Fan-out logger with per-output thresholds.
///
/// Every call runs on the calling thread. A single mutex guards the output
/// list and the whole dispatch of one message, so writes from concurrent
/// calls never interleave on a sink. A slow sink therefore stalls every other
/// caller of the same logger.
pub struct Logger {
    outputs: Mutex<Vec<Output>>,
    metrics: LoggerMetrics,
}

impl Logger {
    #[must_use]
    pub fn new() -> Self {
        Self {
            outputs: Mutex::new(Vec::new()),
            metrics: LoggerMetrics::new(),
        }
    }

    /// Register an output receiving every message at `min_level` or above.
    ///
    /// Outputs are dispatched in registration order. There is no way to
    /// remove or change an output once added.
    pub fn add_output(
        &self,
        sink: impl Write + Send + 'static,
        min_level: LogLevel,
        formatter: Arc<dyn Formatter>,
    ) {
        self.outputs
            .lock()
            .push(Output::new(sink, min_level, formatter));
    }

    pub fn output_count(&self) -> usize {
        self.outputs.lock().len()
    }

    /// Write `message` verbatim (no terminator added) to every output whose
    /// threshold it meets.
    ///
    /// Write errors are discarded and a panicking sink or formatter only
    /// affects its own output; nothing is reported back to the caller.
    /// Each write is attempted once: an `Interrupted` error counts as a
    /// failed write like any other.
    ///
    /// A contained panic still runs the process panic hook, so with the
    /// default hook its message appears on stderr every time it happens.
    #[track_caller]
    pub fn log(&self, level: LogLevel, message: impl AsRef<str>) {
        let record = LogRecord::new(level, message.as_ref()).with_location(Location::caller());
        self.dispatch(&record);
    }

    fn dispatch(&self, record: &LogRecord<'_>) {
        self.metrics.record_call();

        let mut outputs = self.outputs.lock();
        for output in outputs.iter_mut() {
            if !output.accepts(record.level()) {
                continue;
            }

            let result = panic::catch_unwind(AssertUnwindSafe(|| output.emit(record)));
            match result {
                Ok(Ok(())) => self.metrics.record_written(),
                Ok(Err(_)) | Err(_) => self.metrics.record_failed(),
            }
        }
    }

    /// Render `args`, append a line terminator and log the result
    #[track_caller]
    pub fn logf(&self, level: LogLevel, args: impl Display) {
        self.log(level, format!("{}\n", args));
    }

    #[inline]
    #[track_caller]
    pub fn trace(&self, args: impl Display) {
        self.logf(LogLevel::TRACE, args);
    }

    #[inline]
    #[track_caller]
    pub fn debug(&self, args: impl Display) {
        self.logf(LogLevel::DEBUG, args);
    }

    #[inline]
    #[track_caller]
    pub fn info(&self, args: impl Display) {
        self.logf(LogLevel::INFO, args);
    }

    #[inline]
    #[track_caller]
    pub fn warn(&self, args: impl Display) {
        self.logf(LogLevel::WARNING, args);
    }

    #[inline]
    #[track_caller]
    pub fn error(&self, args: impl Display) {
        self.logf(LogLevel::ERROR, args);
    }

    /// Log at [`LogLevel::FATAL`].
    ///
    /// This does **not** terminate the process; the name only describes the
    /// severity.
    #[inline]
    #[track_caller]
    pub fn fatal(&self, args: impl Display) {
        self.logf(LogLevel::FATAL, args);
    }

    /// Delivery counters for this logger
    ///
    /// # Example
    ///
    /// ```
    /// use leveled_logger::{Logger, LogLevel, StdFormatter};
    /// use std::sync::Arc;
    ///
    /// let logger = Logger::new();
    /// logger.add_output(std::io::sink(), LogLevel::INFO, Arc::new(StdFormatter::new()));
    /// logger.info("started");
    ///
    /// assert_eq!(logger.metrics().writes(), 1);
    /// assert_eq!(logger.metrics().failed_writes(), 0);
    /// ```
    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for constructing Logger with a fluent API
///
/// # Example
/// ```
/// use leveled_logger::prelude::*;
/// use std::sync::Arc;
///
/// let console = Arc::new(StdFormatter::new().with_flags(FormatFlags::TIME));
/// let logger = Logger::builder()
///     .output(std::io::stdout(), LogLevel::INFO, console.clone())
///     .output(std::io::stderr(), LogLevel::ERROR, console)
///     .build();
///
/// assert_eq!(logger.output_count(), 2);
/// ```
#[derive(Default)]
pub struct LoggerBuilder {
    outputs: Vec<Output>,
}

impl LoggerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an output; outputs keep the order they are added in
    #[must_use = "builder methods return a new value"]
    pub fn output(
        mut self,
        sink: impl Write + Send + 'static,
        min_level: LogLevel,
        formatter: Arc<dyn Formatter>,
    ) -> Self {
        self.outputs.push(Output::new(sink, min_level, formatter));
        self
    }

    /// Build the Logger
    pub fn build(self) -> Logger {
        Logger {
            outputs: Mutex::new(self.outputs),
            metrics: LoggerMetrics::new(),
        }
    }
}

impl Logger {
    /// Create a builder for Logger
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sinks::SharedBuffer;
    use std::io;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn message_only() -> Arc<dyn Formatter> {
        Arc::new(|record: &LogRecord<'_>| record.message().as_bytes().to_vec())
    }

    /// Sink that appends its tag to a shared journal on every write
    struct TaggedSink {
        tag: &'static str,
        journal: Arc<parking_lot::Mutex<Vec<&'static str>>>,
    }

    impl Write for TaggedSink {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.journal.lock().push(self.tag);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    struct FailingSink;

    impl Write for FailingSink {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "sink closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    /// Sink that counts its write calls and always reports `Interrupted`
    struct InterruptedSink {
        calls: Arc<AtomicUsize>,
    }

    impl Write for InterruptedSink {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Err(io::Error::from(io::ErrorKind::Interrupted))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    struct PanickingSink;

    impl Write for PanickingSink {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            panic!("sink exploded");
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_new_logger_is_empty() {
        let logger = Logger::new();
        assert_eq!(logger.output_count(), 0);
        logger.info("nobody listens");
        assert_eq!(logger.metrics().total_calls(), 1);
        assert_eq!(logger.metrics().writes(), 0);
    }

    #[test]
    fn test_threshold_filtering() {
        let logger = Logger::new();
        let buffer = SharedBuffer::new();
        logger.add_output(buffer.clone(), LogLevel::WARNING, message_only());

        logger.debug("hidden");
        logger.info("hidden");
        logger.warn("shown");
        logger.error(format_args!("code {}", 500));

        assert_eq!(buffer.contents_string(), "shown\ncode 500\n");
    }

    #[test]
    fn test_dispatch_follows_registration_order() {
        let journal = Arc::new(parking_lot::Mutex::new(Vec::new()));
        let logger = Logger::new();
        for tag in ["first", "second", "third"] {
            let sink = TaggedSink {
                tag,
                journal: Arc::clone(&journal),
            };
            logger.add_output(sink, LogLevel::TRACE, message_only());
        }

        logger.info("once");

        assert_eq!(*journal.lock(), vec!["first", "second", "third"]);
    }

    #[test]
    fn test_log_does_not_append_terminator() {
        let logger = Logger::new();
        let buffer = SharedBuffer::new();
        logger.add_output(buffer.clone(), LogLevel::TRACE, message_only());

        logger.log(LogLevel::INFO, "raw");
        logger.logf(LogLevel::INFO, "formatted");

        assert_eq!(buffer.contents_string(), "rawformatted\n");
    }

    #[test]
    fn test_failing_sink_does_not_block_others() {
        let logger = Logger::new();
        let buffer = SharedBuffer::new();
        logger.add_output(FailingSink, LogLevel::TRACE, message_only());
        logger.add_output(buffer.clone(), LogLevel::TRACE, message_only());

        logger.error("still delivered");

        assert_eq!(buffer.contents_string(), "still delivered\n");
        assert_eq!(logger.metrics().failed_writes(), 1);
        assert_eq!(logger.metrics().writes(), 1);
    }

    #[test]
    fn test_interrupted_write_is_not_retried() {
        let calls = Arc::new(AtomicUsize::new(0));
        let logger = Logger::new();
        let buffer = SharedBuffer::new();
        logger.add_output(
            InterruptedSink {
                calls: Arc::clone(&calls),
            },
            LogLevel::TRACE,
            message_only(),
        );
        logger.add_output(buffer.clone(), LogLevel::TRACE, message_only());

        logger.info("one call");

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(logger.metrics().failed_writes(), 1);
        assert_eq!(logger.metrics().writes(), 1);
        assert_eq!(buffer.contents_string(), "one call\n");
    }

    #[test]
    fn test_panicking_sink_is_contained() {
        let logger = Logger::new();
        let buffer = SharedBuffer::new();
        logger.add_output(PanickingSink, LogLevel::TRACE, message_only());
        logger.add_output(buffer.clone(), LogLevel::TRACE, message_only());

        logger.info("first");
        // Lock must have been released after the panic
        logger.info("second");

        assert_eq!(buffer.contents_string(), "first\nsecond\n");
        assert_eq!(logger.metrics().failed_writes(), 2);
    }

    #[test]
    fn test_fatal_does_not_terminate() {
        let logger = Logger::new();
        let buffer = SharedBuffer::new();
        logger.add_output(buffer.clone(), LogLevel::FATAL, message_only());

        logger.error("not fatal enough");
        logger.fatal("still running");

        assert_eq!(buffer.contents_string(), "still running\n");
    }

    #[test]
    fn test_call_site_is_callers_location() {
        let logger = Logger::new();
        let buffer = SharedBuffer::new();
        let formatter: Arc<dyn Formatter> = Arc::new(|record: &LogRecord<'_>| {
            record.caller(true).unwrap_or_default().into_bytes()
        });
        logger.add_output(buffer.clone(), LogLevel::TRACE, formatter);

        let line = line!() + 1;
        logger.info("where am i");

        assert_eq!(buffer.contents_string(), format!("logger.rs:{}", line));
    }

    #[test]
    fn test_builder_preserves_order() {
        let journal = Arc::new(parking_lot::Mutex::new(Vec::new()));
        let sink = |tag| TaggedSink {
            tag,
            journal: Arc::clone(&journal),
        };
        let logger = Logger::builder()
            .output(sink("a"), LogLevel::TRACE, message_only())
            .output(sink("b"), LogLevel::ERROR, message_only())
            .output(sink("c"), LogLevel::TRACE, message_only())
            .build();

        logger.info("x");
        logger.error("y");

        assert_eq!(*journal.lock(), vec!["a", "c", "a", "b", "c"]);
    }
}
