//! Core logger types and traits

pub mod error;
pub mod formatter;
pub mod log_level;
pub mod log_record;
pub mod logger;
pub mod metrics;
pub mod output;

pub use error::{LoggerError, Result};
pub use formatter::Formatter;
pub use log_level::{LogLevel, LEVEL_NAMES};
pub use log_record::LogRecord;
pub use logger::{Logger, LoggerBuilder};
pub use metrics::LoggerMetrics;
pub use output::Output;
