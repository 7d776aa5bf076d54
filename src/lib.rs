//! # Leveled Logger
//!
//! A leveled, multi-output logging library. Each registered output pairs a
//! sink with a minimum level and a formatter; a message is formatted and
//! written, in registration order, to every output whose threshold it meets.
//!
//! ## Features
//!
//! - **Open level scale**: six named levels spaced ten apart, any `u8` is valid
//! - **Per-output thresholds**: route errors to one sink and everything to another
//! - **Pluggable formatters**: standard text, JSON, or any closure
//! - **Thread safe**: one lock per logger, no interleaved writes
//!
//! ```
//! use leveled_logger::prelude::*;
//! use std::sync::Arc;
//!
//! let logger = Logger::new();
//! let errors = SharedBuffer::new();
//! logger.add_output(errors.clone(), LogLevel::WARNING, Arc::new(StdFormatter::new().with_prefix("app")));
//!
//! logger.debug("not recorded");
//! logger.error(format_args!("disk {} full", "/dev/sda1"));
//!
//! assert_eq!(errors.contents_string(), "ERROR app disk /dev/sda1 full\n");
//! ```

pub mod core;
pub mod formatters;
pub mod macros;
pub mod sinks;

pub mod prelude {
    #[cfg(feature = "file")]
    pub use crate::sinks::FileSink;
    #[cfg(feature = "json")]
    pub use crate::formatters::JsonFormatter;
    pub use crate::core::{
        Formatter, LogLevel, LogRecord, Logger, LoggerBuilder, LoggerError, LoggerMetrics, Result,
    };
    pub use crate::formatters::{FormatFlags, StdFormatter};
    pub use crate::sinks::SharedBuffer;
}

pub use crate::core::{
    Formatter, LogLevel, LogRecord, Logger, LoggerBuilder, LoggerError, LoggerMetrics, Output,
    Result, LEVEL_NAMES,
};
#[cfg(feature = "json")]
pub use formatters::JsonFormatter;
pub use formatters::{FormatFlags, StdFormatter};
#[cfg(feature = "file")]
pub use sinks::FileSink;
pub use sinks::SharedBuffer;
