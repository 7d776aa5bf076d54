//! Formatter implementations

#[cfg(feature = "json")]
pub mod json;
pub mod standard;

#[cfg(feature = "json")]
pub use json::JsonFormatter;
pub use standard::{FormatFlags, StdFormatter};

pub use crate::core::Formatter;
