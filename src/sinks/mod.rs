//! Sink implementations
//!
//! Any `std::io::Write + Send + 'static` value is a sink; these are the ones
//! the crate ships.

#[cfg(feature = "file")]
pub mod file;
pub mod memory;

#[cfg(feature = "file")]
pub use file::FileSink;
pub use memory::SharedBuffer;
