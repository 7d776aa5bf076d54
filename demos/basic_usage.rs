//! Basic logger usage example
//!
//! Demonstrates console output with per-output thresholds and different
//! log levels.
//!
//! Run with: cargo run --example basic_usage

use leveled_logger::prelude::*;
use leveled_logger::{info, warn};
use std::sync::Arc;

fn main() -> Result<()> {
    println!("=== Leveled Logger - Basic Usage Example ===\n");

    let logger = Logger::new();

    // Everything to stdout, colored, with time and call site
    let console = StdFormatter::new()
        .with_flags(FormatFlags::TIME | FormatFlags::SHORT_FILE)
        .with_prefix("[demo]")
        .colored(true);
    logger.add_output(std::io::stdout(), LogLevel::TRACE, Arc::new(console));

    // Errors and above also to stderr
    let errors = StdFormatter::new()
        .with_flags(FormatFlags::STD)
        .with_prefix("[demo:stderr]");
    logger.add_output(std::io::stderr(), LogLevel::ERROR, Arc::new(errors));

    println!("1. Logging at different levels:");
    logger.trace("This is a trace message");
    logger.debug("This is a debug message");
    logger.info("This is an info message");
    logger.warn("This is a warning message");
    logger.error("This is an error message");
    logger.fatal("This is a fatal message, and the process keeps running");

    println!("\n2. Macros and custom levels:");
    let port = 8080;
    info!(logger, "Server listening on port {}", port);
    warn!(logger, "Retry attempt {} of {}", 3, 5);
    logger.logf(LogLevel::new(25), "NOTICE sits between INFO and WARN");

    println!("\n3. Parsing level names:");
    let (level, err) = LogLevel::parse_with_fallback("VERBOSE");
    if let Some(err) = err {
        println!("   {} -> falling back to {}", err, level);
    }

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
