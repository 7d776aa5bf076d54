//! File logging example
//!
//! Demonstrates logging to the console and to text and JSON files at the
//! same time, each with its own threshold.
//!
//! Run with: cargo run --example file_logging

use leveled_logger::prelude::*;
use std::sync::Arc;

fn main() -> Result<()> {
    println!("=== Leveled Logger - File Logging Example ===\n");

    let logger = Logger::builder()
        .output(
            std::io::stdout(),
            LogLevel::INFO,
            Arc::new(StdFormatter::new().with_prefix("app")),
        )
        .output(
            FileSink::new("application.log")?,
            LogLevel::DEBUG,
            Arc::new(
                StdFormatter::new()
                    .with_flags(FormatFlags::DATE | FormatFlags::MICROSECONDS)
                    .with_prefix("app"),
            ),
        )
        .build();

    #[cfg(feature = "json")]
    logger.add_output(
        FileSink::new("application.jsonl")?,
        LogLevel::WARNING,
        Arc::new(JsonFormatter::new().with_location(true)),
    );

    println!("1. Logging to console and files:");
    logger.info("Application started");
    logger.debug("Loading configuration...");
    logger.info("Configuration loaded successfully");
    logger.warn("Using default settings for some options");
    logger.error("Failed to load optional plugin");

    println!("\n2. Performing some operations:");
    for i in 1..=5 {
        logger.info(format_args!("Processing item {}/5", i));
        if i == 3 {
            logger.warn("Item 3 took longer than expected");
        }
    }

    logger.info("All operations completed");

    let metrics = logger.metrics();
    println!(
        "\n{} log calls, {} writes, {} failed writes",
        metrics.total_calls(),
        metrics.writes(),
        metrics.failed_writes()
    );

    // File sinks flush when the logger (and with it the sinks) is dropped
    drop(logger);

    println!("\n=== Example completed successfully! ===");
    println!("Check 'application.log' and 'application.jsonl' for the output");

    Ok(())
}
