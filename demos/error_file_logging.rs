//! Error file logging example
//!
//! Demonstrates the error-file logger: only Error and Fatal records are
//! emitted, and each of them is also appended to a log file.
//!
//! Run with: cargo run --example error_file_logging

use preset_logger::error;
use preset_logger::prelude::*;

fn main() -> Result<()> {
    println!("=== Preset Logger - Error File Logging Example ===\n");

    let logger = create_error_file_logger("errors.log")?;

    logger.info("Dropped: below the Error threshold");
    logger.warn("Dropped as well");
    logger.error("Failed to connect to database");
    error!(logger, "Request {} failed with status {}", "a1b2", 503);

    logger.flush()?;

    println!("\n=== Example completed successfully! ===");
    println!("Check 'errors.log' for the persisted errors");

    Ok(())
}
