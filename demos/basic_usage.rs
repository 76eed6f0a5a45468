//! Basic usage example
//!
//! Demonstrates the standard console logger and the logging macros.
//!
//! Run with: cargo run --example basic_usage

use preset_logger::prelude::*;
use preset_logger::{info, warn};

fn main() {
    println!("=== Preset Logger - Basic Usage Example ===\n");

    let logger = create_standard_logger();

    logger.info("Application started");
    logger.debug("Not shown: the standard logger starts at Info");
    logger.warn("Using default settings for some options");
    logger.error("Failed to load optional plugin");

    // Macros also capture the enclosing function
    let port = 8080;
    info!(logger, "Server listening on port {}", port);
    warn!(logger, "Retry attempt {} of {}", 3, 5);

    let level = parse_level(&std::env::var("LOG_LEVEL").unwrap_or_default());
    println!("\nLOG_LEVEL resolves to {}", level);
}
