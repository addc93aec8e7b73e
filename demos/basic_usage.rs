//! Basic logger usage example
//!
//! Demonstrates level filtering, hooks and the text handler.
//!
//! Run with: cargo run --example basic_usage

use hooklog::hooks;
use hooklog::prelude::*;

fn main() -> Result<()> {
    println!("=== hooklog - Basic Usage Example ===\n");

    let mut logger = Logger::builder("demo")
        .schema(EntrySchema::new().field("timestamp"))
        .hook_fn("timestamp", hooks::timestamp(TimestampFormat::Iso8601))
        .handler(TextHandler::new().with_level(DEBUG))
        .build();

    println!("1. Logging at different levels:");
    logger.debug("This is a debug message")?;
    logger.info("This is an info message")?;
    logger.warn("This is a warning message")?;
    logger.error("This is an error message")?;
    logger.fatal("This is a fatal message")?;

    println!("\n2. Disabling levels on the logger:");
    logger.set_levels([WARN, ERROR, FATAL]);
    println!("   Only WARN and above are enabled - debug and info are no-ops:");
    logger.debug("Debug message (dropped)")?;
    logger.info("Info message (dropped)")?;
    logger.warn("Warning message (visible)")?;

    println!("\n3. Structured params:");
    logger.error_with(
        "request failed",
        Fields::new()
            .with_field("status", 502)
            .with_field("path", "/healthz"),
    )?;

    println!("\n4. Custom severity tiers:");
    let audit = Level::new("AUDIT", 6);
    logger.enable_level(audit.clone());
    logger.log(audit, "privileged operation recorded", None)?;

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
