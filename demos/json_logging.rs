//! JSON logging example
//!
//! A logger with the reference JSON handler at its default WARN threshold:
//! error and warn calls produce one JSON line each on stderr, the info call
//! is filtered out by the handler.
//!
//! Run with: cargo run --example json_logging

use hooklog::hooks;
use hooklog::prelude::*;

fn main() -> Result<()> {
    let logger = Logger::builder("test app")
        .schema(EntrySchema::new().field("timestamp"))
        .hook_fn("timestamp", hooks::timestamp(TimestampFormat::Rfc3339))
        .handler(JsonHandler::new())
        .build();

    logger.error_with(
        "this is a generic error",
        Fields::new()
            .with_field("error_type", "general")
            .with_field("random_number", 42),
    )?;

    logger.warn_with(
        "this is a warning, be warned",
        Fields::new()
            .with_field("error_type", "db")
            .with_field("random_db_number", 7),
    )?;

    // Won't be written: the handler's threshold is WARN, above INFO.
    logger.info("this is an info, dont be warned.")?;

    Ok(())
}
