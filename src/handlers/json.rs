//! JSON handler for structured logging
//!
//! The reference handler: one key-sorted JSON object per line, suitable for
//! log aggregation tools that ingest JSONL.

use crate::core::{Entry, Handler, Level, Result, Sink, WARN};
use serde_json::Value;
use std::collections::BTreeMap;
use std::io::{self, Write};

/// Writes each qualifying entry as one line of JSON
///
/// Record keys: `lvl` (lower-cased level name), `msg` (message), `p` (params
/// mapping, `{}` when none given), `sc` (scope), `line` (caller location,
/// when captured), plus every hook-derived field under its own name. Keys
/// are emitted in sorted order.
///
/// Defaults to a `WARN` threshold writing to standard error:
///
/// ```no_run
/// use hooklog::prelude::*;
///
/// let mut logger = Logger::new("app");
/// logger.register(JsonHandler::new());
/// logger.warn("this is a warning, be warned")?;
/// # hooklog::core::Result::Ok(())
/// ```
pub struct JsonHandler {
    level: Level,
    sink: Sink,
}

impl JsonHandler {
    /// Create a handler at the `WARN` threshold writing to stderr
    #[must_use]
    pub fn new() -> Self {
        Self {
            level: WARN,
            sink: Box::new(io::stderr()),
        }
    }

    /// Set the minimum level, builder style
    #[must_use]
    pub fn with_level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    /// Replace the sink, builder style
    #[must_use]
    pub fn with_sink(mut self, sink: impl Write + Send + 'static) -> Self {
        self.sink = Box::new(sink);
        self
    }

    /// Reconfigure the minimum level
    pub fn set_level(&mut self, level: Level) {
        self.level = level;
    }

    /// Reconfigure the sink
    pub fn set_sink(&mut self, sink: impl Write + Send + 'static) {
        self.sink = Box::new(sink);
    }
}

impl Default for JsonHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl Handler for JsonHandler {
    fn threshold(&self) -> &Level {
        &self.level
    }

    fn sink(&mut self) -> &mut dyn Write {
        &mut *self.sink
    }

    fn format(&self, entry: &Entry) -> Result<String> {
        let mut record: BTreeMap<&str, Value> = BTreeMap::new();
        record.insert("lvl", Value::String(entry.level.name().to_lowercase()));
        record.insert("msg", Value::String(entry.message.clone()));
        record.insert("sc", Value::String(entry.scope.clone()));
        record.insert("p", serde_json::to_value(&entry.params)?);
        if let Some(line) = &entry.line {
            record.insert("line", Value::String(line.clone()));
        }
        for (name, value) in entry.fields.iter() {
            record.insert(name, value.to_json_value());
        }

        Ok(serde_json::to_string(&record)?)
    }
}
