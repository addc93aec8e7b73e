//! Built-in hook constructors
//!
//! Hooks are named functions the logger evaluates at emission time; each
//! result lands on the entry under the hook's name. Remember to declare the
//! matching field on the logger's [`EntrySchema`](crate::core::EntrySchema),
//! otherwise the first log call errors.

use crate::core::{FieldValue, HookFn, TimestampFormat};
use chrono::Utc;
use std::sync::Arc;

/// Hook producing the current UTC time, rendered with `format`
///
/// ```
/// use hooklog::prelude::*;
/// use hooklog::hooks;
///
/// let logger = Logger::builder("app")
///     .schema(EntrySchema::new().field("timestamp"))
///     .hook_fn("timestamp", hooks::timestamp(TimestampFormat::Iso8601))
///     .build();
/// ```
pub fn timestamp(format: TimestampFormat) -> HookFn {
    Arc::new(move |_logger| Ok(FieldValue::String(format.format(&Utc::now()))))
}

/// Hook producing the calling thread's name, or its id when unnamed
pub fn thread() -> HookFn {
    Arc::new(|_logger| {
        let current = std::thread::current();
        let value = match current.name() {
            Some(name) => name.to_string(),
            None => format!("{:?}", current.id()),
        };
        Ok(FieldValue::String(value))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{EntrySchema, Logger};

    #[test]
    fn test_timestamp_hook_output() {
        let logger = Logger::builder("app")
            .schema(EntrySchema::new().field("timestamp"))
            .hook_fn("timestamp", timestamp(TimestampFormat::Iso8601))
            .build();

        let fields = logger.run_hooks().unwrap();
        match fields.get("timestamp") {
            Some(FieldValue::String(ts)) => assert!(ts.ends_with('Z')),
            other => panic!("expected string timestamp, got {:?}", other),
        }
    }

    #[test]
    fn test_unix_timestamp_is_numeric_string() {
        let logger = Logger::builder("app")
            .schema(EntrySchema::new().field("timestamp"))
            .hook_fn("timestamp", timestamp(TimestampFormat::Unix))
            .build();

        let fields = logger.run_hooks().unwrap();
        match fields.get("timestamp") {
            Some(FieldValue::String(ts)) => {
                assert!(ts.parse::<i64>().is_ok(), "not numeric: {}", ts)
            }
            other => panic!("expected string timestamp, got {:?}", other),
        }
    }

    #[test]
    fn test_thread_hook_output() {
        let logger = Logger::builder("app")
            .schema(EntrySchema::new().field("thread"))
            .hook_fn("thread", thread())
            .build();

        let fields = logger.run_hooks().unwrap();
        match fields.get("thread") {
            Some(FieldValue::String(name)) => assert!(!name.is_empty()),
            other => panic!("expected thread name, got {:?}", other),
        }
    }
}
