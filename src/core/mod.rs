//! Core logger types and traits

pub mod entry;
pub mod error;
pub mod fields;
pub mod handler;
pub mod level;
pub mod logger;
pub mod timestamp;

pub use entry::{Entry, EntrySchema};
pub use error::{LoggerError, Result};
pub use fields::{FieldValue, Fields};
pub use handler::{Handler, Sink};
pub use level::{Level, DEBUG, DEFAULT_LEVELS, ERROR, FATAL, INFO, WARN};
pub use logger::{HookFn, Logger, LoggerBuilder};
pub use timestamp::TimestampFormat;
