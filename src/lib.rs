//! # hooklog
//!
//! A minimal, extensible structured-logging library with pluggable output
//! handlers and emission-time hooks.
//!
//! ## Features
//!
//! - **Ordered, user-definable levels**: five predefined tiers plus custom
//!   ranks, compared purely by severity value
//! - **Pluggable handlers**: each with its own threshold and sink; filtering
//!   and write dispatch come for free, handlers supply only formatting
//! - **Hooks**: named functions computing derived entry fields at log time
//! - **Synchronous by contract**: no queue, no background worker; every log
//!   call returns after all handlers have run
//!
//! ```no_run
//! use hooklog::prelude::*;
//! use hooklog::hooks;
//!
//! let logger = Logger::builder("svc")
//!     .schema(EntrySchema::new().field("timestamp"))
//!     .hook_fn("timestamp", hooks::timestamp(TimestampFormat::Iso8601))
//!     .handler(JsonHandler::new())
//!     .build();
//!
//! logger.error_with(
//!     "this is a generic error",
//!     Fields::new().with_field("error_type", "general"),
//! )?;
//! # hooklog::core::Result::Ok(())
//! ```

pub mod core;
pub mod handlers;
pub mod hooks;
pub mod macros;

pub mod prelude {
    pub use crate::core::{
        Entry, EntrySchema, FieldValue, Fields, Handler, HookFn, Level, Logger, LoggerBuilder,
        LoggerError, Result, Sink, TimestampFormat, DEBUG, DEFAULT_LEVELS, ERROR, FATAL, INFO,
        WARN,
    };
    pub use crate::handlers::JsonHandler;
    #[cfg(feature = "console")]
    pub use crate::handlers::TextHandler;
}

pub use crate::core::{
    Entry, EntrySchema, FieldValue, Fields, Handler, HookFn, Level, Logger, LoggerBuilder,
    LoggerError, Result, Sink, TimestampFormat, DEBUG, DEFAULT_LEVELS, ERROR, FATAL, INFO, WARN,
};
pub use crate::handlers::JsonHandler;
#[cfg(feature = "console")]
pub use crate::handlers::TextHandler;
