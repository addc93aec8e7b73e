//! Log entry structure and entry schema

use super::fields::Fields;
use super::level::Level;
use crate::core::error::{LoggerError, Result};
use serde::Serialize;

/// One fully-populated log event
///
/// An entry carries the minimal base (`level`, `message`) plus the scope of
/// the emitting logger, the caller source location when captured, the
/// caller-supplied params mapping and the hook-derived extension fields.
/// Entries are built by the [`Logger`](super::logger::Logger) and handed to
/// handlers by shared reference; handlers never mutate them.
#[derive(Debug, Clone, Serialize)]
pub struct Entry {
    pub level: Level,
    pub message: String,
    pub scope: String,
    /// Caller source location, `file:line`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<String>,
    pub params: Fields,
    /// Hook-derived extension fields
    pub fields: Fields,
}

impl Entry {
    pub fn new(level: Level, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            scope: String::new(),
            line: None,
            params: Fields::new(),
            fields: Fields::new(),
        }
    }

    pub fn with_scope(mut self, scope: impl Into<String>) -> Self {
        self.scope = scope.into();
        self
    }

    pub fn with_line(mut self, line: impl Into<String>) -> Self {
        self.line = Some(line.into());
        self
    }

    pub fn with_params(mut self, params: Fields) -> Self {
        self.params = params;
        self
    }

    pub fn with_fields(mut self, fields: Fields) -> Self {
        self.fields = fields;
        self
    }
}

/// Declared extension fields for the entries a logger produces
///
/// The schema is the configurable part of the entry "variant": every hook
/// output key must name a declared field, otherwise entry construction fails
/// with [`LoggerError::UndeclaredField`]. Failing early makes hook/schema
/// misconfiguration visible on the first log call instead of silently
/// dropping values.
///
/// ```
/// use hooklog::core::EntrySchema;
///
/// let schema = EntrySchema::new().field("timestamp").field("thread");
/// assert!(schema.declares("timestamp"));
/// assert!(!schema.declares("request_id"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct EntrySchema {
    fields: std::collections::BTreeSet<String>,
}

impl EntrySchema {
    /// Create a schema declaring no extension fields
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare an extension field, builder style
    pub fn field(mut self, name: impl Into<String>) -> Self {
        self.fields.insert(name.into());
        self
    }

    /// Declare an extension field
    pub fn declare(&mut self, name: impl Into<String>) {
        self.fields.insert(name.into());
    }

    pub fn declares(&self, name: &str) -> bool {
        self.fields.contains(name)
    }

    /// Check hook outputs against the declared fields
    pub fn validate(&self, fields: &Fields) -> Result<()> {
        for (name, _) in fields.iter() {
            if !self.fields.contains(name) {
                return Err(LoggerError::undeclared_field(name.clone()));
            }
        }
        Ok(())
    }
}
