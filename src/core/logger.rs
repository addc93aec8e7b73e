//! Main logger implementation

use super::{
    entry::{Entry, EntrySchema},
    error::Result,
    fields::{FieldValue, Fields},
    handler::Handler,
    level::{Level, DEFAULT_LEVELS},
};
use parking_lot::Mutex;
use std::panic::Location;
use std::sync::Arc;

/// A named computation producing one entry field at log time
///
/// Hooks receive the owning logger so they may read its scope or other
/// state. A failing hook aborts the log call; there is no isolation between
/// hooks and no partial entry is ever dispatched.
pub type HookFn = Arc<dyn Fn(&Logger) -> Result<FieldValue> + Send + Sync>;

struct Hook {
    name: String,
    func: HookFn,
}

/// Owns enabled levels, hooks and registered handlers; the entry point for
/// emitting logs
///
/// Dispatch is fully synchronous: a `log` call evaluates every hook, builds
/// one [`Entry`] and hands it to each qualifying handler in registration
/// order before returning. A call for a level outside the enabled set is a
/// silent no-op; no hook runs and no entry is built.
///
/// ```
/// use hooklog::prelude::*;
///
/// let mut logger = Logger::new("svc");
/// logger.register(JsonHandler::new().with_level(INFO));
/// logger.info("service started")?;
/// # hooklog::core::Result::Ok(())
/// ```
pub struct Logger {
    scope: String,
    levels: Vec<Level>,
    handlers: Vec<Arc<Mutex<dyn Handler>>>,
    hooks: Vec<Hook>,
    schema: EntrySchema,
}

impl Logger {
    /// Create a logger with the default five levels enabled and no handlers
    #[must_use]
    pub fn new(scope: impl Into<String>) -> Self {
        Self {
            scope: scope.into(),
            levels: DEFAULT_LEVELS.to_vec(),
            handlers: Vec::new(),
            hooks: Vec::new(),
            schema: EntrySchema::new(),
        }
    }

    /// Create a builder for Logger
    ///
    /// ```
    /// use hooklog::prelude::*;
    ///
    /// let logger = Logger::builder("api")
    ///     .levels([INFO, WARN, ERROR, FATAL])
    ///     .handler(JsonHandler::new())
    ///     .build();
    /// ```
    #[must_use]
    pub fn builder(scope: impl Into<String>) -> LoggerBuilder {
        LoggerBuilder::new(scope)
    }

    pub fn scope(&self) -> &str {
        &self.scope
    }

    /// Replace the enabled level set
    pub fn set_levels(&mut self, levels: impl IntoIterator<Item = Level>) {
        self.levels = levels.into_iter().collect();
    }

    /// Enable a level; duplicates are harmless
    pub fn enable_level(&mut self, level: Level) {
        if !self.levels.contains(&level) {
            self.levels.push(level);
        }
    }

    /// Disable a level (by severity value)
    pub fn disable_level(&mut self, level: &Level) {
        self.levels.retain(|l| l != level);
    }

    pub fn is_enabled(&self, level: &Level) -> bool {
        self.levels.contains(level)
    }

    /// Replace the entry schema governing hook-derived fields
    pub fn set_schema(&mut self, schema: EntrySchema) {
        self.schema = schema;
    }

    /// Register a handler; appended in call order, no de-duplication
    pub fn register<H: Handler + 'static>(&mut self, handler: H) {
        self.handlers.push(Arc::new(Mutex::new(handler)));
    }

    /// Register a handler instance shared with other loggers
    ///
    /// The same instance (and therefore the same sink) may be registered to
    /// any number of loggers.
    pub fn register_shared(&mut self, handler: Arc<Mutex<dyn Handler>>) {
        self.handlers.push(handler);
    }

    /// Add or replace a hook under `name`
    ///
    /// Replacing keeps the hook's original position; new hooks run after
    /// existing ones. Execution order is insertion order.
    pub fn hook<F>(&mut self, name: impl Into<String>, func: F)
    where
        F: Fn(&Logger) -> Result<FieldValue> + Send + Sync + 'static,
    {
        self.add_hook(name.into(), Arc::new(func));
    }

    /// Add or replace a pre-built hook function (see [`crate::hooks`])
    pub fn hook_fn(&mut self, name: impl Into<String>, func: HookFn) {
        self.add_hook(name.into(), func);
    }

    fn add_hook(&mut self, name: String, func: HookFn) {
        match self.hooks.iter_mut().find(|h| h.name == name) {
            Some(existing) => existing.func = func,
            None => self.hooks.push(Hook { name, func }),
        }
    }

    /// Remove a hook; returns whether it existed
    pub fn remove_hook(&mut self, name: &str) -> bool {
        let before = self.hooks.len();
        self.hooks.retain(|h| h.name != name);
        self.hooks.len() != before
    }

    /// Evaluate every hook, collecting results keyed by hook name
    ///
    /// Runs synchronously in the calling thread, in insertion order. The
    /// first hook failure propagates.
    pub fn run_hooks(&self) -> Result<Fields> {
        let mut fields = Fields::new();
        for hook in &self.hooks {
            let value = (hook.func)(self)?;
            fields.insert(hook.name.clone(), value);
        }
        Ok(fields)
    }

    /// Emit one entry at `level`
    ///
    /// Returns immediately when `level` is not enabled. Otherwise runs all
    /// hooks, validates their outputs against the entry schema, builds the
    /// entry and invokes every registered handler in registration order.
    /// The first hook or handler failure propagates and skips the handlers
    /// not yet invoked.
    #[track_caller]
    pub fn log(
        &self,
        level: Level,
        message: impl Into<String>,
        params: Option<Fields>,
    ) -> Result<()> {
        let caller = Location::caller();
        self.dispatch(level, message.into(), params, caller)
    }

    fn dispatch(
        &self,
        level: Level,
        message: String,
        params: Option<Fields>,
        caller: &Location<'_>,
    ) -> Result<()> {
        if !self.is_enabled(&level) {
            return Ok(());
        }

        let fields = self.run_hooks()?;
        self.schema.validate(&fields)?;

        let entry = Entry::new(level, message)
            .with_scope(self.scope.clone())
            .with_line(format!("{}:{}", caller.file(), caller.line()))
            .with_params(params.unwrap_or_default())
            .with_fields(fields);

        for handler in &self.handlers {
            handler.lock().handle(&entry)?;
        }
        Ok(())
    }

    #[track_caller]
    #[inline]
    pub fn debug(&self, message: impl Into<String>) -> Result<()> {
        self.log(super::level::DEBUG, message, None)
    }

    #[track_caller]
    #[inline]
    pub fn info(&self, message: impl Into<String>) -> Result<()> {
        self.log(super::level::INFO, message, None)
    }

    #[track_caller]
    #[inline]
    pub fn warn(&self, message: impl Into<String>) -> Result<()> {
        self.log(super::level::WARN, message, None)
    }

    #[track_caller]
    #[inline]
    pub fn error(&self, message: impl Into<String>) -> Result<()> {
        self.log(super::level::ERROR, message, None)
    }

    #[track_caller]
    #[inline]
    pub fn fatal(&self, message: impl Into<String>) -> Result<()> {
        self.log(super::level::FATAL, message, None)
    }

    /// Debug with a params mapping
    #[track_caller]
    pub fn debug_with(&self, message: impl Into<String>, params: Fields) -> Result<()> {
        self.log(super::level::DEBUG, message, Some(params))
    }

    /// Info with a params mapping
    #[track_caller]
    pub fn info_with(&self, message: impl Into<String>, params: Fields) -> Result<()> {
        self.log(super::level::INFO, message, Some(params))
    }

    /// Warn with a params mapping
    #[track_caller]
    pub fn warn_with(&self, message: impl Into<String>, params: Fields) -> Result<()> {
        self.log(super::level::WARN, message, Some(params))
    }

    /// Error with a params mapping
    #[track_caller]
    pub fn error_with(&self, message: impl Into<String>, params: Fields) -> Result<()> {
        self.log(super::level::ERROR, message, Some(params))
    }

    /// Fatal with a params mapping
    #[track_caller]
    pub fn fatal_with(&self, message: impl Into<String>, params: Fields) -> Result<()> {
        self.log(super::level::FATAL, message, Some(params))
    }
}

/// Builder for constructing Logger with a fluent API
///
/// # Example
/// ```
/// use hooklog::prelude::*;
///
/// let logger = Logger::builder("api")
///     .levels([INFO, WARN, ERROR, FATAL])
///     .schema(EntrySchema::new().field("timestamp"))
///     .hook("timestamp", |_| Ok(FieldValue::from("T0")))
///     .handler(JsonHandler::new())
///     .build();
/// ```
pub struct LoggerBuilder {
    logger: Logger,
}

impl LoggerBuilder {
    /// Create a new builder with default values
    pub fn new(scope: impl Into<String>) -> Self {
        Self {
            logger: Logger::new(scope),
        }
    }

    /// Set the enabled level set
    #[must_use = "builder methods return a new value"]
    pub fn levels(mut self, levels: impl IntoIterator<Item = Level>) -> Self {
        self.logger.set_levels(levels);
        self
    }

    /// Add a handler
    #[must_use = "builder methods return a new value"]
    pub fn handler<H: Handler + 'static>(mut self, handler: H) -> Self {
        self.logger.register(handler);
        self
    }

    /// Add a handler instance shared with other loggers
    #[must_use = "builder methods return a new value"]
    pub fn shared_handler(mut self, handler: Arc<Mutex<dyn Handler>>) -> Self {
        self.logger.register_shared(handler);
        self
    }

    /// Add a hook under `name`
    #[must_use = "builder methods return a new value"]
    pub fn hook<F>(mut self, name: impl Into<String>, func: F) -> Self
    where
        F: Fn(&Logger) -> Result<FieldValue> + Send + Sync + 'static,
    {
        self.logger.hook(name, func);
        self
    }

    /// Add a pre-built hook function (for the built-ins in [`crate::hooks`])
    #[must_use = "builder methods return a new value"]
    pub fn hook_fn(mut self, name: impl Into<String>, func: HookFn) -> Self {
        self.logger.hook_fn(name, func);
        self
    }

    /// Set the entry schema
    #[must_use = "builder methods return a new value"]
    pub fn schema(mut self, schema: EntrySchema) -> Self {
        self.logger.set_schema(schema);
        self
    }

    /// Build the Logger
    pub fn build(self) -> Logger {
        self.logger
    }
}
