//! Error types for the logging library

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// IO error while writing to a handler sink
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Hook evaluation failed
    #[error("Hook '{name}' failed: {message}")]
    HookError { name: String, message: String },

    /// Hook output does not match any declared entry field
    #[error("Hook '{hook}' produced a field not declared by the entry schema")]
    UndeclaredField { hook: String },

    /// Invalid configuration with details
    #[error("Invalid configuration for {component}: {message}")]
    InvalidConfiguration { component: String, message: String },

    /// Formatter error with handler name
    #[error("Formatter error ({handler}): {message}")]
    FormatterError { handler: String, message: String },

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl LoggerError {
    /// Create a hook evaluation error
    pub fn hook(name: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::HookError {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Create an undeclared field error
    pub fn undeclared_field(hook: impl Into<String>) -> Self {
        LoggerError::UndeclaredField { hook: hook.into() }
    }

    /// Create an invalid configuration error
    pub fn config(component: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::InvalidConfiguration {
            component: component.into(),
            message: message.into(),
        }
    }

    /// Create a formatter error
    pub fn formatter(handler: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::FormatterError {
            handler: handler.into(),
            message: message.into(),
        }
    }

    /// Create a generic error
    pub fn other<S: Into<String>>(msg: S) -> Self {
        LoggerError::Other(msg.into())
    }
}
