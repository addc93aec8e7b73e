//! Log level definitions
//!
//! A [`Level`] is a named severity rank. Unlike a fixed enum, levels carry an
//! explicit integer value so applications can define custom tiers; all
//! comparisons are over the value alone, the name is informational only.

use crate::core::error::LoggerError;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// A named, ordered severity rank
///
/// Higher `value` means more severe. Two levels with equal value but
/// different names compare as equal severity:
///
/// ```
/// use hooklog::core::Level;
///
/// let warn = Level::new("WARN", 3);
/// let achtung = Level::new("ACHTUNG", 3);
/// assert_eq!(warn, achtung);
/// assert!(Level::new("ERROR", 4) > warn);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Level {
    name: Cow<'static, str>,
    value: i32,
}

pub const DEBUG: Level = Level::from_static("DEBUG", 1);
pub const INFO: Level = Level::from_static("INFO", 2);
pub const WARN: Level = Level::from_static("WARN", 3);
pub const ERROR: Level = Level::from_static("ERROR", 4);
pub const FATAL: Level = Level::from_static("FATAL", 5);

/// The predefined levels, in increasing severity
pub const DEFAULT_LEVELS: [Level; 5] = [DEBUG, INFO, WARN, ERROR, FATAL];

impl Level {
    /// Create a level from a static name, usable in `const` contexts
    pub const fn from_static(name: &'static str, value: i32) -> Self {
        Self {
            name: Cow::Borrowed(name),
            value,
        }
    }

    /// Create a custom level
    ///
    /// Construction always succeeds; negative or duplicate values are
    /// permitted and are the caller's responsibility.
    pub fn new(name: impl Into<Cow<'static, str>>, value: i32) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> i32 {
        self.value
    }
}

// Comparison, equality and hashing are defined purely over `value` so that
// levels remain interchangeable regardless of name.
impl PartialEq for Level {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for Level {}

impl PartialOrd for Level {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Level {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.value.cmp(&other.value)
    }
}

impl Hash for Level {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

impl FromStr for Level {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "DEBUG" => Ok(DEBUG),
            "INFO" => Ok(INFO),
            "WARN" | "WARNING" => Ok(WARN),
            "ERROR" => Ok(ERROR),
            "FATAL" => Ok(FATAL),
            _ => Err(LoggerError::config(
                "Level",
                format!("unknown level name: '{}'", s),
            )),
        }
    }
}
