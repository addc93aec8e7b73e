//! Concrete handler implementations
//!
//! The core contract lives in [`crate::core::handler`]; these are the
//! reference handlers shipped with the crate.

pub mod json;
#[cfg(feature = "console")]
pub mod text;

pub use json::JsonHandler;
#[cfg(feature = "console")]
pub use text::TextHandler;
