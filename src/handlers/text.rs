//! Human-readable text handler

use crate::core::{Entry, Handler, Level, Result, Sink, INFO};
use colored::Colorize;
use std::io::{self, Write};

/// Writes each qualifying entry as one human-readable line
///
/// Format: `[LEVEL] scope - message key=value ...`, with params and
/// hook-derived fields appended as `key=value` pairs. Level names are
/// colored when enabled.
pub struct TextHandler {
    level: Level,
    sink: Sink,
    use_colors: bool,
}

impl TextHandler {
    /// Create a handler at the `INFO` threshold writing to stderr
    #[must_use]
    pub fn new() -> Self {
        Self {
            level: INFO,
            sink: Box::new(io::stderr()),
            use_colors: true,
        }
    }

    /// Set the minimum level, builder style
    #[must_use]
    pub fn with_level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    /// Replace the sink, builder style
    ///
    /// Colors are disabled when the sink is not the standard error stream;
    /// re-enable with [`TextHandler::with_colors`] if the destination
    /// understands ANSI sequences.
    #[must_use]
    pub fn with_sink(mut self, sink: impl Write + Send + 'static) -> Self {
        self.sink = Box::new(sink);
        self.use_colors = false;
        self
    }

    /// Enable or disable colored level names, builder style
    #[must_use]
    pub fn with_colors(mut self, use_colors: bool) -> Self {
        self.use_colors = use_colors;
        self
    }

    /// Reconfigure the minimum level
    pub fn set_level(&mut self, level: Level) {
        self.level = level;
    }

    /// Reconfigure the sink; disables colors, as [`TextHandler::with_sink`]
    pub fn set_sink(&mut self, sink: impl Write + Send + 'static) {
        self.sink = Box::new(sink);
        self.use_colors = false;
    }

    fn color_for(level: &Level) -> colored::Color {
        use colored::Color::*;
        // Custom tiers pick the color of the nearest predefined severity
        match level.value() {
            i32::MIN..=1 => Blue,
            2 => Green,
            3 => Yellow,
            4 => Red,
            _ => BrightRed,
        }
    }
}

impl Default for TextHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl Handler for TextHandler {
    fn threshold(&self) -> &Level {
        &self.level
    }

    fn sink(&mut self) -> &mut dyn Write {
        &mut *self.sink
    }

    fn format(&self, entry: &Entry) -> Result<String> {
        let level_str = if self.use_colors {
            format!("{:5}", entry.level.name())
                .color(Self::color_for(&entry.level))
                .to_string()
        } else {
            format!("{:5}", entry.level.name())
        };

        let mut line = format!("[{}] {} - {}", level_str, entry.scope, entry.message);

        if !entry.fields.is_empty() {
            line.push(' ');
            line.push_str(&entry.fields.format_fields());
        }
        if !entry.params.is_empty() {
            line.push(' ');
            line.push_str(&entry.params.format_fields());
        }

        Ok(line)
    }
}
