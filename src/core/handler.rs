//! Handler trait for log output destinations
//!
//! A handler is anything exposing a severity threshold, a writable sink and
//! a formatting step. Filtering and write dispatch are supplied by the
//! provided [`Handler::handle`]; concrete handlers implement formatting only.

use super::{entry::Entry, error::Result, level::Level};
use std::io::Write;

/// A writable byte destination for formatted records
///
/// Files, in-memory buffers and the standard streams all qualify. Handlers
/// only ever append sequentially; there is no seeking and no read-back.
pub type Sink = Box<dyn Write + Send>;

pub trait Handler: Send {
    /// Minimum level this handler reacts to
    fn threshold(&self) -> &Level;

    /// The output destination for formatted records
    fn sink(&mut self) -> &mut dyn Write;

    /// Convert an entry into one output record, without the trailing newline
    fn format(&self, entry: &Entry) -> Result<String>;

    /// Filter, format and write one entry
    ///
    /// Entries below the threshold return `Ok(())` with no side effects.
    /// Formatting and write failures propagate to the caller of `log()`;
    /// this library performs no retry or buffering.
    fn handle(&mut self, entry: &Entry) -> Result<()> {
        if entry.level < *self.threshold() {
            return Ok(());
        }

        let record = self.format(entry)?;
        let sink = self.sink();
        sink.write_all(record.as_bytes())?;
        sink.write_all(b"\n")?;
        sink.flush()?;
        Ok(())
    }
}
