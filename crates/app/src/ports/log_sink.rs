//! Log sink port: where the `system` and `chat` streams are handed off.

use std::sync::Arc;

use homesim_domain::event::LogEntry;

/// Accepts log entries from the engine.
///
/// Appending is synchronous and infallible: the engine never waits on, nor
/// fails because of, its log consumer.
pub trait LogSink: Send + Sync {
    /// Append one entry to its stream.
    fn append(&self, entry: LogEntry);
}

impl<T: LogSink + ?Sized> LogSink for Arc<T> {
    fn append(&self, entry: LogEntry) {
        (**self).append(entry);
    }
}
