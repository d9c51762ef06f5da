//! In-process journal: records both log streams and fans them out live.

use std::sync::{Mutex, PoisonError};

use tokio::sync::broadcast;

use homesim_domain::event::{LogCategory, LogEntry};

use crate::ports::LogSink;

/// In-process [`LogSink`] keeping an append-only record of every entry and
/// forwarding each one on a tokio [`broadcast`] channel for live renderers.
///
/// Appending succeeds even when there are no active subscribers (the live
/// copy is simply dropped; the record keeps it).
pub struct Journal {
    entries: Mutex<Vec<LogEntry>>,
    sender: broadcast::Sender<LogEntry>,
}

impl Journal {
    /// Create a journal whose live channel buffers up to `capacity` entries
    /// per lagging subscriber.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self {
            entries: Mutex::new(Vec::new()),
            sender,
        }
    }

    /// Subscribe to entries appended *after* this call.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<LogEntry> {
        self.sender.subscribe()
    }

    /// Every entry recorded so far, oldest first.
    #[must_use]
    pub fn entries(&self) -> Vec<LogEntry> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Entries recorded after the first `offset` ones, oldest first.
    ///
    /// Renderers keep `offset` as a cursor so entries dropped from a lagging
    /// live channel can still be read back from the record.
    #[must_use]
    pub fn entries_since(&self, offset: usize) -> Vec<LogEntry> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(offset..)
            .map(<[LogEntry]>::to_vec)
            .unwrap_or_default()
    }

    /// Entries of a single stream, oldest first.
    #[must_use]
    pub fn stream(&self, category: LogCategory) -> Vec<LogEntry> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .filter(|entry| entry.category == category)
            .cloned()
            .collect()
    }

    /// Texts of a single stream, oldest first.
    #[must_use]
    pub fn texts(&self, category: LogCategory) -> Vec<String> {
        self.stream(category)
            .into_iter()
            .map(|entry| entry.text)
            .collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for Journal {
    fn default() -> Self {
        Self::new(256)
    }
}

impl LogSink for Journal {
    fn append(&self, entry: LogEntry) {
        tracing::debug!(category = %entry.category, text = %entry.text, "log entry");
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(entry.clone());
        // Err only means there are no live subscribers.
        let _ = self.sender.send(entry);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_record_entries_in_append_order() {
        let journal = Journal::default();
        journal.append(LogEntry::system("first"));
        journal.append(LogEntry::chat("second"));

        let texts: Vec<_> = journal.entries().into_iter().map(|e| e.text).collect();
        assert_eq!(texts, vec!["first", "second"]);
        assert_eq!(journal.len(), 2);
    }

    #[test]
    fn should_split_streams_by_category() {
        let journal = Journal::default();
        journal.append(LogEntry::system("Front Door locked"));
        journal.append(LogEntry::chat("John -> all: hi"));
        journal.append(LogEntry::system("Front Door unlocked"));

        assert_eq!(
            journal.texts(LogCategory::System),
            vec!["Front Door locked", "Front Door unlocked"]
        );
        assert_eq!(journal.texts(LogCategory::Chat), vec!["John -> all: hi"]);
    }

    #[test]
    fn should_return_entries_after_offset() {
        let journal = Journal::default();
        for text in ["first", "second", "third"] {
            journal.append(LogEntry::system(text));
        }

        let texts: Vec<_> = journal.entries_since(1).into_iter().map(|e| e.text).collect();
        assert_eq!(texts, vec!["second", "third"]);
        assert!(journal.entries_since(3).is_empty());
        assert!(journal.entries_since(10).is_empty());
    }

    #[test]
    fn should_start_empty() {
        assert!(Journal::default().is_empty());
    }

    #[tokio::test]
    async fn should_deliver_entry_to_subscriber() {
        let journal = Journal::new(16);
        let mut rx = journal.subscribe();

        let entry = LogEntry::system("Living Room Light turned on");
        let entry_id = entry.id;
        journal.append(entry);

        let received = rx.recv().await.unwrap();
        assert_eq!(received.id, entry_id);
    }

    #[tokio::test]
    async fn should_deliver_entry_to_multiple_subscribers() {
        let journal = Journal::new(16);
        let mut rx1 = journal.subscribe();
        let mut rx2 = journal.subscribe();

        journal.append(LogEntry::chat("John -> Mary: hi"));

        assert_eq!(rx1.recv().await.unwrap().text, "John -> Mary: hi");
        assert_eq!(rx2.recv().await.unwrap().text, "John -> Mary: hi");
    }

    #[tokio::test]
    async fn should_not_deliver_entries_appended_before_subscription() {
        let journal = Journal::new(16);
        journal.append(LogEntry::system("early"));

        let mut rx = journal.subscribe();
        journal.append(LogEntry::system("late"));

        assert_eq!(rx.recv().await.unwrap().text, "late");
        assert_eq!(journal.len(), 2);
    }

    #[test]
    fn should_record_when_no_subscribers() {
        let journal = Journal::new(1);
        journal.append(LogEntry::system("unseen"));
        assert_eq!(journal.len(), 1);
    }
}
