//! Journal rendering for the console.

use std::io::{self, Write};
use std::sync::Arc;

use homesim_app::journal::Journal;
use homesim_domain::event::LogEntry;
use tokio::sync::broadcast::{self, error::RecvError};
use tokio::sync::oneshot;

use crate::config::OutputFormat;

/// Render one journal entry as a single line.
///
/// # Errors
///
/// Returns an error if the entry cannot be serialized to JSON.
pub fn render(entry: &LogEntry, format: OutputFormat) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Text => Ok(entry.to_string()),
        OutputFormat::Json => serde_json::to_string(entry),
    }
}

/// Writes journal entries recorded after its creation, one line each.
///
/// The live channel only wakes the printer up. Lines are read back from the
/// journal through a cursor, so entries the channel dropped for a lagging
/// printer are still written, in record order.
pub struct JournalPrinter<W> {
    journal: Arc<Journal>,
    feed: broadcast::Receiver<LogEntry>,
    cursor: usize,
    format: OutputFormat,
    out: W,
}

impl<W: Write> JournalPrinter<W> {
    #[must_use]
    pub fn new(journal: Arc<Journal>, format: OutputFormat, out: W) -> Self {
        let feed = journal.subscribe();
        let cursor = journal.len();
        Self {
            journal,
            feed,
            cursor,
            format,
            out,
        }
    }

    /// Write every entry recorded since the last call.
    ///
    /// Returns the number of lines written. Entries that fail to render are
    /// logged and skipped.
    ///
    /// # Errors
    ///
    /// Returns an error if the output cannot be written.
    pub fn print_pending(&mut self) -> io::Result<usize> {
        let pending = self.journal.entries_since(self.cursor);
        self.cursor += pending.len();

        let mut written = 0;
        for entry in &pending {
            match render(entry, self.format) {
                Ok(line) => {
                    writeln!(self.out, "{line}")?;
                    written += 1;
                }
                Err(err) => {
                    tracing::warn!(
                        entry_id = %entry.id,
                        error = %err,
                        "failed to render journal entry"
                    );
                }
            }
        }
        self.out.flush()?;
        Ok(written)
    }

    /// Print entries as they arrive until `done` fires (or its sender is
    /// dropped), then print what is left and hand the output back.
    ///
    /// # Errors
    ///
    /// Returns an error if the output cannot be written.
    pub async fn follow(mut self, mut done: oneshot::Receiver<()>) -> io::Result<W> {
        loop {
            tokio::select! {
                biased;
                received = self.feed.recv() => match received {
                    Ok(_) => {}
                    Err(RecvError::Lagged(skipped)) => {
                        tracing::debug!(skipped, "journal printer fell behind");
                    }
                    Err(RecvError::Closed) => break,
                },
                _ = &mut done => break,
            }
            self.print_pending()?;
        }
        let written = self.print_pending()?;
        tracing::debug!(last = written, total = self.cursor, "journal printer stopped");
        Ok(self.out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::demo;
    use crate::home::Home;
    use homesim_app::ports::LogSink;
    use homesim_domain::event::LogCategory;

    #[test]
    fn should_render_text_line() {
        let entry = LogEntry::system("Front Door locked");
        let line = render(&entry, OutputFormat::Text).unwrap();
        assert!(line.starts_with('['));
        assert!(line.ends_with("system Front Door locked"));
    }

    #[test]
    fn should_render_json_line() {
        let entry = LogEntry::chat("John -> all: hi");
        let line = render(&entry, OutputFormat::Json).unwrap();

        let parsed: LogEntry = serde_json::from_str(&line).unwrap();
        assert_eq!(parsed, entry);
        assert!(line.contains("\"category\":\"chat\""));
        assert!(!line.contains('\n'));
        assert_eq!(parsed.category, LogCategory::Chat);
    }

    #[test]
    fn should_print_only_entries_recorded_after_creation() {
        let journal = Arc::new(Journal::default());
        journal.append(LogEntry::system("before"));
        let mut printer = JournalPrinter::new(journal.clone(), OutputFormat::Text, Vec::new());

        journal.append(LogEntry::system("after"));
        assert_eq!(printer.print_pending().unwrap(), 1);
        assert_eq!(printer.print_pending().unwrap(), 0);

        let printed = String::from_utf8(printer.out).unwrap();
        assert_eq!(printed.lines().count(), 1);
        assert!(printed.ends_with("system after\n"));
    }

    #[tokio::test]
    async fn should_print_whole_demo_when_live_channel_overflows() {
        let mut config = Config::default();
        config.journal.capacity = 8;
        let home = Home::build(&config).unwrap();
        let printer = JournalPrinter::new(home.journal().clone(), OutputFormat::Json, Vec::new());
        let (done, finished) = oneshot::channel();
        let renderer = tokio::spawn(printer.follow(finished));

        demo::run(&home);
        done.send(()).unwrap();
        let out = renderer.await.unwrap().unwrap();

        let expected: Vec<String> = home
            .journal()
            .entries()
            .iter()
            .map(|entry| render(entry, OutputFormat::Json).unwrap())
            .collect();
        assert!(expected.len() > config.journal.capacity);
        let printed = String::from_utf8(out).unwrap();
        assert_eq!(printed.lines().collect::<Vec<_>>(), expected);
    }

    #[tokio::test]
    async fn should_stop_when_done_sender_dropped() {
        let journal = Arc::new(Journal::new(1));
        let printer = JournalPrinter::new(journal.clone(), OutputFormat::Text, Vec::new());
        let (done, finished) = oneshot::channel::<()>();

        journal.append(LogEntry::chat("John -> Mary: hi"));
        drop(done);
        let out = printer.follow(finished).await.unwrap();

        assert!(String::from_utf8(out).unwrap().ends_with("chat John -> Mary: hi\n"));
    }
}
