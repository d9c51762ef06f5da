//! Log entries: the two append-only streams the engine produces.
//!
//! `system` carries device, command and scenario activity; `chat` carries
//! routed messages. Rendering them (console, UI pane, file) is up to
//! whoever consumes the stream.

use serde::{Deserialize, Serialize};

use crate::id::LogEntryId;
use crate::time::{Timestamp, clock, now};

/// Stream a [`LogEntry`] belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogCategory {
    System,
    Chat,
}

impl std::fmt::Display for LogCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::System => f.pad("system"),
            Self::Chat => f.pad("chat"),
        }
    }
}

/// One timestamped line of a log stream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    pub id: LogEntryId,
    pub category: LogCategory,
    pub text: String,
    pub timestamp: Timestamp,
}

impl LogEntry {
    /// Create an entry stamped with the current time.
    #[must_use]
    pub fn new(category: LogCategory, text: impl Into<String>) -> Self {
        Self {
            id: LogEntryId::new(),
            category,
            text: text.into(),
            timestamp: now(),
        }
    }

    #[must_use]
    pub fn system(text: impl Into<String>) -> Self {
        Self::new(LogCategory::System, text)
    }

    #[must_use]
    pub fn chat(text: impl Into<String>) -> Self {
        Self::new(LogCategory::Chat, text)
    }
}

impl std::fmt::Display for LogEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[{}] {:<6} {}",
            clock(&self.timestamp),
            self.category,
            self.text
        )
    }
}
