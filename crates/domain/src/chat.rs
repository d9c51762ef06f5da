//! Chat records: what the message router keeps for each routed message.

use serde::{Deserialize, Serialize};

use crate::id::ChatEntryId;
use crate::time::{Timestamp, now};

/// Recipient name addressing every registered user except the sender.
pub const BROADCAST: &str = "all";

/// Who a message is addressed to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "name", rename_all = "snake_case")]
pub enum Recipient {
    /// Everyone except the sender.
    All,
    /// A single user, by exact name.
    User(String),
}

impl Recipient {
    /// Interpret a raw recipient name; [`BROADCAST`] addresses everyone.
    #[must_use]
    pub fn parse(to: &str) -> Self {
        if to == BROADCAST {
            Self::All
        } else {
            Self::User(to.to_string())
        }
    }
}

impl std::fmt::Display for Recipient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::All => f.write_str(BROADCAST),
            Self::User(name) => f.write_str(name),
        }
    }
}

/// One recorded message. A broadcast is recorded once, addressed to
/// [`Recipient::All`], however many users received it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatEntry {
    pub id: ChatEntryId,
    pub from: String,
    pub to: Recipient,
    pub message: String,
    pub sent_at: Timestamp,
}

impl ChatEntry {
    /// Build a record stamped with the current time.
    #[must_use]
    pub fn new(from: impl Into<String>, to: Recipient, message: impl Into<String>) -> Self {
        Self {
            id: ChatEntryId::new(),
            from: from.into(),
            to,
            message: message.into(),
            sent_at: now(),
        }
    }

    #[must_use]
    pub fn is_broadcast(&self) -> bool {
        self.to == Recipient::All
    }
}

impl std::fmt::Display for ChatEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}: {}", self.from, self.to, self.message)
    }
}
