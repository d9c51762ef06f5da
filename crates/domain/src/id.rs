//! Random UUID identifiers, one newtype per kind of record.
//!
//! Ids serialize as the bare UUID string and display the same way, so log
//! fields and JSON output agree.

use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! typed_ids {
    ($($(#[$meta:meta])* $name:ident;)+) => {
        $(
            $(#[$meta])*
            #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
            #[serde(transparent)]
            pub struct $name(uuid::Uuid);

            impl $name {
                #[must_use]
                pub fn new() -> Self {
                    Self(uuid::Uuid::new_v4())
                }
            }

            impl Default for $name {
                fn default() -> Self {
                    Self::new()
                }
            }

            impl fmt::Display for $name {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    fmt::Display::fmt(&self.0, f)
                }
            }
        )+
    };
}

typed_ids! {
    /// Identifies a [`Device`](crate::device::Device).
    DeviceId;
    /// Identifies a [`User`](crate::user::User).
    UserId;
    /// Identifies a [`LogEntry`](crate::event::LogEntry).
    LogEntryId;
    /// Identifies a [`ChatEntry`](crate::chat::ChatEntry).
    ChatEntryId;
}
