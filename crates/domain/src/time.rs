//! Time and timestamp helpers.

use chrono::{DateTime, Utc};

/// UTC timestamp attached to log lines and chat records.
pub type Timestamp = DateTime<Utc>;

/// Return the current UTC time.
#[must_use]
pub fn now() -> Timestamp {
    Utc::now()
}

/// Wall-clock rendering (`HH:MM:SS`) used as the prefix of log lines.
#[must_use]
pub fn clock(ts: &Timestamp) -> String {
    ts.format("%H:%M:%S").to_string()
}
