//! Message router: direct and broadcast messages between registered users.

use std::sync::{Arc, Mutex, PoisonError, RwLock};

use homesim_domain::chat::{ChatEntry, Recipient};
use homesim_domain::error::ConflictError;
use homesim_domain::event::LogEntry;
use homesim_domain::user::User;

use crate::ports::LogSink;

/// Routes messages between registered users and records what was routed.
///
/// Delivery is fire-and-forget: there is no acknowledgment and no retry.
/// A message addressed to an unknown user is dropped without a trace in the
/// history.
pub struct MessageRouter {
    users: RwLock<Vec<Arc<User>>>,
    history: Mutex<Vec<ChatEntry>>,
    sink: Arc<dyn LogSink>,
}

impl MessageRouter {
    /// Create a router logging recorded messages to `sink`'s chat stream.
    pub fn new(sink: Arc<dyn LogSink>) -> Self {
        Self {
            users: RwLock::new(Vec::new()),
            history: Mutex::new(Vec::new()),
            sink,
        }
    }

    /// Add a user to the routing table.
    ///
    /// # Errors
    ///
    /// Returns [`ConflictError`] when the name is already taken.
    pub fn register(&self, user: User) -> Result<Arc<User>, ConflictError> {
        let mut users = self.users.write().unwrap_or_else(PoisonError::into_inner);
        if users.iter().any(|u| u.name() == user.name()) {
            return Err(ConflictError {
                entity: "User",
                name: user.name().to_string(),
            });
        }
        tracing::debug!(user_id = %user.id(), user_name = user.name(), "user registered");
        let user = Arc::new(user);
        users.push(user.clone());
        Ok(user)
    }

    #[must_use]
    pub fn find_user(&self, name: &str) -> Option<Arc<User>> {
        self.users
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .find(|u| u.name() == name)
            .cloned()
    }

    /// Registered users, in registration order.
    #[must_use]
    pub fn users(&self) -> Vec<Arc<User>> {
        self.users
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Route `message` from `from` to `to`.
    ///
    /// `to == "all"` delivers to every registered user except the sender and
    /// records a single broadcast entry. Any other value must match a
    /// registered user exactly; otherwise nothing is delivered or recorded
    /// and `None` is returned.
    #[tracing::instrument(skip(self, message))]
    pub fn send_message(&self, from: &str, to: &str, message: &str) -> Option<ChatEntry> {
        let recipient = Recipient::parse(to);
        let delivered_to = match &recipient {
            Recipient::All => {
                let recipients: Vec<_> = self
                    .users()
                    .into_iter()
                    .filter(|user| user.name() != from)
                    .collect();
                for user in &recipients {
                    user.receive_message(from, message);
                }
                recipients.len()
            }
            Recipient::User(name) => {
                let Some(user) = self.find_user(name) else {
                    tracing::debug!("recipient not registered, message dropped");
                    return None;
                };
                user.receive_message(from, message);
                1
            }
        };
        tracing::debug!(delivered_to, "message delivered");

        let entry = ChatEntry::new(from, recipient, message);
        self.history
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(entry.clone());
        self.sink.append(LogEntry::chat(entry.to_string()));
        Some(entry)
    }

    /// Recorded entries, oldest first.
    #[must_use]
    pub fn history(&self) -> Vec<ChatEntry> {
        self.history
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}
