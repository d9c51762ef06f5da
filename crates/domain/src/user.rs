//! User: a registered participant that can exchange messages.

use std::sync::{Mutex, PoisonError};

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::id::UserId;
use crate::time::{Timestamp, now};

/// A message as it landed in a user's inbox.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReceivedMessage {
    pub from: String,
    pub message: String,
    pub received_at: Timestamp,
}

/// A household member.
#[derive(Debug)]
pub struct User {
    id: UserId,
    name: String,
    inbox: Mutex<Vec<ReceivedMessage>>,
}

impl User {
    /// Create a user with an empty inbox.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyName`] when `name` is blank.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::EmptyName);
        }
        Ok(Self {
            id: UserId::new(),
            name,
            inbox: Mutex::new(Vec::new()),
        })
    }

    #[must_use]
    pub fn id(&self) -> UserId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Accept a delivered message.
    pub fn receive_message(&self, from: &str, message: &str) {
        self.inbox
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(ReceivedMessage {
                from: from.to_string(),
                message: message.to_string(),
                received_at: now(),
            });
    }

    /// Messages received so far, oldest first.
    #[must_use]
    pub fn inbox(&self) -> Vec<ReceivedMessage> {
        self.inbox
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}
