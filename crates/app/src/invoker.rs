//! Invoker: executes commands and keeps the undo history.

use std::sync::{Mutex, PoisonError};

use crate::command::{Command, CommandOutcome};

/// Result text of [`Invoker::undo`] when the history is empty.
pub const NOTHING_TO_UNDO: &str = "Nothing to undo";

/// Executes commands and remembers them for undo, most recent first.
///
/// The history is unbounded and never pruned. Refused commands are not
/// recorded: their forward action never ran, so there is nothing to reverse.
#[derive(Default)]
pub struct Invoker {
    history: Mutex<Vec<Box<dyn Command>>>,
}

impl Invoker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Execute `command` and, unless it was refused, push it onto the history.
    #[tracing::instrument(skip_all, fields(command = %command.label()))]
    pub fn press_button(&self, command: impl Command + 'static) -> CommandOutcome {
        let outcome = command.execute();
        if outcome.is_refused() {
            tracing::debug!("refused command kept out of undo history");
        } else {
            self.history
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .push(Box::new(command));
        }
        outcome
    }

    /// Reverse the most recent command, or report [`NOTHING_TO_UNDO`].
    #[tracing::instrument(skip(self))]
    pub fn undo(&self) -> String {
        let last = self
            .history
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .pop();
        match last {
            Some(command) => command.undo(),
            None => NOTHING_TO_UNDO.to_string(),
        }
    }

    /// Labels of the recorded commands, most recent first.
    #[must_use]
    pub fn history(&self) -> Vec<String> {
        self.history
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .rev()
            .map(|command| command.label())
            .collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.history
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
