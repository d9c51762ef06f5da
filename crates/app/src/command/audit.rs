//! Audit: record every execution of the wrapped command.

use std::sync::Arc;

use homesim_domain::event::LogEntry;

use crate::ports::LogSink;

use super::{Command, CommandKind, CommandOutcome};

/// Writes a "before" and an "after" system record around each execution.
///
/// Never changes control flow: the inner outcome, refusal included, is
/// returned as-is. Undo passes straight through.
pub struct AuditWrapper<C> {
    inner: C,
    sink: Arc<dyn LogSink>,
}

impl<C: Command> AuditWrapper<C> {
    pub fn new(inner: C, sink: Arc<dyn LogSink>) -> Self {
        Self { inner, sink }
    }
}

impl<C: Command> Command for AuditWrapper<C> {
    fn kind(&self) -> CommandKind {
        self.inner.kind()
    }

    fn label(&self) -> String {
        format!("Audited({})", self.inner.label())
    }

    fn execute(&self) -> CommandOutcome {
        let label = self.inner.label();
        self.sink
            .append(LogEntry::system(format!("Audit: executing {label}")));
        let outcome = self.inner.execute();
        self.sink
            .append(LogEntry::system(format!("Audit: {label} -> {outcome}")));
        outcome
    }

    fn undo(&self) -> String {
        self.inner.undo()
    }
}
