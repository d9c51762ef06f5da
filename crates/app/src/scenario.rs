//! Scenario orchestrator: named, ordered sequences of commands.
//!
//! Each scenario resolves its devices from the registry, wraps the commands
//! in the decorators it needs and runs them through the shared invoker, so
//! every step can be undone individually afterwards. A device that is not
//! registered is skipped; the scenario still completes.

use std::sync::Arc;

use homesim_domain::device::Device;
use homesim_domain::error::HomeError;
use homesim_domain::event::LogEntry;

use crate::command::{
    AuditWrapper, AuthorizationWrapper, Command, FRONT_DOOR, LockDoor, TurnOffLight, TurnOnLight,
    UnlockDoor,
};
use crate::invoker::Invoker;
use crate::ports::LogSink;
use crate::registry::Registry;

/// Light the scenarios switch.
pub const LIVING_ROOM_LIGHT: &str = "Living Room Light";

/// Facade over the registry, the decorators and the invoker.
pub struct ScenarioOrchestrator {
    registry: Arc<Registry>,
    invoker: Arc<Invoker>,
    sink: Arc<dyn LogSink>,
}

impl ScenarioOrchestrator {
    pub fn new(registry: Arc<Registry>, invoker: Arc<Invoker>, sink: Arc<dyn LogSink>) -> Self {
        Self {
            registry,
            invoker,
            sink,
        }
    }

    #[must_use]
    pub fn registry(&self) -> &Arc<Registry> {
        &self.registry
    }

    #[must_use]
    pub fn invoker(&self) -> &Arc<Invoker> {
        &self.invoker
    }

    /// Turn the living room light off (only if the front door is locked),
    /// then lock the front door.
    ///
    /// Returns the result of each step that ran, in order.
    #[tracing::instrument(skip(self))]
    pub fn leave_home(&self) -> Vec<String> {
        let mut results = Vec::new();

        if let Some(light) = self.registry.find_device(LIVING_ROOM_LIGHT) {
            let guarded = AuthorizationWrapper::new(TurnOffLight::new(light), self.registry.clone());
            results.push(self.run(guarded));
        }
        if let Some(door) = self.door(LockDoor::for_device) {
            results.push(self.run(door));
        }

        self.complete("Leave home", &results);
        results
    }

    /// Unlock the front door, then turn the living room light on.
    ///
    /// Returns the result of each step that ran, in order.
    #[tracing::instrument(skip(self))]
    pub fn arrive_home(&self) -> Vec<String> {
        let mut results = Vec::new();

        if let Some(door) = self.door(UnlockDoor::for_device) {
            results.push(self.run(door));
        }
        if let Some(light) = self.registry.find_device(LIVING_ROOM_LIGHT) {
            results.push(self.run(TurnOnLight::new(light)));
        }

        self.complete("Arrive home", &results);
        results
    }

    /// Undo the most recent step of any scenario or direct command.
    pub fn undo_last(&self) -> String {
        self.invoker.undo()
    }

    fn door<C, F>(&self, bind: F) -> Option<C>
    where
        F: FnOnce(Arc<dyn Device>) -> Result<C, HomeError>,
    {
        let device = self.registry.find_device(FRONT_DOOR)?;
        match bind(device) {
            Ok(command) => Some(command),
            Err(err) => {
                tracing::warn!(error = %err, "front door is not a lock, step skipped");
                None
            }
        }
    }

    fn run(&self, command: impl Command + 'static) -> String {
        let audited = AuditWrapper::new(command, self.sink.clone());
        self.invoker.press_button(audited).into_message()
    }

    fn complete(&self, scenario: &str, results: &[String]) {
        tracing::info!(steps = results.len(), "{scenario} scenario completed");
        self.sink.append(LogEntry::system(format!(
            "{scenario} scenario completed ({} step(s))",
            results.len()
        )));
    }
}
