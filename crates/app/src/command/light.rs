//! Power commands: turn a light on or off.
//!
//! Any device honours the on/off contract, so these also drive adapted
//! legacy hardware.

use std::sync::Arc;

use homesim_domain::device::Device;

use super::{Command, CommandKind, CommandOutcome};

/// Turns its device on; undo turns it off.
pub struct TurnOnLight {
    light: Arc<dyn Device>,
}

impl TurnOnLight {
    pub fn new(light: Arc<dyn Device>) -> Self {
        Self { light }
    }
}

impl Command for TurnOnLight {
    fn kind(&self) -> CommandKind {
        CommandKind::TurnOnLight
    }

    fn execute(&self) -> CommandOutcome {
        CommandOutcome::Executed(self.light.turn_on())
    }

    fn undo(&self) -> String {
        self.light.turn_off()
    }
}

/// Turns its device off; undo turns it on.
pub struct TurnOffLight {
    light: Arc<dyn Device>,
}

impl TurnOffLight {
    pub fn new(light: Arc<dyn Device>) -> Self {
        Self { light }
    }
}

impl Command for TurnOffLight {
    fn kind(&self) -> CommandKind {
        CommandKind::TurnOffLight
    }

    fn execute(&self) -> CommandOutcome {
        CommandOutcome::Executed(self.light.turn_off())
    }

    fn undo(&self) -> String {
        self.light.turn_on()
    }
}
