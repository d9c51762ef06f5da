//! Commands: reversible device actions and the decorators that wrap them.
//!
//! Every command and every decorator implements the same [`Command`]
//! contract, so decorators nest freely: the leave-home scenario runs
//! `AuditWrapper(AuthorizationWrapper(TurnOffLight))`.

mod audit;
mod authorization;
mod door;
mod light;

pub use audit::AuditWrapper;
pub use authorization::{AuthorizationWrapper, FRONT_DOOR, LockedDoorRule, SafetyRule};
pub use door::{LockDoor, UnlockDoor};
pub use light::{TurnOffLight, TurnOnLight};

/// Explicit discriminant of the concrete command variants.
///
/// Decorators report the kind of the command they wrap, so policy checks
/// compare kinds by value instead of inspecting types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandKind {
    TurnOnLight,
    TurnOffLight,
    LockDoor,
    UnlockDoor,
}

impl std::fmt::Display for CommandKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TurnOnLight => f.write_str("TurnOnLight"),
            Self::TurnOffLight => f.write_str("TurnOffLight"),
            Self::LockDoor => f.write_str("LockDoor"),
            Self::UnlockDoor => f.write_str("UnlockDoor"),
        }
    }
}

/// Result of executing a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    /// The action ran; carries the device's confirmation.
    Executed(String),
    /// A policy vetoed the action; the device was not touched.
    Refused(String),
}

impl CommandOutcome {
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Executed(text) | Self::Refused(text) => text,
        }
    }

    #[must_use]
    pub fn is_refused(&self) -> bool {
        matches!(self, Self::Refused(_))
    }

    #[must_use]
    pub fn into_message(self) -> String {
        match self {
            Self::Executed(text) | Self::Refused(text) => text,
        }
    }
}

impl std::fmt::Display for CommandOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

/// One reversible action against one device.
///
/// Both operations may be called repeatedly; each call simply re-applies
/// the corresponding transition.
pub trait Command: Send + Sync {
    fn kind(&self) -> CommandKind;

    /// Human-readable name, including any decorators.
    fn label(&self) -> String {
        self.kind().to_string()
    }

    /// Apply the forward transition.
    fn execute(&self) -> CommandOutcome;

    /// Apply the inverse transition.
    fn undo(&self) -> String;
}

impl<C: Command + ?Sized> Command for Box<C> {
    fn kind(&self) -> CommandKind {
        (**self).kind()
    }

    fn label(&self) -> String {
        (**self).label()
    }

    fn execute(&self) -> CommandOutcome {
        (**self).execute()
    }

    fn undo(&self) -> String {
        (**self).undo()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_expose_message_of_either_outcome() {
        assert_eq!(CommandOutcome::Executed("ok".into()).message(), "ok");
        assert_eq!(CommandOutcome::Refused("no".into()).to_string(), "no");
    }

    #[test]
    fn should_flag_only_refusals() {
        assert!(CommandOutcome::Refused("no".into()).is_refused());
        assert!(!CommandOutcome::Executed("ok".into()).is_refused());
    }

    #[test]
    fn should_display_kind_as_variant_name() {
        assert_eq!(CommandKind::TurnOffLight.to_string(), "TurnOffLight");
        assert_eq!(CommandKind::UnlockDoor.to_string(), "UnlockDoor");
    }
}
