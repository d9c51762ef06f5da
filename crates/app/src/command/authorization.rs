//! Authorization: veto a command based on the current state of the home.

use std::sync::Arc;

use crate::registry::Registry;

use super::{Command, CommandKind, CommandOutcome};

/// Name of the door whose bolt gates turning lights off.
pub const FRONT_DOOR: &str = "Front Door";

/// A predicate over a command kind and the registry.
///
/// Returning `Some(reason)` vetoes the forward action; `reason` becomes the
/// command's result.
pub trait SafetyRule: Send + Sync {
    fn check(&self, kind: CommandKind, registry: &Registry) -> Option<String>;
}

/// Lights may not be switched off while the named door is unlocked.
///
/// A missing door, or a device by that name that is not a lock, does not
/// block anything.
pub struct LockedDoorRule {
    door: String,
}

impl LockedDoorRule {
    pub fn new(door: impl Into<String>) -> Self {
        Self { door: door.into() }
    }
}

impl Default for LockedDoorRule {
    fn default() -> Self {
        Self::new(FRONT_DOOR)
    }
}

impl SafetyRule for LockedDoorRule {
    fn check(&self, kind: CommandKind, registry: &Registry) -> Option<String> {
        if kind != CommandKind::TurnOffLight {
            return None;
        }
        let door = registry.find_device(&self.door)?;
        let unlocked = door.as_lock().is_some_and(|lock| !lock.is_locked());
        unlocked.then(|| {
            format!(
                "Refused: lights stay on while {} is unlocked",
                self.door
            )
        })
    }
}

/// Runs its inner command only when the safety rule allows it.
///
/// Undo is never gated: reversing is always permitted.
pub struct AuthorizationWrapper<C> {
    inner: C,
    registry: Arc<Registry>,
    rule: Box<dyn SafetyRule>,
}

impl<C: Command> AuthorizationWrapper<C> {
    /// Guard `inner` with the default [`LockedDoorRule`].
    pub fn new(inner: C, registry: Arc<Registry>) -> Self {
        Self::with_rule(inner, registry, LockedDoorRule::default())
    }

    /// Guard `inner` with a custom rule.
    pub fn with_rule(inner: C, registry: Arc<Registry>, rule: impl SafetyRule + 'static) -> Self {
        Self {
            inner,
            registry,
            rule: Box::new(rule),
        }
    }
}

impl<C: Command> Command for AuthorizationWrapper<C> {
    fn kind(&self) -> CommandKind {
        self.inner.kind()
    }

    fn label(&self) -> String {
        format!("Authorized({})", self.inner.label())
    }

    fn execute(&self) -> CommandOutcome {
        if let Some(reason) = self.rule.check(self.inner.kind(), &self.registry) {
            tracing::warn!(command = %self.inner.label(), %reason, "command refused");
            return CommandOutcome::Refused(reason);
        }
        self.inner.execute()
    }

    fn undo(&self) -> String {
        self.inner.undo()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::{LockDoor, TurnOffLight, TurnOnLight};
    use crate::journal::Journal;
    use homesim_domain::device::{Device, Light, Lock};

    struct Home {
        registry: Arc<Registry>,
        light: Arc<dyn Device>,
    }

    fn home(door: Option<bool>) -> Home {
        let registry = Arc::new(Registry::new(Arc::new(Journal::default())));
        let light = registry
            .add_device(Arc::new(Light::new("Living Room Light").unwrap()))
            .unwrap();
        light.turn_on();
        if let Some(locked) = door {
            let lock = Lock::new(FRONT_DOOR).unwrap();
            if !locked {
                lock.unlock();
            }
            registry.add_device(Arc::new(lock)).unwrap();
        }
        Home { registry, light }
    }

    #[test]
    fn should_refuse_turning_light_off_when_door_unlocked() {
        let home = home(Some(false));
        let command = AuthorizationWrapper::new(
            TurnOffLight::new(home.light.clone()),
            home.registry.clone(),
        );

        let outcome = command.execute();

        assert_eq!(
            outcome,
            CommandOutcome::Refused("Refused: lights stay on while Front Door is unlocked".into())
        );
        assert!(home.light.is_on());
    }

    #[test]
    fn should_delegate_when_door_locked() {
        let home = home(Some(true));
        let command = AuthorizationWrapper::new(
            TurnOffLight::new(home.light.clone()),
            home.registry.clone(),
        );

        let outcome = command.execute();

        assert_eq!(outcome.message(), "Living Room Light turned off");
        assert!(!home.light.is_on());
    }

    #[test]
    fn should_delegate_when_door_absent() {
        let home = home(None);
        let command = AuthorizationWrapper::new(
            TurnOffLight::new(home.light.clone()),
            home.registry.clone(),
        );

        assert!(!command.execute().is_refused());
        assert!(!home.light.is_on());
    }

    #[test]
    fn should_not_gate_other_commands_when_door_unlocked() {
        let home = home(Some(false));
        let command = AuthorizationWrapper::new(
            TurnOnLight::new(home.light.clone()),
            home.registry.clone(),
        );
        assert!(!command.execute().is_refused());
    }

    #[test]
    fn should_always_delegate_undo() {
        let home = home(Some(false));
        let command = AuthorizationWrapper::new(
            TurnOffLight::new(home.light.clone()),
            home.registry.clone(),
        );
        home.light.turn_off();

        assert_eq!(command.undo(), "Living Room Light turned on");
        assert!(home.light.is_on());
    }

    #[test]
    fn should_see_door_state_at_execution_time() {
        let home = home(Some(false));
        let command = AuthorizationWrapper::new(
            TurnOffLight::new(home.light.clone()),
            home.registry.clone(),
        );
        assert!(command.execute().is_refused());

        let door = home.registry.find_device(FRONT_DOOR).unwrap();
        LockDoor::for_device(door).unwrap().execute();

        assert!(!command.execute().is_refused());
        assert!(!home.light.is_on());
    }

    #[test]
    fn should_ignore_non_lock_device_named_like_the_door() {
        let registry = Arc::new(Registry::new(Arc::new(Journal::default())));
        registry
            .add_device(Arc::new(Light::new(FRONT_DOOR).unwrap()))
            .unwrap();
        assert_eq!(
            LockedDoorRule::default().check(CommandKind::TurnOffLight, &registry),
            None
        );
    }

    #[test]
    fn should_apply_custom_rule() {
        struct Never;
        impl SafetyRule for Never {
            fn check(&self, _: CommandKind, _: &Registry) -> Option<String> {
                Some("maintenance".to_string())
            }
        }

        let home = home(None);
        let command = AuthorizationWrapper::with_rule(
            TurnOnLight::new(home.light.clone()),
            home.registry.clone(),
            Never,
        );
        home.light.turn_off();

        assert_eq!(command.execute(), CommandOutcome::Refused("maintenance".into()));
        assert!(!home.light.is_on());
    }

    #[test]
    fn should_label_with_inner_command() {
        let home = home(None);
        let command = AuthorizationWrapper::new(TurnOffLight::new(home.light), home.registry);
        assert_eq!(command.label(), "Authorized(TurnOffLight)");
        assert_eq!(command.kind(), CommandKind::TurnOffLight);
    }
}
