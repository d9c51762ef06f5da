//! Bolt commands: lock or unlock a door.

use std::sync::Arc;

use homesim_domain::device::{Device, Lock};
use homesim_domain::error::HomeError;

use super::{Command, CommandKind, CommandOutcome};

/// Locks its door; undo unlocks it.
pub struct LockDoor {
    door: Arc<Lock>,
}

impl LockDoor {
    pub fn new(door: Arc<Lock>) -> Self {
        Self { door }
    }

    /// Bind to a registry device, which must be a lock.
    ///
    /// # Errors
    ///
    /// Returns [`HomeError::Unsupported`] when `device` is not a lock.
    pub fn for_device(device: Arc<dyn Device>) -> Result<Self, HomeError> {
        Ok(Self::new(Lock::from_device(device, "lock")?))
    }
}

impl Command for LockDoor {
    fn kind(&self) -> CommandKind {
        CommandKind::LockDoor
    }

    fn execute(&self) -> CommandOutcome {
        CommandOutcome::Executed(self.door.lock())
    }

    fn undo(&self) -> String {
        self.door.unlock()
    }
}

/// Unlocks its door; undo locks it.
pub struct UnlockDoor {
    door: Arc<Lock>,
}

impl UnlockDoor {
    pub fn new(door: Arc<Lock>) -> Self {
        Self { door }
    }

    /// Bind to a registry device, which must be a lock.
    ///
    /// # Errors
    ///
    /// Returns [`HomeError::Unsupported`] when `device` is not a lock.
    pub fn for_device(device: Arc<dyn Device>) -> Result<Self, HomeError> {
        Ok(Self::new(Lock::from_device(device, "unlock")?))
    }
}

impl Command for UnlockDoor {
    fn kind(&self) -> CommandKind {
        CommandKind::UnlockDoor
    }

    fn execute(&self) -> CommandOutcome {
        CommandOutcome::Executed(self.door.unlock())
    }

    fn undo(&self) -> String {
        self.door.lock()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use homesim_domain::device::Light;

    fn door() -> Arc<Lock> {
        Arc::new(Lock::new("Front Door").unwrap())
    }

    #[test]
    fn should_unlock_then_relock_on_undo() {
        let door = door();
        let command = UnlockDoor::new(door.clone());

        assert_eq!(command.execute().message(), "Front Door unlocked");
        assert!(!door.is_locked());

        assert_eq!(command.undo(), "Front Door locked");
        assert!(door.is_locked());
    }

    #[test]
    fn should_lock_then_unlock_on_undo() {
        let door = door();
        door.unlock();
        let command = LockDoor::new(door.clone());

        command.execute();
        assert!(door.is_locked());
        command.undo();
        assert!(!door.is_locked());
    }

    #[test]
    fn should_bind_to_lock_from_generic_handle() {
        let device: Arc<dyn Device> = door();
        let command = LockDoor::for_device(device.clone()).unwrap();
        device.as_lock().unwrap().unlock();

        command.execute();

        assert_eq!(device.as_lock().map(Lock::is_locked), Some(true));
    }

    #[test]
    fn should_refuse_to_bind_to_a_light() {
        let device: Arc<dyn Device> = Arc::new(Light::new("Porch Light").unwrap());
        assert!(matches!(
            UnlockDoor::for_device(device),
            Err(HomeError::Unsupported(_))
        ));
    }
}
