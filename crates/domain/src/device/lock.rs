//! Lock: door lock with a bolt state independent of its power flag.

use std::sync::{Arc, Mutex, PoisonError};

use super::{Device, DeviceBase, DeviceKind, DeviceObserver};
use crate::error::{UnsupportedDeviceError, ValidationError};
use crate::id::DeviceId;

/// A door lock. Starts locked.
///
/// `is_on` and `is_locked` are two orthogonal flags: powering the lock
/// does not move the bolt, and locking does not power it.
pub struct Lock {
    base: DeviceBase,
    locked: Mutex<bool>,
}

impl Lock {
    /// Create a lock, initially locked.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyName`] when `name` is blank.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self {
            base: DeviceBase::new(name.into())?,
            locked: Mutex::new(true),
        })
    }

    /// Narrow a generic device handle down to a lock.
    ///
    /// # Errors
    ///
    /// Returns [`UnsupportedDeviceError`] naming `operation` when the device
    /// is not a lock.
    pub fn from_device(
        device: Arc<dyn Device>,
        operation: &'static str,
    ) -> Result<Arc<Self>, UnsupportedDeviceError> {
        let name = device.name().to_string();
        device.into_lock().ok_or(UnsupportedDeviceError {
            operation,
            device: name,
        })
    }

    #[must_use]
    pub fn is_locked(&self) -> bool {
        *self.locked.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Throw the bolt and notify observers.
    pub fn lock(&self) -> String {
        self.set_locked(true);
        self.base.notify(self);
        format!("{} locked", self.base.name())
    }

    /// Retract the bolt and notify observers.
    pub fn unlock(&self) -> String {
        self.set_locked(false);
        self.base.notify(self);
        format!("{} unlocked", self.base.name())
    }

    fn set_locked(&self, locked: bool) {
        *self.locked.lock().unwrap_or_else(PoisonError::into_inner) = locked;
    }
}

impl Device for Lock {
    fn id(&self) -> DeviceId {
        self.base.id()
    }

    fn name(&self) -> &str {
        self.base.name()
    }

    fn kind(&self) -> DeviceKind {
        DeviceKind::Lock
    }

    fn is_on(&self) -> bool {
        self.base.is_on()
    }

    fn turn_on(&self) -> String {
        self.base.switch(self, true)
    }

    fn turn_off(&self) -> String {
        self.base.switch(self, false)
    }

    fn subscribe(&self, observer: Arc<dyn DeviceObserver>) {
        self.base.subscribe(observer);
    }

    fn observer_count(&self) -> usize {
        self.base.observer_count()
    }

    fn as_lock(&self) -> Option<&Lock> {
        Some(self)
    }

    fn into_lock(self: Arc<Self>) -> Option<Arc<Lock>> {
        Some(self)
    }
}
