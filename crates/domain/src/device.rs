//! Device: a controllable thing in the home with on/off state.
//!
//! Every device shares a common core ([`DeviceBase`]): an immutable name, a
//! power flag and a list of subscribed [`DeviceObserver`]s. Variants add
//! their own state on top (lock bolt, temperature reading, wrapped legacy
//! hardware).
//!
//! ## Transition contract
//!
//! Every transition (`turn_on`, `turn_off`, `lock`, `unlock`,
//! `set_temperature`):
//! 1. applies the mutation,
//! 2. notifies every current observer exactly once, with the device in its
//!    new state,
//! 3. returns a human-readable confirmation.
//!
//! There are no preconditions here; gating belongs to command decorators.

mod legacy;
mod light;
mod lock;
mod observer;
mod sensor;

pub use legacy::{LegacyDevice, LegacyDeviceAdapter};
pub use light::Light;
pub use lock::Lock;
pub use observer::DeviceObserver;
pub use sensor::TemperatureSensor;

use std::sync::{Arc, Mutex, PoisonError};

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::id::DeviceId;

/// Discriminant of the concrete device variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeviceKind {
    Light,
    Lock,
    TemperatureSensor,
    Legacy,
}

impl std::fmt::Display for DeviceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Light => f.write_str("light"),
            Self::Lock => f.write_str("lock"),
            Self::TemperatureSensor => f.write_str("temperature_sensor"),
            Self::Legacy => f.write_str("legacy"),
        }
    }
}

/// Common capability set of every device.
pub trait Device: Send + Sync {
    fn id(&self) -> DeviceId;

    fn name(&self) -> &str;

    fn kind(&self) -> DeviceKind;

    fn is_on(&self) -> bool;

    /// Switch the device on and notify observers.
    fn turn_on(&self) -> String;

    /// Switch the device off and notify observers.
    fn turn_off(&self) -> String;

    /// Register an observer; it is notified on every later transition.
    fn subscribe(&self, observer: Arc<dyn DeviceObserver>);

    fn observer_count(&self) -> usize;

    /// Borrow the device as a [`Lock`], if it is one.
    fn as_lock(&self) -> Option<&Lock> {
        None
    }

    /// Convert a shared handle into a shared [`Lock`] handle, if it is one.
    fn into_lock(self: Arc<Self>) -> Option<Arc<Lock>> {
        None
    }

    /// Borrow the device as a [`TemperatureSensor`], if it is one.
    fn as_temperature_sensor(&self) -> Option<&TemperatureSensor> {
        None
    }

    /// Serializable view of the current state.
    fn snapshot(&self) -> DeviceSnapshot {
        DeviceSnapshot {
            id: self.id(),
            name: self.name().to_string(),
            kind: self.kind(),
            is_on: self.is_on(),
            is_locked: self.as_lock().map(Lock::is_locked),
            temperature: self.as_temperature_sensor().map(TemperatureSensor::temperature),
        }
    }
}

/// Point-in-time view of a device, for renderers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceSnapshot {
    pub id: DeviceId,
    pub name: String,
    pub kind: DeviceKind,
    pub is_on: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_locked: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
}

/// Identity, power flag and observers shared by all variants.
pub(crate) struct DeviceBase {
    id: DeviceId,
    name: String,
    on: Mutex<bool>,
    observers: Mutex<Vec<Arc<dyn DeviceObserver>>>,
}

impl DeviceBase {
    pub(crate) fn new(name: String) -> Result<Self, ValidationError> {
        if name.trim().is_empty() {
            return Err(ValidationError::EmptyName);
        }
        Ok(Self {
            id: DeviceId::new(),
            name,
            on: Mutex::new(false),
            observers: Mutex::new(Vec::new()),
        })
    }

    pub(crate) fn id(&self) -> DeviceId {
        self.id
    }

    pub(crate) fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn is_on(&self) -> bool {
        *self.on.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub(crate) fn set_on(&self, on: bool) {
        *self.on.lock().unwrap_or_else(PoisonError::into_inner) = on;
    }

    pub(crate) fn subscribe(&self, observer: Arc<dyn DeviceObserver>) {
        self.observers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(observer);
    }

    pub(crate) fn observer_count(&self) -> usize {
        self.observers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Fan the change out to every observer.
    ///
    /// The observer list is copied first so no lock is held while observers
    /// run; they are free to read `device` or subscribe further observers.
    pub(crate) fn notify(&self, device: &dyn Device) {
        let observers = self
            .observers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();
        for observer in &observers {
            observer.on_device_changed(device);
        }
    }

    /// Shared `turn_on`/`turn_off` body for variants without extra behaviour.
    pub(crate) fn switch(&self, device: &dyn Device, on: bool) -> String {
        self.set_on(on);
        self.notify(device);
        if on {
            format!("{} turned on", self.name)
        } else {
            format!("{} turned off", self.name)
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Observer recording every notification it receives.
    #[derive(Default)]
    pub(crate) struct RecordingObserver {
        pub(crate) seen: Mutex<Vec<DeviceSnapshot>>,
    }

    impl RecordingObserver {
        pub(crate) fn count(&self) -> usize {
            self.seen.lock().unwrap().len()
        }

        pub(crate) fn last(&self) -> Option<DeviceSnapshot> {
            self.seen.lock().unwrap().last().cloned()
        }
    }

    impl DeviceObserver for RecordingObserver {
        fn on_device_changed(&self, device: &dyn Device) {
            self.seen.lock().unwrap().push(device.snapshot());
        }
    }

    #[test]
    fn should_reject_blank_name() {
        assert!(matches!(
            DeviceBase::new("   ".to_string()),
            Err(ValidationError::EmptyName)
        ));
    }

    #[test]
    fn should_snapshot_lock_with_bolt_state() {
        let door = Lock::new("Front Door").unwrap();
        let snapshot = door.snapshot();
        assert_eq!(snapshot.kind, DeviceKind::Lock);
        assert_eq!(snapshot.is_locked, Some(true));
        assert_eq!(snapshot.temperature, None);
    }

    #[test]
    fn should_omit_absent_fields_when_serializing_snapshot() {
        let light = Light::new("Hall Light").unwrap();
        let json = serde_json::to_value(light.snapshot()).unwrap();
        assert_eq!(json["kind"], "light");
        assert_eq!(json["is_on"], false);
        assert!(json.get("is_locked").is_none());
        assert!(json.get("temperature").is_none());
    }

    #[test]
    fn should_display_kind_in_snake_case() {
        assert_eq!(DeviceKind::TemperatureSensor.to_string(), "temperature_sensor");
    }

    #[test]
    fn should_only_convert_locks_into_lock_handles() {
        let door: Arc<dyn Device> = Arc::new(Lock::new("Front Door").unwrap());
        let light: Arc<dyn Device> = Arc::new(Light::new("Hall Light").unwrap());
        assert!(door.into_lock().is_some());
        assert!(light.into_lock().is_none());
    }
}
