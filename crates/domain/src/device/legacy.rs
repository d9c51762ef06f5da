//! Legacy device adaptation.
//!
//! Older hardware speaks `activate`/`deactivate` instead of the on/off
//! contract. [`LegacyDeviceAdapter`] translates between the two so such
//! hardware can be registered, commanded and observed like any other device.

use std::sync::{Arc, Mutex, PoisonError};

use super::{Device, DeviceBase, DeviceKind, DeviceObserver};
use crate::error::ValidationError;
use crate::id::DeviceId;

/// Capability set of hardware that predates the device contract.
pub trait LegacyDevice: Send {
    /// Hardware model, used in confirmations.
    fn model(&self) -> &str;

    /// Start the hardware, returning its own status report.
    fn activate(&mut self) -> String;

    /// Stop the hardware, returning its own status report.
    fn deactivate(&mut self) -> String;
}

/// Exposes a [`LegacyDevice`] through the standard [`Device`] contract.
pub struct LegacyDeviceAdapter {
    base: DeviceBase,
    legacy: Mutex<Box<dyn LegacyDevice>>,
}

impl LegacyDeviceAdapter {
    /// Wrap `legacy` under the given device name. Starts off.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyName`] when `name` is blank.
    pub fn new(
        name: impl Into<String>,
        legacy: impl LegacyDevice + 'static,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            base: DeviceBase::new(name.into())?,
            legacy: Mutex::new(Box::new(legacy)),
        })
    }

    fn drive(&self, on: bool) -> String {
        let (model, report) = {
            let mut legacy = self.legacy.lock().unwrap_or_else(PoisonError::into_inner);
            let report = if on {
                legacy.activate()
            } else {
                legacy.deactivate()
            };
            (legacy.model().to_string(), report)
        };
        let confirmation = self.base.switch(self, on);
        format!("{confirmation} via {model}: {report}")
    }
}

impl Device for LegacyDeviceAdapter {
    fn id(&self) -> DeviceId {
        self.base.id()
    }

    fn name(&self) -> &str {
        self.base.name()
    }

    fn kind(&self) -> DeviceKind {
        DeviceKind::Legacy
    }

    fn is_on(&self) -> bool {
        self.base.is_on()
    }

    fn turn_on(&self) -> String {
        self.drive(true)
    }

    fn turn_off(&self) -> String {
        self.drive(false)
    }

    fn subscribe(&self, observer: Arc<dyn DeviceObserver>) {
        self.base.subscribe(observer);
    }

    fn observer_count(&self) -> usize {
        self.base.observer_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::device::tests::RecordingObserver;

    struct Relay {
        calls: Arc<Mutex<Vec<&'static str>>>,
    }

    impl LegacyDevice for Relay {
        fn model(&self) -> &str {
            "Relay-9"
        }

        fn activate(&mut self) -> String {
            self.calls.lock().unwrap().push("activate");
            "relay closed".to_string()
        }

        fn deactivate(&mut self) -> String {
            self.calls.lock().unwrap().push("deactivate");
            "relay open".to_string()
        }
    }

    fn adapter() -> (LegacyDeviceAdapter, Arc<Mutex<Vec<&'static str>>>) {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let relay = Relay {
            calls: calls.clone(),
        };
        (LegacyDeviceAdapter::new("Garden Pump", relay).unwrap(), calls)
    }

    #[test]
    fn should_translate_turn_on_into_activate() {
        let (pump, calls) = adapter();
        let text = pump.turn_on();
        assert!(pump.is_on());
        assert_eq!(*calls.lock().unwrap(), vec!["activate"]);
        assert_eq!(text, "Garden Pump turned on via Relay-9: relay closed");
    }

    #[test]
    fn should_translate_turn_off_into_deactivate() {
        let (pump, calls) = adapter();
        pump.turn_on();
        let text = pump.turn_off();
        assert!(!pump.is_on());
        assert_eq!(*calls.lock().unwrap(), vec!["activate", "deactivate"]);
        assert!(text.ends_with("relay open"));
    }

    #[test]
    fn should_notify_observers_like_any_device() {
        let (pump, _) = adapter();
        let observer = Arc::new(RecordingObserver::default());
        pump.subscribe(observer.clone());

        pump.turn_on();

        assert_eq!(observer.count(), 1);
        assert_eq!(observer.last().unwrap().kind, DeviceKind::Legacy);
    }
}
