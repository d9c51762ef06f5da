//! Temperature sensor: holds the last numeric reading.

use std::sync::{Arc, Mutex, PoisonError};

use super::{Device, DeviceBase, DeviceKind, DeviceObserver};
use crate::error::ValidationError;
use crate::id::DeviceId;

/// Reading a freshly created sensor reports, in degrees Celsius.
pub const DEFAULT_TEMPERATURE: f64 = 20.0;

/// A temperature sensor. The inherited power toggle exists but carries no
/// meaning for readings.
pub struct TemperatureSensor {
    base: DeviceBase,
    temperature: Mutex<f64>,
}

impl TemperatureSensor {
    /// Create a sensor reading [`DEFAULT_TEMPERATURE`].
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyName`] when `name` is blank.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self {
            base: DeviceBase::new(name.into())?,
            temperature: Mutex::new(DEFAULT_TEMPERATURE),
        })
    }

    #[must_use]
    pub fn temperature(&self) -> f64 {
        *self.temperature.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Record a new reading and notify observers.
    pub fn set_temperature(&self, celsius: f64) -> String {
        *self.temperature.lock().unwrap_or_else(PoisonError::into_inner) = celsius;
        self.base.notify(self);
        format!("{} reads {celsius:.1}\u{b0}C", self.base.name())
    }
}

impl Device for TemperatureSensor {
    fn id(&self) -> DeviceId {
        self.base.id()
    }

    fn name(&self) -> &str {
        self.base.name()
    }

    fn kind(&self) -> DeviceKind {
        DeviceKind::TemperatureSensor
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

    fn as_temperature_sensor(&self) -> Option<&TemperatureSensor> {
        Some(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::device::tests::RecordingObserver;

    #[test]
    fn should_default_to_twenty_degrees() {
        let sensor = TemperatureSensor::new("Thermostat").unwrap();
        assert!((sensor.temperature() - 20.0).abs() < f64::EPSILON);
    }

    #[test]
    fn should_report_reading_with_one_decimal() {
        let sensor = TemperatureSensor::new("Thermostat").unwrap();
        assert_eq!(sensor.set_temperature(16.0), "Thermostat reads 16.0\u{b0}C");
    }

    #[test]
    fn should_notify_observer_with_new_reading() {
        let sensor = TemperatureSensor::new("Thermostat").unwrap();
        let observer = Arc::new(RecordingObserver::default());
        sensor.subscribe(observer.clone());

        sensor.set_temperature(-3.5);

        assert_eq!(observer.count(), 1);
        assert_eq!(observer.last().unwrap().temperature, Some(-3.5));
    }

    #[test]
    fn should_leave_reading_alone_when_toggled() {
        let sensor = TemperatureSensor::new("Thermostat").unwrap();
        sensor.set_temperature(17.0);
        sensor.turn_on();
        assert!(sensor.is_on());
        assert!((sensor.temperature() - 17.0).abs() < f64::EPSILON);
    }
}
