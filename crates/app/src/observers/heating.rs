//! Heating strategy selector: swaps the heating strategy from sensor readings.

use std::sync::{Arc, Mutex, PoisonError};

use homesim_domain::device::{Device, DeviceObserver};
use homesim_domain::event::LogEntry;
use homesim_domain::heating::{COMFORT_BELOW_CELSIUS, HeatingStrategy};

use crate::ports::LogSink;

/// Observes temperature sensors and keeps exactly one active strategy.
///
/// A reading below the threshold selects [`HeatingStrategy::Comfort`] and
/// logs an activation line, every time. Any other reading selects
/// [`HeatingStrategy::Eco`] without logging. Notifications from devices
/// that are not temperature sensors are ignored.
pub struct HeatingStrategySelector {
    active: Mutex<HeatingStrategy>,
    comfort_below: f64,
    sink: Arc<dyn LogSink>,
}

impl HeatingStrategySelector {
    /// Selector using the standard threshold, starting in eco mode.
    pub fn new(sink: Arc<dyn LogSink>) -> Self {
        Self::with_threshold(sink, COMFORT_BELOW_CELSIUS)
    }

    /// Selector with a custom comfort threshold, in degrees Celsius.
    pub fn with_threshold(sink: Arc<dyn LogSink>, comfort_below: f64) -> Self {
        Self {
            active: Mutex::new(HeatingStrategy::default()),
            comfort_below,
            sink,
        }
    }

    #[must_use]
    pub fn active(&self) -> HeatingStrategy {
        *self.active.lock().unwrap_or_else(PoisonError::into_inner)
    }

    #[must_use]
    pub fn comfort_below(&self) -> f64 {
        self.comfort_below
    }

    /// Run the active strategy.
    #[must_use]
    pub fn heat(&self) -> String {
        self.active().heat().to_string()
    }
}

impl DeviceObserver for HeatingStrategySelector {
    fn on_device_changed(&self, device: &dyn Device) {
        let Some(sensor) = device.as_temperature_sensor() else {
            return;
        };
        let reading = sensor.temperature();
        let strategy = HeatingStrategy::for_reading(reading, self.comfort_below);
        *self.active.lock().unwrap_or_else(PoisonError::into_inner) = strategy;
        tracing::debug!(sensor = device.name(), reading, %strategy, "heating strategy selected");

        if strategy == HeatingStrategy::Comfort {
            self.sink.append(LogEntry::system(format!(
                "Heating system activated: {}",
                strategy.heat()
            )));
        }
    }
}
