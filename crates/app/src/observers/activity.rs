//! Activity logger: one `system` line per device change.

use std::sync::Arc;

use homesim_domain::device::{Device, DeviceKind, DeviceObserver};
use homesim_domain::event::LogEntry;

use crate::ports::LogSink;

/// Writes the new state of every device it observes to the system stream.
pub struct ActivityLogger {
    sink: Arc<dyn LogSink>,
}

impl ActivityLogger {
    pub fn new(sink: Arc<dyn LogSink>) -> Self {
        Self { sink }
    }
}

fn describe(device: &dyn Device) -> String {
    let power = if device.is_on() { "on" } else { "off" };
    match device.kind() {
        DeviceKind::Lock => {
            let bolt = match device.as_lock() {
                Some(lock) if !lock.is_locked() => "unlocked",
                _ => "locked",
            };
            format!("{} is now {bolt} (power {power})", device.name())
        }
        DeviceKind::TemperatureSensor => match device.as_temperature_sensor() {
            Some(sensor) => format!(
                "{} now reads {:.1}\u{b0}C",
                device.name(),
                sensor.temperature()
            ),
            None => format!("{} changed", device.name()),
        },
        DeviceKind::Light | DeviceKind::Legacy => format!("{} is now {power}", device.name()),
    }
}

impl DeviceObserver for ActivityLogger {
    fn on_device_changed(&self, device: &dyn Device) {
        self.sink.append(LogEntry::system(describe(device)));
    }
}
