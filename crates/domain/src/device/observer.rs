//! Observer capability for device change notifications.

use super::Device;

/// Subscriber notified synchronously after every device transition.
///
/// `device` is already in its post-transition state when the call is made.
pub trait DeviceObserver: Send + Sync {
    fn on_device_changed(&self, device: &dyn Device);
}
