//! Registry: the home's devices and users, looked up by name.
//!
//! One registry is built at startup and shared explicitly
//! (`Arc<Registry>`) with everything that needs it; there is no global
//! instance. Names are unique within each collection and lookups return the
//! first match in registration order.

use std::sync::{Arc, PoisonError, RwLock};

use homesim_domain::device::{Device, DeviceKind, DeviceObserver};
use homesim_domain::error::{ConflictError, HomeError};
use homesim_domain::user::User;

use crate::messaging::MessageRouter;
use crate::ports::LogSink;

/// Observer wiring applied to devices as they are registered.
struct Subscription {
    only: Option<DeviceKind>,
    observer: Arc<dyn DeviceObserver>,
}

impl Subscription {
    fn applies_to(&self, device: &dyn Device) -> bool {
        self.only.is_none_or(|kind| kind == device.kind())
    }
}

/// Home-wide store of devices and users, plus the message router between
/// those users.
pub struct Registry {
    devices: RwLock<Vec<Arc<dyn Device>>>,
    subscriptions: RwLock<Vec<Subscription>>,
    router: MessageRouter,
}

impl Registry {
    /// Create an empty registry; chat traffic is logged to `chat_sink`.
    pub fn new(chat_sink: Arc<dyn LogSink>) -> Self {
        Self {
            devices: RwLock::new(Vec::new()),
            subscriptions: RwLock::new(Vec::new()),
            router: MessageRouter::new(chat_sink),
        }
    }

    /// Subscribe `observer` to every device, registered now or later.
    pub fn observe_all(&self, observer: Arc<dyn DeviceObserver>) {
        self.observe(None, observer);
    }

    /// Subscribe `observer` to every device of `kind`, registered now or later.
    pub fn observe_kind(&self, kind: DeviceKind, observer: Arc<dyn DeviceObserver>) {
        self.observe(Some(kind), observer);
    }

    fn observe(&self, only: Option<DeviceKind>, observer: Arc<dyn DeviceObserver>) {
        // Same lock order as `add_device`: a device registered concurrently
        // either is in this list or sees the new subscription.
        let devices = self.devices.read().unwrap_or_else(PoisonError::into_inner);
        let mut subscriptions = self
            .subscriptions
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        let subscription = Subscription { only, observer };
        for device in devices.iter() {
            if subscription.applies_to(device.as_ref()) {
                device.subscribe(subscription.observer.clone());
            }
        }
        subscriptions.push(subscription);
    }

    /// Register a device, wiring the matching observers to it.
    ///
    /// # Errors
    ///
    /// Returns [`HomeError::Conflict`] when a device with the same name is
    /// already registered.
    #[tracing::instrument(skip(self, device), fields(device_name = %device.name()))]
    pub fn add_device(&self, device: Arc<dyn Device>) -> Result<Arc<dyn Device>, HomeError> {
        let mut devices = self.devices.write().unwrap_or_else(PoisonError::into_inner);
        if devices.iter().any(|d| d.name() == device.name()) {
            return Err(ConflictError {
                entity: "Device",
                name: device.name().to_string(),
            }
            .into());
        }
        for subscription in self
            .subscriptions
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
        {
            if subscription.applies_to(device.as_ref()) {
                device.subscribe(subscription.observer.clone());
            }
        }
        devices.push(device.clone());
        tracing::debug!(device_id = %device.id(), kind = %device.kind(), "device registered");
        Ok(device)
    }

    /// Look up a device by exact name.
    #[must_use]
    pub fn find_device(&self, name: &str) -> Option<Arc<dyn Device>> {
        self.devices
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .find(|d| d.name() == name)
            .cloned()
    }

    /// All devices, in registration order.
    #[must_use]
    pub fn devices(&self) -> Vec<Arc<dyn Device>> {
        self.devices
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Register a user with the message router.
    ///
    /// # Errors
    ///
    /// Returns [`HomeError::Conflict`] when a user with the same name is
    /// already registered.
    pub fn add_user(&self, user: User) -> Result<Arc<User>, HomeError> {
        Ok(self.router.register(user)?)
    }

    /// Look up a user by exact name.
    #[must_use]
    pub fn find_user(&self, name: &str) -> Option<Arc<User>> {
        self.router.find_user(name)
    }

    /// All users, in registration order.
    #[must_use]
    pub fn users(&self) -> Vec<Arc<User>> {
        self.router.users()
    }

    #[must_use]
    pub fn router(&self) -> &MessageRouter {
        &self.router
    }
}
