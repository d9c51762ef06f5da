//! Light: plain on/off device.

use std::sync::Arc;

use super::{Device, DeviceBase, DeviceKind, DeviceObserver};
use crate::error::ValidationError;
use crate::id::DeviceId;

/// A light that can be switched on and off. Starts off.
pub struct Light {
    base: DeviceBase,
}

impl Light {
    /// Create a light.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyName`] when `name` is blank.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self {
            base: DeviceBase::new(name.into())?,
        })
    }
}

impl Device for Light {
    fn id(&self) -> DeviceId {
        self.base.id()
    }

    fn name(&self) -> &str {
        self.base.name()
    }

    fn kind(&self) -> DeviceKind {
        DeviceKind::Light
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
}
