//! Wiring of one home from its configuration.

use std::sync::Arc;

use homesim_app::invoker::Invoker;
use homesim_app::journal::Journal;
use homesim_app::observers::{ActivityLogger, HeatingStrategySelector};
use homesim_app::registry::Registry;
use homesim_app::scenario::ScenarioOrchestrator;
use homesim_domain::device::{
    Device, DeviceKind, DeviceSnapshot, Light, Lock, TemperatureSensor,
};
use homesim_domain::error::{HomeError, ValidationError};
use homesim_domain::user::User;

use crate::config::{Config, DeviceConfig};

/// A fully wired home: every component shares the same registry and journal.
pub struct Home {
    journal: Arc<Journal>,
    registry: Arc<Registry>,
    selector: Arc<HeatingStrategySelector>,
    orchestrator: ScenarioOrchestrator,
}

impl Home {
    /// Build the home described by `config`.
    ///
    /// Observers are wired before any device is registered, so every
    /// configured device is observed from its first transition.
    ///
    /// # Errors
    ///
    /// Returns [`HomeError::Validation`] for a blank device or user name and
    /// [`HomeError::Conflict`] for a name registered twice.
    #[tracing::instrument(skip_all)]
    pub fn build(config: &Config) -> Result<Self, HomeError> {
        let journal = Arc::new(Journal::new(config.journal.capacity));
        let registry = Arc::new(Registry::new(journal.clone()));

        let selector = Arc::new(HeatingStrategySelector::with_threshold(
            journal.clone(),
            config.heating.comfort_below,
        ));
        registry.observe_kind(DeviceKind::TemperatureSensor, selector.clone());
        registry.observe_all(Arc::new(ActivityLogger::new(journal.clone())));

        for device in &config.home.devices {
            registry.add_device(build_device(device)?)?;
        }
        for name in &config.home.users {
            registry.add_user(User::new(name.as_str())?)?;
        }

        let orchestrator =
            ScenarioOrchestrator::new(registry.clone(), Arc::new(Invoker::new()), journal.clone());

        tracing::info!(
            devices = config.home.devices.len(),
            users = config.home.users.len(),
            "home ready"
        );
        Ok(Self {
            journal,
            registry,
            selector,
            orchestrator,
        })
    }

    #[must_use]
    pub fn journal(&self) -> &Arc<Journal> {
        &self.journal
    }

    #[must_use]
    pub fn registry(&self) -> &Arc<Registry> {
        &self.registry
    }

    #[must_use]
    pub fn selector(&self) -> &Arc<HeatingStrategySelector> {
        &self.selector
    }

    #[must_use]
    pub fn orchestrator(&self) -> &ScenarioOrchestrator {
        &self.orchestrator
    }

    #[must_use]
    pub fn invoker(&self) -> &Arc<Invoker> {
        self.orchestrator.invoker()
    }

    /// First registered device of `kind`.
    #[must_use]
    pub fn first_of(&self, kind: DeviceKind) -> Option<Arc<dyn Device>> {
        self.registry
            .devices()
            .into_iter()
            .find(|device| device.kind() == kind)
    }

    /// Current state of every device, in registration order.
    #[must_use]
    pub fn snapshots(&self) -> Vec<DeviceSnapshot> {
        self.registry
            .devices()
            .iter()
            .map(|device| device.snapshot())
            .collect()
    }
}

fn build_device(config: &DeviceConfig) -> Result<Arc<dyn Device>, ValidationError> {
    let name = config.name.as_str();
    let device: Arc<dyn Device> = match config.kind {
        DeviceKind::Light => Arc::new(Light::new(name)?),
        DeviceKind::Lock => Arc::new(Lock::new(name)?),
        DeviceKind::TemperatureSensor => Arc::new(TemperatureSensor::new(name)?),
        DeviceKind::Legacy => Arc::new(config.model.adapter(name)?),
    };
    Ok(device)
}
