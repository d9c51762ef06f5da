//! # homesim-adapter-virtual
//!
//! Simulated legacy hardware for demos and tests. None of these devices
//! speak the on/off contract; they are registered in the home through
//! [`LegacyDeviceAdapter`].
//!
//! ## Provided models
//!
//! | Model | Config value | Behaviour |
//! |-------|--------------|-----------|
//! | Virtual Sprinkler | `sprinkler` | Opens / closes its valves, counts watering cycles |
//! | Virtual Garage Opener | `garage-opener` | Raises / lowers the door, counts motor runs |
//!
//! ## Dependency rule
//!
//! Depends on `homesim-domain` only.

mod devices;

use homesim_domain::device::LegacyDeviceAdapter;
use homesim_domain::error::ValidationError;
use serde::{Deserialize, Serialize};

pub use devices::{VirtualGarageOpener, VirtualSprinkler};

/// Catalog of the simulated legacy models.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VirtualModel {
    #[default]
    Sprinkler,
    GarageOpener,
}

impl VirtualModel {
    /// Build the simulated hardware and wrap it under `name`.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyName`] when `name` is blank.
    pub fn adapter(self, name: impl Into<String>) -> Result<LegacyDeviceAdapter, ValidationError> {
        let name = name.into();
        tracing::debug!(device_name = %name, model = %self, "creating virtual legacy device");
        match self {
            Self::Sprinkler => LegacyDeviceAdapter::new(name, VirtualSprinkler::default()),
            Self::GarageOpener => LegacyDeviceAdapter::new(name, VirtualGarageOpener::default()),
        }
    }
}

impl std::fmt::Display for VirtualModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sprinkler => f.write_str("sprinkler"),
            Self::GarageOpener => f.write_str("garage-opener"),
        }
    }
}
