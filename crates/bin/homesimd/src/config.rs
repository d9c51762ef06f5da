//! Configuration loading: TOML file with environment variable overrides.
//!
//! Looks for `homesim.toml` in the working directory. Every field has a
//! sensible default so the file is optional. Environment variables take
//! precedence over file values.

use std::collections::HashSet;

use homesim_adapter_virtual::VirtualModel;
use homesim_domain::device::DeviceKind;
use homesim_domain::heating::COMFORT_BELOW_CELSIUS;
use serde::Deserialize;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Logging settings.
    pub logging: LoggingConfig,
    /// Journal settings.
    pub journal: JournalConfig,
    /// Heating strategy settings.
    pub heating: HeatingConfig,
    /// Journal rendering settings.
    pub output: OutputConfig,
    /// Devices and users making up the home.
    pub home: HomeConfig,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

/// Journal configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct JournalConfig {
    /// Entries buffered on the live channel. A printer that falls further
    /// behind reads the rest back from the journal.
    pub capacity: usize,
}

/// Heating configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct HeatingConfig {
    /// Readings strictly below this temperature (°C) select comfort mode.
    pub comfort_below: f64,
}

/// How journal lines are printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `[HH:MM:SS] category text`
    #[default]
    Text,
    /// One JSON object per line.
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(ConfigError::Validation(format!(
                "unknown output format {other:?}"
            ))),
        }
    }
}

/// Output configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
}

/// One device of the home.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DeviceConfig {
    pub kind: DeviceKind,
    pub name: String,
    /// Simulated hardware behind a `legacy` device. Ignored for other kinds.
    #[serde(default)]
    pub model: VirtualModel,
}

impl DeviceConfig {
    fn new(kind: DeviceKind, name: &str) -> Self {
        Self {
            kind,
            name: name.to_string(),
            model: VirtualModel::default(),
        }
    }
}

/// Layout of the home.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct HomeConfig {
    /// Devices, registered in this order.
    pub devices: Vec<DeviceConfig>,
    /// User names, registered in this order.
    pub users: Vec<String>,
}

impl Config {
    /// Load configuration from `homesim.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if the
    /// resulting configuration is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file("homesim.toml")?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    fn apply_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(val) = var("HOMESIM_LOG") {
            self.logging.filter = val;
        }
        if let Some(val) = var("RUST_LOG") {
            self.logging.filter = val;
        }
        if let Some(val) = var("HOMESIM_COMFORT_BELOW")
            && let Ok(threshold) = val.parse()
        {
            self.heating.comfort_below = threshold;
        }
        if let Some(val) = var("HOMESIM_OUTPUT")
            && let Ok(format) = val.parse()
        {
            self.output.format = format;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.journal.capacity == 0 {
            return Err(ConfigError::Validation(
                "journal capacity must be non-zero".to_string(),
            ));
        }
        if !self.heating.comfort_below.is_finite() {
            return Err(ConfigError::Validation(
                "comfort threshold must be a finite number".to_string(),
            ));
        }
        let mut devices = HashSet::new();
        for device in &self.home.devices {
            if !devices.insert(device.name.as_str()) {
                return Err(ConfigError::Validation(format!(
                    "device {:?} is declared twice",
                    device.name
                )));
            }
        }
        let mut users = HashSet::new();
        for user in &self.home.users {
            if !users.insert(user.as_str()) {
                return Err(ConfigError::Validation(format!(
                    "user {user:?} is declared twice"
                )));
            }
        }
        Ok(())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "homesimd=info,homesim_app=info".to_string(),
        }
    }
}

impl Default for JournalConfig {
    fn default() -> Self {
        Self { capacity: 256 }
    }
}

impl Default for HeatingConfig {
    fn default() -> Self {
        Self {
            comfort_below: COMFORT_BELOW_CELSIUS,
        }
    }
}

impl Default for HomeConfig {
    fn default() -> Self {
        Self {
            devices: vec![
                DeviceConfig::new(DeviceKind::Light, "Living Room Light"),
                DeviceConfig::new(DeviceKind::Lock, "Front Door"),
                DeviceConfig::new(DeviceKind::TemperatureSensor, "Thermostat"),
                DeviceConfig::new(DeviceKind::Legacy, "Garden Sprinkler"),
            ],
            users: vec!["John".to_string(), "Mary".to_string(), "Paul".to_string()],
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}
