//! Heating strategies: interchangeable behaviours selected from sensor readings.

use serde::{Deserialize, Serialize};

/// Readings strictly below this value select [`HeatingStrategy::Comfort`].
pub const COMFORT_BELOW_CELSIUS: f64 = 18.0;

/// Heating behaviour. Stateless: a strategy only describes what heating does
/// while it is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeatingStrategy {
    /// Low target temperature, energy saving.
    #[default]
    Eco,
    /// Higher target temperature, heats quickly.
    Comfort,
}

impl HeatingStrategy {
    /// Pick the strategy for a temperature reading.
    ///
    /// `NaN` never compares below the threshold and therefore selects
    /// [`Eco`](Self::Eco).
    #[must_use]
    pub fn for_reading(celsius: f64, comfort_below: f64) -> Self {
        if celsius < comfort_below {
            Self::Comfort
        } else {
            Self::Eco
        }
    }

    /// Describe what heating does under this strategy.
    #[must_use]
    pub fn heat(self) -> &'static str {
        match self {
            Self::Eco => "Eco mode: holding 19\u{b0}C to save energy",
            Self::Comfort => "Comfort mode: heating to 22\u{b0}C",
        }
    }
}

impl std::fmt::Display for HeatingStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Eco => f.write_str("eco"),
            Self::Comfort => f.write_str("comfort"),
        }
    }
}
