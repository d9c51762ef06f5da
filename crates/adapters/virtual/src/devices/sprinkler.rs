//! Virtual sprinkler: opens and closes its valves on request.

use homesim_domain::device::LegacyDevice;

const DEFAULT_ZONES: u8 = 3;

/// A simulated irrigation controller.
///
/// Activating an already running sprinkler keeps it running and does not
/// start a new cycle.
#[derive(Debug)]
pub struct VirtualSprinkler {
    zones: u8,
    watering: bool,
    cycles: u32,
}

impl Default for VirtualSprinkler {
    fn default() -> Self {
        Self::with_zones(DEFAULT_ZONES)
    }
}

impl VirtualSprinkler {
    #[must_use]
    pub fn with_zones(zones: u8) -> Self {
        Self {
            zones,
            watering: false,
            cycles: 0,
        }
    }

    #[must_use]
    pub fn is_watering(&self) -> bool {
        self.watering
    }

    /// Completed or running watering cycles.
    #[must_use]
    pub fn cycles(&self) -> u32 {
        self.cycles
    }
}

impl LegacyDevice for VirtualSprinkler {
    fn model(&self) -> &str {
        "VSprinkler-1"
    }

    fn activate(&mut self) -> String {
        if self.watering {
            return format!("already watering {} zones", self.zones);
        }
        self.watering = true;
        self.cycles += 1;
        format!("valves open, watering {} zones", self.zones)
    }

    fn deactivate(&mut self) -> String {
        if !self.watering {
            return "valves already closed".to_string();
        }
        self.watering = false;
        format!("valves closed after cycle {}", self.cycles)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_default_to_idle() {
        let sprinkler = VirtualSprinkler::default();
        assert!(!sprinkler.is_watering());
        assert_eq!(sprinkler.cycles(), 0);
    }

    #[test]
    fn should_open_valves_when_activated() {
        let mut sprinkler = VirtualSprinkler::with_zones(2);
        assert_eq!(sprinkler.activate(), "valves open, watering 2 zones");
        assert!(sprinkler.is_watering());
        assert_eq!(sprinkler.cycles(), 1);
    }

    #[test]
    fn should_not_count_a_cycle_when_already_watering() {
        let mut sprinkler = VirtualSprinkler::default();
        sprinkler.activate();
        assert_eq!(sprinkler.activate(), "already watering 3 zones");
        assert_eq!(sprinkler.cycles(), 1);
    }

    #[test]
    fn should_close_valves_when_deactivated() {
        let mut sprinkler = VirtualSprinkler::default();
        sprinkler.activate();
        assert_eq!(sprinkler.deactivate(), "valves closed after cycle 1");
        assert!(!sprinkler.is_watering());
        assert_eq!(sprinkler.deactivate(), "valves already closed");
    }
}
