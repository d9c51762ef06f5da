//! Virtual garage opener: raises and lowers a door with a motor.

use homesim_domain::device::LegacyDevice;

/// A simulated garage door opener. Every request runs the motor once.
#[derive(Debug, Default)]
pub struct VirtualGarageOpener {
    raised: bool,
    motor_runs: u32,
}

impl VirtualGarageOpener {
    #[must_use]
    pub fn is_raised(&self) -> bool {
        self.raised
    }

    #[must_use]
    pub fn motor_runs(&self) -> u32 {
        self.motor_runs
    }

    fn run_motor(&mut self, raise: bool) -> String {
        self.raised = raise;
        self.motor_runs += 1;
        let direction = if raise { "raised" } else { "lowered" };
        let plural = if self.motor_runs == 1 { "" } else { "s" };
        format!("door {direction} ({} motor run{plural})", self.motor_runs)
    }
}

impl LegacyDevice for VirtualGarageOpener {
    fn model(&self) -> &str {
        "VGarage-2"
    }

    fn activate(&mut self) -> String {
        self.run_motor(true)
    }

    fn deactivate(&mut self) -> String {
        self.run_motor(false)
    }
}
