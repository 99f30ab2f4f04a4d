use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Cockpit switches that gate the engine state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineSwitches {
    /// Starter motor engaged (key held in START).
    pub starter: bool,
    /// Master switch, battery or alternator power available to the starter.
    pub electrical_power: bool,
    /// Magnetos on.
    pub ignition: bool,
    /// Fuel selector open and mixture not at cut-off.
    pub fuel_selector: bool,
}

impl Default for EngineSwitches {
    fn default() -> Self {
        Self {
            starter: false,
            electrical_power: true,
            ignition: true,
            fuel_selector: true,
        }
    }
}

impl EngineSwitches {
    pub fn all_off() -> Self {
        Self {
            starter: false,
            electrical_power: false,
            ignition: false,
            fuel_selector: false,
        }
    }
}

/// Pilot inputs for one tick.
///
/// Axes are normalized; values outside their range are clamped when the
/// tick samples them, never rejected.
#[derive(Component, Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ControlInputs {
    /// Elevator, -1 (nose down) to 1 (nose up).
    pub pitch: f64,
    /// Aileron, -1 to 1 (right wing down).
    pub roll: f64,
    /// Rudder, -1 to 1 (nose right).
    pub yaw: f64,
    /// 0 to 1.
    pub throttle: f64,
    /// -1 to 1.
    pub pitch_trim: f64,
    /// Toe brakes, 0 to 1.
    pub brakes: f64,
    /// Flap deflection, 0 (up) to 1 (full).
    pub flaps: f64,
    pub parking_brake: bool,
    pub switches: EngineSwitches,
}

impl ControlInputs {
    pub fn with_throttle(throttle: f64) -> Self {
        Self {
            throttle,
            ..Default::default()
        }
    }

    pub fn clamped(&self) -> Self {
        Self {
            pitch: saturate(self.pitch, -1.0, 1.0),
            roll: saturate(self.roll, -1.0, 1.0),
            yaw: saturate(self.yaw, -1.0, 1.0),
            throttle: saturate(self.throttle, 0.0, 1.0),
            pitch_trim: saturate(self.pitch_trim, -1.0, 1.0),
            brakes: saturate(self.brakes, 0.0, 1.0),
            flaps: saturate(self.flaps, 0.0, 1.0),
            parking_brake: self.parking_brake,
            switches: self.switches,
        }
    }

    /// Brake demand seen by the wheels; a set parking brake means full brakes.
    pub fn effective_brakes(&self) -> f64 {
        if self.parking_brake {
            1.0
        } else {
            self.brakes
        }
    }
}

/// Clamps an axis into range; a non-finite reading falls back to neutral.
fn saturate(value: f64, min: f64, max: f64) -> f64 {
    if value.is_finite() {
        value.clamp(min, max)
    } else {
        0.0
    }
}
