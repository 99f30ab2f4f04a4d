use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::utils::SEA_LEVEL_AIR_DENSITY;

/// Represents aerodynamic data for the aircraft.
#[derive(Component, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AirData {
    /// True airspeed of the aircraft (m/s).
    pub true_airspeed: f64,
    /// Speed over the horizontal plane (m/s).
    pub horizontal_speed: f64,
    /// Climb angle of the velocity vector (rad).
    pub flight_path_angle: f64,
    /// Angle of attack (rad), pitch minus flight path angle.
    pub angle_of_attack: f64,
    /// Dynamic pressure acting on the aircraft (Pa).
    pub dynamic_pressure: f64,
    /// Air density (kg/m³).
    pub density: f64,
}

impl Default for AirData {
    /// Provides a default state for zero airspeed.
    fn default() -> Self {
        Self {
            true_airspeed: 0.0,
            horizontal_speed: 0.0,
            flight_path_angle: 0.0,
            angle_of_attack: 0.0,
            dynamic_pressure: 0.0,
            density: SEA_LEVEL_AIR_DENSITY,
        }
    }
}

/// Lift/drag coefficients from the last aerodynamic update.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AeroState {
    pub lift_coefficient: f64,
    pub drag_coefficient: f64,
    /// Stall angle for the current flap setting (deg).
    pub stall_angle_deg: f64,
    pub stalled: bool,
}
