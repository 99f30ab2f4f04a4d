use bevy::prelude::*;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::components::{EngineRunState, ForceSet, GroundMode};
use crate::utils::{forward_axis, is_finite_vector, normalize_angle, MPS_TO_KNOTS};

/// Rigid-body state of the aircraft in the world frame (y up, z north, x east).
///
/// Only the integrator system mutates this component. Everything else reads
/// the [`FlightSnapshot`] published at the end of the tick.
#[derive(Component, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AircraftState {
    /// Position (m).
    pub position: Vector3<f64>,
    /// Velocity (m/s).
    pub velocity: Vector3<f64>,
    /// Euler angles `(pitch, roll, yaw)` in radians, each in [-π, π].
    pub rotation: Vector3<f64>,
    /// Body rates in the same slot order as `rotation` (rad/s).
    pub angular_velocity: Vector3<f64>,
    /// Acceleration derived by the last integration (m/s²).
    pub acceleration: Vector3<f64>,
    /// Mass (kg).
    pub mass: f64,
    pub on_ground: bool,
}

impl Default for AircraftState {
    fn default() -> Self {
        Self {
            position: Vector3::zeros(),
            velocity: Vector3::zeros(),
            rotation: Vector3::zeros(),
            angular_velocity: Vector3::zeros(),
            acceleration: Vector3::zeros(),
            mass: 1111.0,
            on_ground: true,
        }
    }
}

impl AircraftState {
    pub fn pitch(&self) -> f64 {
        self.rotation.x
    }

    pub fn roll(&self) -> f64 {
        self.rotation.y
    }

    pub fn yaw(&self) -> f64 {
        self.rotation.z
    }

    /// Airspeed in still air (m/s).
    pub fn airspeed(&self) -> f64 {
        self.velocity.norm()
    }

    pub fn ground_speed(&self) -> f64 {
        self.velocity.x.hypot(self.velocity.z)
    }

    pub fn forward(&self) -> Vector3<f64> {
        forward_axis(&self.rotation)
    }

    pub fn is_finite(&self) -> bool {
        is_finite_vector(&self.position)
            && is_finite_vector(&self.velocity)
            && is_finite_vector(&self.rotation)
            && is_finite_vector(&self.angular_velocity)
            && is_finite_vector(&self.acceleration)
            && self.mass.is_finite()
    }

    pub fn normalize_rotation(&mut self) {
        self.rotation = self.rotation.map(normalize_angle);
    }
}

/// Read-only copy of the aircraft published once per tick for renderers,
/// audio, telemetry and instructor/ATC logic.
#[derive(Component, Debug, Clone, Default, PartialEq, Serialize)]
pub struct FlightSnapshot {
    pub tick: u64,
    /// Simulated time since spawn (s).
    pub time: f64,
    pub position: Vector3<f64>,
    pub velocity: Vector3<f64>,
    pub rotation: Vector3<f64>,
    pub angular_velocity: Vector3<f64>,
    pub acceleration: Vector3<f64>,
    pub mass: f64,
    pub on_ground: bool,
    pub airspeed: f64,
    pub ground_speed: f64,
    pub angle_of_attack: f64,
    pub lift_coefficient: f64,
    pub drag_coefficient: f64,
    pub stalled: bool,
    pub rpm: f64,
    pub power_hp: f64,
    pub thrust: f64,
    pub engine: EngineRunState,
    pub ground_mode: GroundMode,
    pub forces: ForceSet,
}

impl FlightSnapshot {
    pub fn airspeed_knots(&self) -> f64 {
        self.airspeed * MPS_TO_KNOTS
    }

    pub fn altitude(&self) -> f64 {
        self.position.y
    }

    pub fn pitch(&self) -> f64 {
        self.rotation.x
    }

    /// Heading in degrees, 0..360.
    pub fn heading_deg(&self) -> f64 {
        self.rotation.z.to_degrees().rem_euclid(360.0)
    }
}
