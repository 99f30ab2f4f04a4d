use bevy::prelude::*;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::utils::is_finite_vector;

/// Every force acting on the aircraft during one tick, in the world frame (N).
///
/// The set is reset at the start of each tick and each model writes only its
/// own field. The integrator sums it exactly once through [`ForceSet::total`].
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ForceSet {
    pub lift: Vector3<f64>,
    pub drag: Vector3<f64>,
    pub thrust: Vector3<f64>,
    pub weight: Vector3<f64>,
    pub ground: Vector3<f64>,
}

impl ForceSet {
    pub fn total(&self) -> Vector3<f64> {
        self.lift + self.drag + self.thrust + self.weight + self.ground
    }

    /// Sum of everything except the ground reaction, used to load the gear.
    pub fn airframe_total(&self) -> Vector3<f64> {
        self.lift + self.drag + self.thrust + self.weight
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_finite(&self) -> bool {
        [self.lift, self.drag, self.thrust, self.weight, self.ground]
            .iter()
            .all(is_finite_vector)
    }
}

/// Per-axis moments for one tick (N·m). Aerodynamics and ground contact
/// accumulate into the same set.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MomentSet {
    pub pitch: f64,
    pub roll: f64,
    pub yaw: f64,
}

impl MomentSet {
    pub fn new(pitch: f64, roll: f64, yaw: f64) -> Self {
        Self { pitch, roll, yaw }
    }

    pub fn add(&mut self, other: &MomentSet) {
        self.pitch += other.pitch;
        self.roll += other.roll;
        self.yaw += other.yaw;
    }

    /// Moments in the `(pitch, roll, yaw)` slot order used by `AircraftState::rotation`.
    pub fn total(&self) -> Vector3<f64> {
        Vector3::new(self.pitch, self.roll, self.yaw)
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
