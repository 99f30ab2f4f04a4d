use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Simulated time, advanced once per physics tick.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SimulationClock {
    /// Ticks completed since startup.
    pub tick: u64,
    /// Simulated seconds since startup.
    pub time: f64,
}

impl SimulationClock {
    pub fn advance(&mut self, dt: f64) {
        self.tick += 1;
        self.time += dt;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
