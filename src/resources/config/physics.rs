use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::utils::{GRAVITY, SEA_LEVEL_AIR_DENSITY};

/// Fixed-step integration settings shared by every flight-model system.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhysicsConfig {
    /// Seconds advanced per tick.
    pub time_step: f64,
    /// Gravitational acceleration (m/s²).
    pub gravity: f64,
    /// Constant air density (kg/m³).
    pub air_density: f64,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            time_step: 1.0 / 120.0,
            gravity: GRAVITY,
            air_density: SEA_LEVEL_AIR_DENSITY,
        }
    }
}

impl PhysicsConfig {
    pub fn with_time_step(mut self, time_step: f64) -> Self {
        self.time_step = time_step;
        self
    }

    /// Ticks needed to cover `seconds` of simulated time.
    pub fn steps_for(&self, seconds: f64) -> usize {
        if self.time_step <= 0.0 {
            return 0;
        }
        (seconds / self.time_step).round().max(0.0) as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_runs_at_120_hz() {
        let config = PhysicsConfig::default();
        assert_eq!(config.steps_for(1.0), 120);
        assert_eq!(config.with_time_step(0.0).steps_for(1.0), 0);
    }
}
