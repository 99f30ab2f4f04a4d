use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::components::{EngineConfig, PropellerConfig};

/// Running state of a piston engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum EngineRunState {
    #[default]
    Off,
    /// Starter is turning the crankshaft, combustion not yet self-sustaining.
    Cranking,
    Running,
}

/// Represents the current state of the engine
#[derive(Component, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineState {
    pub rpm: f64,
    /// Shaft power delivered to the propeller (hp).
    pub power_hp: f64,
    /// How well combustion is sustaining itself, 0 (dead) to 1 (fully firing).
    pub combustion_energy: f64,
    pub run_state: EngineRunState,
    /// Current fuel flow rate (kg/s)
    pub fuel_flow: f64,
    /// Usable fuel left (kg).
    pub fuel_remaining: f64,
}

impl EngineState {
    /// A cold engine with the tanks at the configured capacity.
    pub fn off(config: &EngineConfig) -> Self {
        Self {
            rpm: 0.0,
            power_hp: 0.0,
            combustion_energy: 0.0,
            run_state: EngineRunState::Off,
            fuel_flow: 0.0,
            fuel_remaining: config.fuel_capacity,
        }
    }

    /// A warm engine already turning at `rpm`.
    pub fn running(config: &EngineConfig, rpm: f64) -> Self {
        Self {
            rpm,
            combustion_energy: 1.0,
            run_state: EngineRunState::Running,
            ..Self::off(config)
        }
    }

    pub fn is_running(&self) -> bool {
        self.run_state == EngineRunState::Running
    }

    pub fn power_watts(&self) -> f64 {
        self.power_hp * crate::utils::HP_TO_WATTS
    }
}

/// Fixed-pitch propeller geometry plus the values derived on the last tick.
#[derive(Component, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropellerState {
    /// Diameter (m).
    pub diameter: f64,
    pub pitch_ratio: f64,
    pub static_efficiency: f64,
    pub cruise_efficiency: f64,
    /// J = V / (n·D).
    pub advance_ratio: f64,
    pub efficiency: f64,
    pub static_correction: f64,
    /// Weight of the dynamic thrust estimate, 0..1.
    pub blend_factor: f64,
    /// Thrust along the body forward axis (N).
    pub thrust: f64,
}

impl PropellerState {
    pub fn from_config(config: &PropellerConfig) -> Self {
        Self {
            diameter: config.diameter,
            pitch_ratio: config.pitch_ratio,
            static_efficiency: config.static_efficiency,
            cruise_efficiency: config.cruise_efficiency,
            advance_ratio: 0.0,
            efficiency: config.static_efficiency,
            static_correction: config.static_correction_max,
            blend_factor: config.blend_min,
            thrust: 0.0,
        }
    }

    pub fn disc_area(&self) -> f64 {
        std::f64::consts::PI * (self.diameter / 2.0).powi(2)
    }
}
