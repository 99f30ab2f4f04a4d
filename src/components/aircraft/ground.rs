use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Runway or terrain surface under the wheels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SurfaceType {
    #[default]
    Asphalt,
    Concrete,
    Grass,
    Dirt,
    Gravel,
}

/// Which horizontal ground force is acting this tick. Rolling and braking
/// never act together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GroundMode {
    #[default]
    Airborne,
    /// Wheels touching but carrying less than the compression threshold.
    Unloaded,
    Rolling,
    Braking,
    /// At rest, friction cancelling the horizontal driving force.
    Holding,
}

/// Weight-on-wheels state.
#[derive(Component, Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GroundContact {
    pub on_ground: bool,
    /// 0 (unloaded) to 1 (carrying the full weight).
    pub compression: f64,
    pub surface: SurfaceType,
    /// Horizontal speed over the ground (m/s).
    pub ground_speed: f64,
    pub mode: GroundMode,
    /// Magnitude of the horizontal resistance applied this tick (N).
    pub resistance: f64,
}

/// Terrain under the aircraft, written by whoever owns the terrain model.
#[derive(Component, Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TerrainSample {
    /// Ground elevation (m).
    pub elevation: f64,
    pub surface: SurfaceType,
}

impl TerrainSample {
    pub fn new(elevation: f64, surface: SurfaceType) -> Self {
        Self { elevation, surface }
    }
}
