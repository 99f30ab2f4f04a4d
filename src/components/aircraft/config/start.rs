use serde::{Deserialize, Serialize};

use crate::components::SurfaceType;

/// Where and how the aircraft is spawned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StartConfig {
    /// Initial heading (deg, 0 = north, clockwise).
    pub heading: f64,
    /// Terrain elevation at the spawn point (m).
    pub elevation: f64,
    pub surface: SurfaceType,
    pub condition: StartCondition,
}

/// Engine, brake and flight state at spawn.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum StartCondition {
    /// Parked, engine off, master off, parking brake set.
    ColdAndDark,
    /// Parked, engine off, master and magnetos on, parking brake set.
    ReadyToStart,
    /// On the runway, engine running at idle, brakes released.
    ReadyForTakeoff,
    /// Airborne in trimmed level flight.
    Trimmed {
        /// True airspeed (m/s).
        airspeed: f64,
        /// Height above the spawn elevation (m).
        altitude: f64,
    },
}

impl Default for StartConfig {
    fn default() -> Self {
        Self::runway(StartCondition::ReadyForTakeoff)
    }
}

impl StartConfig {
    /// Sea-level asphalt runway heading north.
    pub fn runway(condition: StartCondition) -> Self {
        Self {
            heading: 0.0,
            elevation: 0.0,
            surface: SurfaceType::Asphalt,
            condition,
        }
    }

    pub fn trimmed(airspeed: f64, altitude: f64) -> Self {
        Self::runway(StartCondition::Trimmed { airspeed, altitude })
    }

    pub fn with_heading(mut self, heading: f64) -> Self {
        self.heading = heading;
        self
    }

    pub fn with_elevation(mut self, elevation: f64) -> Self {
        self.elevation = elevation;
        self
    }

    pub fn with_surface(mut self, surface: SurfaceType) -> Self {
        self.surface = surface;
        self
    }

    pub fn is_airborne(&self) -> bool {
        matches!(self.condition, StartCondition::Trimmed { .. })
    }
}
