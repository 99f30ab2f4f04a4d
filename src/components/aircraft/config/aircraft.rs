use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::components::aircraft::config::loader::{load_yaml, Validator};
use crate::components::{
    AeroCoefficients, AircraftGeometry, ConfigError, EngineConfig, GroundConfig, MassModel,
    PropellerConfig,
};

/// Everything the flight model needs to know about one aircraft. Read-only
/// after spawn.
#[derive(Component, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AircraftConfig {
    /// Name of the aircraft, defaults to type name.
    pub name: String,
    /// Mass model of the aircraft, including weight and inertia properties.
    pub mass: MassModel,
    /// The geometric properties of the aircraft, such as wing area and span.
    pub geometry: AircraftGeometry,
    /// Lift curve, drag polar and moment coefficients.
    pub aero: AeroCoefficients,
    pub engine: EngineConfig,
    pub propeller: PropellerConfig,
    pub ground: GroundConfig,
}

impl Default for AircraftConfig {
    /// The Cessna 172 is the default trainer.
    fn default() -> Self {
        Self::cessna_172()
    }
}

impl AircraftConfig {
    /// Creates a new aircraft configuration from a given source and validates it.
    ///
    /// # Arguments
    /// * `source` - An `AircraftSource` enum specifying if the configuration is a
    ///              built-in preset (`Preset`) or loaded from a file (`File`).
    pub fn new(source: AircraftSource) -> Result<Self, ConfigError> {
        let config = match source {
            AircraftSource::Preset(aircraft_type) => Self::from_preset(aircraft_type),
            AircraftSource::File(path) => Self::from_file(path)?,
        };
        config.validate()?;
        Ok(config)
    }

    fn from_preset(aircraft_type: AircraftType) -> Self {
        match aircraft_type {
            AircraftType::Cessna172 => Self::cessna_172(),
            AircraftType::Pa28Warrior => Self::pa28_warrior(),
        }
    }

    pub fn cessna_172() -> Self {
        Self {
            name: "Cessna 172".to_string(),
            mass: MassModel::cessna_172(),
            geometry: AircraftGeometry::cessna_172(),
            aero: AeroCoefficients::cessna_172(),
            engine: EngineConfig::lycoming_o360(),
            propeller: PropellerConfig::cessna_172(),
            ground: GroundConfig::light_single(),
        }
    }

    pub fn pa28_warrior() -> Self {
        Self {
            name: "Piper PA-28-161 Warrior".to_string(),
            mass: MassModel::pa28_warrior(),
            geometry: AircraftGeometry::pa28_warrior(),
            aero: AeroCoefficients::pa28_warrior(),
            engine: EngineConfig::lycoming_o320(),
            propeller: PropellerConfig::pa28_warrior(),
            ground: GroundConfig::light_single(),
        }
    }

    /// Mass with full tanks (kg).
    pub fn takeoff_mass(&self) -> f64 {
        self.mass.total_mass(self.engine.fuel_capacity)
    }

    /// Creates an aircraft configuration by reading from a YAML file.
    ///
    /// The file is not validated here; use [`AircraftConfig::new`] or call
    /// [`AircraftConfig::validate`] before handing it to the simulation.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        load_yaml(path)
    }

    pub fn from_yaml_str(contents: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(contents)?)
    }

    pub fn to_yaml_string(&self) -> Result<String, ConfigError> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Checks every parameter the models divide by or rely on for shape.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let lift = &self.aero.lift;
        let drag = &self.aero.drag;
        let engine = &self.engine;
        let prop = &self.propeller;
        let ground = &self.ground;

        Validator::default()
            .positive("mass.empty_mass", self.mass.empty_mass)
            .check(
                self.engine.fuel_capacity >= 0.0,
                "engine.fuel_capacity must not be negative",
            )
            .positive("mass.pitch_inertia", self.mass.pitch_inertia)
            .positive("mass.roll_inertia", self.mass.roll_inertia)
            .positive("mass.yaw_inertia", self.mass.yaw_inertia)
            .positive("geometry.wing_area", self.geometry.wing_area)
            .positive("geometry.wing_span", self.geometry.wing_span)
            .positive("geometry.mac", self.geometry.mac)
            .positive("aero.lift.cl_alpha", lift.cl_alpha)
            .within("aero.lift.stall_angle", lift.stall_angle, 5.0, 30.0)
            .check(
                lift.cl_max > lift.cl_0,
                "aero.lift.cl_max must exceed aero.lift.cl_0",
            )
            .check(
                lift.cl_max_flaps >= lift.cl_max,
                "aero.lift.cl_max_flaps must be at least aero.lift.cl_max",
            )
            .within("aero.lift.post_stall_floor", lift.post_stall_floor, 0.0, lift.cl_max)
            .positive("aero.lift.post_stall_decay", lift.post_stall_decay)
            .within("aero.lift.flap_stall_reduction", lift.flap_stall_reduction, 0.0, lift.stall_angle)
            .positive("aero.drag.cd_0", drag.cd_0)
            .within("aero.drag.oswald_efficiency", drag.oswald_efficiency, 0.3, 1.0)
            .within("aero.drag.stall_drag_max", drag.stall_drag_max, 0.0, 2.0)
            .positive("engine.max_power_hp", engine.max_power_hp)
            .positive("engine.max_rpm", engine.max_rpm)
            .positive("engine.idle_rpm", engine.idle_rpm)
            .check(
                engine.idle_rpm < engine.max_rpm,
                "engine.idle_rpm must be below engine.max_rpm",
            )
            .check(
                engine.cranking_rpm < engine.start_rpm && engine.start_rpm <= engine.idle_rpm,
                "engine rpm thresholds must satisfy cranking < start <= idle",
            )
            .positive("engine.spool_up_rate", engine.spool_up_rate)
            .positive("engine.spool_down_rate", engine.spool_down_rate)
            .within("engine.mixture_efficiency", engine.mixture_efficiency, 0.0, 1.0)
            .within("engine.shutdown_energy", engine.shutdown_energy, 0.0, 1.0)
            .within("engine.shutdown_throttle", engine.shutdown_throttle, 0.0, 1.0)
            .positive("propeller.diameter", prop.diameter)
            .within("propeller.static_efficiency", prop.static_efficiency, 0.1, 1.0)
            .within("propeller.cruise_efficiency", prop.cruise_efficiency, 0.1, 1.0)
            .positive("propeller.cruise_advance_ratio", prop.cruise_advance_ratio)
            .positive("propeller.correction_fade_end", prop.correction_fade_end)
            .within("propeller.static_correction_max", prop.static_correction_max, 1.0, 3.0)
            .check(
                prop.blend_start < prop.blend_end,
                "propeller.blend_start must be below propeller.blend_end",
            )
            .check(
                (0.0..=1.0).contains(&prop.blend_min)
                    && (0.0..=1.0).contains(&prop.blend_max)
                    && prop.blend_min <= prop.blend_max,
                "propeller blend weights must satisfy 0 <= blend_min <= blend_max <= 1",
            )
            .within("propeller.max_static_multiple", prop.max_static_multiple, 1.0, 5.0)
            .check(
                ground.rolling.all_within(0.0, 0.5),
                "ground.rolling coefficients must be within [0, 0.5]",
            )
            .check(
                ground.braking.all_within(0.0, 1.5),
                "ground.braking coefficients must be within [0, 1.5]",
            )
            .within("ground.compression_threshold", ground.compression_threshold, 0.0, 1.0)
            .check(
                ground.min_pitch < ground.rest_pitch && ground.rest_pitch < ground.max_pitch,
                "ground pitch limits must bracket ground.rest_pitch",
            )
            .finish()
    }
}

/// Source for aircraft configuration.
/// Can either be a built-in preset (`Preset`) or loaded from a file.
#[derive(Debug, Clone)]
pub enum AircraftSource {
    Preset(AircraftType),
    File(PathBuf),
}

/// Enumeration of built-in aircraft types.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, Hash, PartialEq, Eq)]
pub enum AircraftType {
    Cessna172,
    Pa28Warrior,
}
