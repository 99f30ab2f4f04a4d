use serde::{Deserialize, Serialize};

use crate::components::SurfaceType;

/// One friction coefficient per surface type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurfaceCoefficients {
    pub asphalt: f64,
    pub concrete: f64,
    pub grass: f64,
    pub dirt: f64,
    pub gravel: f64,
}

impl SurfaceCoefficients {
    pub fn get(&self, surface: SurfaceType) -> f64 {
        match surface {
            SurfaceType::Asphalt => self.asphalt,
            SurfaceType::Concrete => self.concrete,
            SurfaceType::Grass => self.grass,
            SurfaceType::Dirt => self.dirt,
            SurfaceType::Gravel => self.gravel,
        }
    }

    fn values(&self) -> [f64; 5] {
        [self.asphalt, self.concrete, self.grass, self.dirt, self.gravel]
    }

    pub fn all_within(&self, min: f64, max: f64) -> bool {
        self.values().iter().all(|c| (min..=max).contains(c))
    }
}

/// Landing gear and tire model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroundConfig {
    /// Rolling resistance coefficient per surface.
    pub rolling: SurfaceCoefficients,
    /// Braking (sliding) friction coefficient per surface.
    pub braking: SurfaceCoefficients,
    /// Gear compression below which the gear produces no force.
    pub compression_threshold: f64,
    /// Brake input above which braking replaces rolling resistance.
    pub brake_threshold: f64,
    /// Upper bound on total brake force (N).
    pub max_brake_force: f64,
    /// Side friction coefficient of the tires.
    pub lateral_friction: f64,
    /// Nosewheel steering yaw moment at full rudder (N·m).
    pub steering_moment: f64,
    /// Ground speed at which steering reaches full authority (m/s).
    pub steering_full_speed: f64,
    /// Yaw rate damping from the tires (N·m·s/rad).
    pub yaw_damping: f64,
    /// Resting pitch attitude on the gear (deg).
    pub rest_pitch: f64,
    /// Pitch limits imposed by the gear geometry (deg).
    pub min_pitch: f64,
    pub max_pitch: f64,
    /// Roll limit on the gear (deg).
    pub max_roll: f64,
    /// Pitch spring toward `rest_pitch` at full compression (N·m/rad).
    pub pitch_stiffness: f64,
    /// Pitch rate damping at full compression (N·m·s/rad).
    pub pitch_damping: f64,
}

impl GroundConfig {
    /// Fixed tricycle gear of a light single.
    pub fn light_single() -> Self {
        Self {
            rolling: SurfaceCoefficients {
                asphalt: 0.015,
                concrete: 0.015,
                grass: 0.05,
                dirt: 0.04,
                gravel: 0.03,
            },
            braking: SurfaceCoefficients {
                asphalt: 0.7,
                concrete: 0.75,
                grass: 0.4,
                dirt: 0.5,
                gravel: 0.45,
            },
            compression_threshold: 0.1,
            brake_threshold: 0.01,
            max_brake_force: 15_000.0,
            lateral_friction: 0.8,
            steering_moment: 1_500.0,
            steering_full_speed: 10.0,
            yaw_damping: 3_000.0,
            rest_pitch: 2.0,
            min_pitch: -5.0,
            max_pitch: 15.0,
            max_roll: 5.0,
            pitch_stiffness: 20_000.0,
            pitch_damping: 4_000.0,
        }
    }
}
