use serde::{Deserialize, Serialize};

/// Mass and per-axis moments of inertia.
///
/// `empty_mass` covers airframe, crew and payload; usable fuel is added on top
/// and burns off in flight. Rotational dynamics are modelled independently
/// per axis, so no products of inertia are carried.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MassModel {
    /// Mass without usable fuel (kg).
    pub empty_mass: f64,
    /// Moment of inertia about the lateral (pitch) axis (kg·m²).
    pub pitch_inertia: f64,
    /// Moment of inertia about the longitudinal (roll) axis (kg·m²).
    pub roll_inertia: f64,
    /// Moment of inertia about the vertical (yaw) axis (kg·m²).
    pub yaw_inertia: f64,
}

impl MassModel {
    /// Creates a new `MassModel` instance with specified mass and inertia components.
    ///
    /// # Arguments
    /// * `empty_mass` - Mass without usable fuel (kg).
    /// * `pitch_inertia` - Moment of inertia about the pitch axis (kg·m²).
    /// * `roll_inertia` - Moment of inertia about the roll axis (kg·m²).
    /// * `yaw_inertia` - Moment of inertia about the yaw axis (kg·m²).
    pub fn new(empty_mass: f64, pitch_inertia: f64, roll_inertia: f64, yaw_inertia: f64) -> Self {
        Self {
            empty_mass,
            pitch_inertia,
            roll_inertia,
            yaw_inertia,
        }
    }

    /// 2450 lb with full tanks (144 kg of fuel).
    pub fn cessna_172() -> Self {
        Self::new(967.0, 1500.0, 1000.0, 2000.0)
    }

    /// 2325 lb with full tanks (138 kg of fuel).
    pub fn pa28_warrior() -> Self {
        Self::new(917.0, 1350.0, 950.0, 1850.0)
    }

    /// Total mass carrying `fuel` kg of usable fuel.
    pub fn total_mass(&self, fuel: f64) -> f64 {
        self.empty_mass + fuel.max(0.0)
    }

    pub fn weight(&self, fuel: f64, gravity: f64) -> f64 {
        self.total_mass(fuel) * gravity
    }
}
