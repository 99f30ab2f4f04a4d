use serde::{Deserialize, Serialize};

/// Piecewise lift curve with a smooth post-stall decay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LiftCurve {
    /// Lift coefficient at zero angle of attack (wing camber).
    pub cl_0: f64,
    /// Lift-curve slope (per degree).
    pub cl_alpha: f64,
    /// Maximum lift coefficient, clean wing.
    pub cl_max: f64,
    /// Most negative lift coefficient.
    pub cl_min: f64,
    /// Stall angle of attack, clean wing (deg).
    pub stall_angle: f64,
    /// Separated-flow lift coefficient the curve decays toward.
    pub post_stall_floor: f64,
    /// Exponential decay rate past the stall angle (per degree).
    pub post_stall_decay: f64,
    /// CL_0 increase at full flaps.
    pub flap_cl_increment: f64,
    /// Maximum lift coefficient at full flaps.
    pub cl_max_flaps: f64,
    /// Stall angle reduction at full flaps (deg).
    pub flap_stall_reduction: f64,
}

/// Parabolic drag polar plus a post-stall term.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DragPolar {
    /// Parasite drag coefficient.
    pub cd_0: f64,
    pub oswald_efficiency: f64,
    /// Additional parasite drag at full flaps.
    pub flap_drag: f64,
    /// Asymptotic extra drag coefficient deep in the stall.
    pub stall_drag_max: f64,
    /// Growth rate of stall drag with AOA excess (per degree).
    pub stall_drag_rate: f64,
}

/// Per-axis moment coefficients. Rate damping terms are scaled by
/// `0.5·ρ·V·S·c²`, control terms by `q·S·c`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MomentCoefficients {
    /// Pitch moment per unit elevator input.
    pub cm_elevator: f64,
    /// Pitch moment per unit trim input.
    pub cm_trim: f64,
    /// Static stability (per radian of AOA).
    pub cm_alpha: f64,
    /// AOA at which the clean, untrimmed aircraft is balanced (rad).
    pub equilibrium_aoa: f64,
    /// Pitch damping.
    pub cm_q: f64,
    /// Extra nose-down pitch coefficient once fully stalled.
    pub cm_stall: f64,
    /// Roll moment per unit aileron input.
    pub cl_aileron: f64,
    /// Roll damping.
    pub cl_p: f64,
    /// Yaw moment per unit rudder input.
    pub cn_rudder: f64,
    /// Yaw damping.
    pub cn_r: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AeroCoefficients {
    pub lift: LiftCurve,
    pub drag: DragPolar,
    pub moments: MomentCoefficients,
}

impl AeroCoefficients {
    pub fn cessna_172() -> Self {
        Self {
            lift: LiftCurve {
                cl_0: 0.30,
                cl_alpha: 0.105,
                cl_max: 1.6,
                cl_min: -1.0,
                stall_angle: 16.0,
                post_stall_floor: 0.4,
                post_stall_decay: 0.05,
                flap_cl_increment: 0.5,
                cl_max_flaps: 2.1,
                flap_stall_reduction: 2.0,
            },
            drag: DragPolar {
                cd_0: 0.027,
                oswald_efficiency: 0.7,
                flap_drag: 0.03,
                stall_drag_max: 0.5,
                stall_drag_rate: 0.1,
            },
            moments: MomentCoefficients {
                cm_elevator: 0.4,
                cm_trim: 0.15,
                cm_alpha: -0.35,
                equilibrium_aoa: 0.035,
                cm_q: -25.0,
                cm_stall: -0.2,
                cl_aileron: 0.15,
                cl_p: -8.0,
                cn_rudder: 0.10,
                cn_r: -6.0,
            },
        }
    }

    pub fn pa28_warrior() -> Self {
        let mut coefficients = Self::cessna_172();
        coefficients.lift.cl_0 = 0.25;
        coefficients.lift.cl_alpha = 0.1;
        coefficients.lift.cl_max = 1.5;
        coefficients.lift.stall_angle = 15.5;
        coefficients.lift.cl_max_flaps = 1.9;
        coefficients.drag.cd_0 = 0.026;
        coefficients.drag.oswald_efficiency = 0.75;
        coefficients.moments.cm_alpha = -0.4;
        coefficients
    }
}
