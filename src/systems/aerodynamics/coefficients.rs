//! Lift curve and drag polar.
//!
//! Angles are in degrees here because the coefficient tables are.

use std::f64::consts::PI;

use crate::components::{DragPolar, LiftCurve};
use crate::utils::lerp;

/// Stall angle (deg) for a flap setting in [0, 1].
pub fn stall_angle(lift: &LiftCurve, flaps: f64) -> f64 {
    lift.stall_angle - lift.flap_stall_reduction * flaps.clamp(0.0, 1.0)
}

/// Lift coefficient at `aoa_deg`.
///
/// Linear up to the stall angle, capped at the maximum lift coefficient, then
/// decaying exponentially toward the separated-flow floor. The two pieces meet
/// at the stall angle.
pub fn lift_coefficient(lift: &LiftCurve, aoa_deg: f64, flaps: f64) -> f64 {
    let flaps = flaps.clamp(0.0, 1.0);
    let cl_0 = lift.cl_0 + lift.flap_cl_increment * flaps;
    let cl_max = lerp(lift.cl_max, lift.cl_max_flaps, flaps);
    let stall = stall_angle(lift, flaps);

    let linear = |deg: f64| (cl_0 + lift.cl_alpha * deg).clamp(lift.cl_min, cl_max);

    if aoa_deg <= stall {
        return linear(aoa_deg);
    }

    let cl_stall = linear(stall);
    let floor = lift.post_stall_floor.min(cl_stall);
    floor + (cl_stall - floor) * (-lift.post_stall_decay * (aoa_deg - stall)).exp()
}

/// Drag coefficient: parasite, flap, induced and post-stall terms.
pub fn drag_coefficient(
    drag: &DragPolar,
    cl: f64,
    aoa_deg: f64,
    stall_angle_deg: f64,
    flaps: f64,
    aspect_ratio: f64,
) -> f64 {
    let parasite = drag.cd_0 + drag.flap_drag * flaps.clamp(0.0, 1.0);
    let induced = cl * cl / (PI * aspect_ratio * drag.oswald_efficiency);

    let excess = aoa_deg.abs() - stall_angle_deg;
    let stall_drag = if excess > 0.0 {
        drag.stall_drag_max * (1.0 - (-drag.stall_drag_rate * excess).exp())
    } else {
        0.0
    };

    parasite + induced + stall_drag
}
