use crate::components::{AeroState, AirData, AircraftConfig, ControlInputs, MomentSet};
use crate::utils::{rad_to_deg, MIN_AERO_AIRSPEED};

/// Stall break reaches its full nose-down value this many degrees past stall.
const STALL_BREAK_SPAN_DEG: f64 = 10.0;

/// Per-axis aerodynamic moments (N·m).
///
/// Control and stability terms scale with `q·S·c`; rate damping scales with
/// `0.5·ρ·V·S·c²` so it stays proportional to airspeed.
pub fn calculate_aero_moments(
    config: &AircraftConfig,
    air_data: &AirData,
    aero_state: &AeroState,
    controls: &ControlInputs,
    angular_velocity: &nalgebra::Vector3<f64>,
) -> MomentSet {
    if air_data.true_airspeed < MIN_AERO_AIRSPEED {
        return MomentSet::default();
    }

    let coeffs = &config.aero.moments;
    let area = config.geometry.wing_area;
    let chord = config.geometry.mac;

    let q_s_c = air_data.dynamic_pressure * area * chord;
    let damping_scale = 0.5 * air_data.density * air_data.true_airspeed * area * chord * chord;

    let mut cm = coeffs.cm_elevator * controls.pitch
        + coeffs.cm_trim * controls.pitch_trim
        + coeffs.cm_alpha * (air_data.angle_of_attack - coeffs.equilibrium_aoa);

    let stall_excess = rad_to_deg(air_data.angle_of_attack) - aero_state.stall_angle_deg;
    if stall_excess > 0.0 {
        cm += coeffs.cm_stall * (stall_excess / STALL_BREAK_SPAN_DEG).min(1.0);
    }

    let pitch = q_s_c * cm + damping_scale * coeffs.cm_q * angular_velocity.x;
    let roll = q_s_c * coeffs.cl_aileron * controls.roll + damping_scale * coeffs.cl_p * angular_velocity.y;
    let yaw = q_s_c * coeffs.cn_rudder * controls.yaw + damping_scale * coeffs.cn_r * angular_velocity.z;

    MomentSet::new(pitch, roll, yaw)
}
