use bevy::prelude::*;
use nalgebra::Vector3;

use crate::components::{
    AeroState, AirData, AircraftConfig, AircraftState, ControlInputs, ForceSet, MomentSet,
};
use crate::systems::aerodynamics::coefficients::{drag_coefficient, lift_coefficient, stall_angle};
use crate::systems::aerodynamics::moments::calculate_aero_moments;
use crate::utils::{rad_to_deg, MIN_AERO_AIRSPEED};

/// Share of the lift magnitude kept when the velocity is nearly vertical.
const VERTICAL_FLIGHT_LIFT_FRACTION: f64 = 0.1;

/// Lift and drag vectors plus the coefficients that produced them.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AeroForces {
    pub lift: Vector3<f64>,
    pub drag: Vector3<f64>,
    pub state: AeroState,
}

/// Direction of lift for a velocity, perpendicular to it in the vertical
/// plane containing it.
///
/// `right = v̂ × up` and `lift = right × v̂`. When the velocity is within a few
/// degrees of vertical the cross product degenerates and lift is reduced to a
/// small share along world up.
pub fn lift_direction(velocity: &Vector3<f64>) -> Vector3<f64> {
    let speed = velocity.norm();
    if speed < MIN_AERO_AIRSPEED {
        return Vector3::zeros();
    }

    let v_hat = velocity / speed;
    let right = v_hat.cross(&Vector3::y());
    if right.norm_squared() <= 1e-3 {
        return Vector3::y() * VERTICAL_FLIGHT_LIFT_FRACTION;
    }

    right.normalize().cross(&v_hat).normalize()
}

/// World-frame lift and drag for the current air data.
pub fn calculate_aero_forces(
    config: &AircraftConfig,
    state: &AircraftState,
    air_data: &AirData,
    flaps: f64,
) -> AeroForces {
    let lift_curve = &config.aero.lift;
    let aoa_deg = rad_to_deg(air_data.angle_of_attack);
    let stall_deg = stall_angle(lift_curve, flaps);

    let cl = lift_coefficient(lift_curve, aoa_deg, flaps);
    let cd = drag_coefficient(
        &config.aero.drag,
        cl,
        aoa_deg,
        stall_deg,
        flaps,
        config.geometry.aspect_ratio(),
    );

    let aero_state = AeroState {
        lift_coefficient: cl,
        drag_coefficient: cd,
        stall_angle_deg: stall_deg,
        stalled: aoa_deg > stall_deg,
    };

    if air_data.true_airspeed < MIN_AERO_AIRSPEED {
        return AeroForces {
            state: aero_state,
            ..Default::default()
        };
    }

    let q_s = air_data.dynamic_pressure * config.geometry.wing_area;
    let v_hat = state.velocity / air_data.true_airspeed;

    AeroForces {
        lift: lift_direction(&state.velocity) * q_s * cl,
        drag: -v_hat * q_s * cd,
        state: aero_state,
    }
}

/// Writes lift and drag into the force set and adds the aerodynamic moments.
pub fn aero_force_system(
    mut query: Query<(
        &AircraftConfig,
        &AircraftState,
        &ControlInputs,
        &AirData,
        &mut AeroState,
        &mut ForceSet,
        &mut MomentSet,
    )>,
) {
    for (config, state, controls, air_data, mut aero_state, mut forces, mut moments) in
        query.iter_mut()
    {
        let output = calculate_aero_forces(config, state, air_data, controls.flaps);

        if output.state.stalled && !aero_state.stalled {
            debug!(
                "stall at {:.1}° AOA, {:.1} m/s",
                rad_to_deg(air_data.angle_of_attack),
                air_data.true_airspeed
            );
        }

        forces.lift = output.lift;
        forces.drag = output.drag;
        *aero_state = output.state;

        moments.add(&calculate_aero_moments(
            config,
            air_data,
            &output.state,
            controls,
            &state.angular_velocity,
        ));
    }
}
