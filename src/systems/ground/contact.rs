use bevy::prelude::*;
use nalgebra::Vector3;

use crate::{
    components::{
        AircraftConfig, AircraftState, ControlInputs, ForceSet, GroundConfig, GroundContact,
        GroundMode, MomentSet, SurfaceType, TerrainSample,
    },
    resources::PhysicsConfig,
    utils::{deg_to_rad, right_axis, GROUND_CONTACT_TOLERANCE},
};

/// Below this ground speed the wheels hold rather than roll (m/s).
const STANDSTILL_SPEED: f64 = 0.05;

/// Ground reaction for one tick.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GroundForces {
    pub force: Vector3<f64>,
    pub moments: MomentSet,
    pub contact: GroundContact,
}

/// Whether the wheels are touching the terrain.
pub fn in_contact(state: &AircraftState, terrain: &TerrainSample) -> bool {
    state.on_ground || state.position.y <= terrain.elevation + GROUND_CONTACT_TOLERANCE
}

/// Share of the weight carried by the gear, 0..1.
///
/// `airframe_force` is every force except the ground reaction; its downward
/// component is what the struts must carry.
pub fn gear_compression(airframe_force: &Vector3<f64>, weight: f64) -> f64 {
    if weight <= 0.0 {
        return 0.0;
    }
    (-airframe_force.y / weight).clamp(0.0, 1.0)
}

pub fn rolling_coefficient(config: &GroundConfig, surface: SurfaceType) -> f64 {
    config.rolling.get(surface)
}

pub fn braking_coefficient(config: &GroundConfig, surface: SurfaceType) -> f64 {
    config.braking.get(surface)
}

/// Normal force, horizontal resistance, tire side force and gear moments.
///
/// Rolling resistance and braking are exclusive: braking replaces rolling
/// resistance once the brake input passes the threshold. No horizontal force
/// is ever larger than what brings the aircraft to rest within `dt`.
pub fn calculate_ground_forces(
    config: &AircraftConfig,
    state: &AircraftState,
    airframe_force: &Vector3<f64>,
    controls: &ControlInputs,
    terrain: &TerrainSample,
    gravity: f64,
    dt: f64,
) -> GroundForces {
    let ground = &config.ground;
    let velocity_h = Vector3::new(state.velocity.x, 0.0, state.velocity.z);
    let ground_speed = velocity_h.norm();

    let mut contact = GroundContact {
        on_ground: false,
        compression: 0.0,
        surface: terrain.surface,
        ground_speed,
        mode: GroundMode::Airborne,
        resistance: 0.0,
    };

    if !in_contact(state, terrain) || dt <= 0.0 {
        return GroundForces {
            contact,
            ..Default::default()
        };
    }

    let mass = state.mass;
    let weight = mass * gravity;
    contact.on_ground = true;
    contact.compression = gear_compression(airframe_force, weight);

    if contact.compression < ground.compression_threshold {
        contact.mode = GroundMode::Unloaded;
        return GroundForces {
            contact,
            ..Default::default()
        };
    }

    let normal = contact.compression * weight;
    let brakes = controls.effective_brakes().clamp(0.0, 1.0);
    let braking = brakes > ground.brake_threshold;

    let available = if braking {
        (brakes * braking_coefficient(ground, terrain.surface) * normal).min(ground.max_brake_force)
    } else {
        rolling_coefficient(ground, terrain.surface) * normal
    };

    let mut horizontal = if ground_speed < STANDSTILL_SPEED {
        // Cancel whatever is pushing the aircraft plus any residual creep
        contact.mode = GroundMode::Holding;
        let driving = Vector3::new(airframe_force.x, 0.0, airframe_force.z);
        let demand = -(driving + velocity_h * (mass / dt));
        let magnitude = demand.norm();
        if magnitude > available && magnitude > 0.0 {
            demand * (available / magnitude)
        } else {
            demand
        }
    } else {
        contact.mode = if braking {
            GroundMode::Braking
        } else {
            GroundMode::Rolling
        };
        let magnitude = available.min(mass * ground_speed / dt);
        -velocity_h / ground_speed * magnitude
    };
    contact.resistance = horizontal.norm();

    // Tire side force against lateral slip
    if contact.mode != GroundMode::Holding {
        let right = right_axis(state.yaw());
        let lateral_speed = velocity_h.dot(&right);
        let already_opposing = -horizontal.dot(&right) * lateral_speed.signum();
        let limit = (mass * lateral_speed.abs() / dt - already_opposing).max(0.0);
        let side = (ground.lateral_friction * normal).min(limit);
        horizontal -= right * side * lateral_speed.signum();
    }

    let steering_authority = (ground_speed / ground.steering_full_speed).min(1.0);
    let yaw = ground.steering_moment * controls.yaw * steering_authority
        - ground.yaw_damping * state.angular_velocity.z;

    let pitch_error = state.pitch() - deg_to_rad(ground.rest_pitch);
    let pitch = -(ground.pitch_stiffness * pitch_error + ground.pitch_damping * state.angular_velocity.x)
        * contact.compression;

    GroundForces {
        force: Vector3::new(horizontal.x, normal, horizontal.z),
        moments: MomentSet::new(pitch, 0.0, yaw),
        contact,
    }
}

pub fn ground_contact_system(
    mut query: Query<(
        Entity,
        &AircraftConfig,
        &AircraftState,
        &ControlInputs,
        &TerrainSample,
        &mut GroundContact,
        &mut ForceSet,
        &mut MomentSet,
    )>,
    physics_config: Res<PhysicsConfig>,
) {
    for (entity, config, state, controls, terrain, mut contact, mut forces, mut moments) in
        query.iter_mut()
    {
        let output = calculate_ground_forces(
            config,
            state,
            &forces.airframe_total(),
            controls,
            terrain,
            physics_config.gravity,
            physics_config.time_step,
        );

        if output.contact.mode != contact.mode {
            debug!(
                "{:?} ground mode {:?} -> {:?} at {:.1} m/s",
                entity, contact.mode, output.contact.mode, output.contact.ground_speed
            );
        }

        forces.ground = output.force;
        moments.add(&output.moments);
        *contact = output.contact;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::GRAVITY;
    use approx::assert_relative_eq;

    const DT: f64 = 1.0 / 120.0;

    fn parked() -> AircraftState {
        AircraftState {
            rotation: Vector3::new(deg_to_rad(2.0), 0.0, 0.0),
            ..Default::default()
        }
    }

    fn rolling(speed: f64) -> AircraftState {
        AircraftState {
            velocity: Vector3::new(0.0, 0.0, speed),
            ..parked()
        }
    }

    fn weight_only(state: &AircraftState) -> Vector3<f64> {
        Vector3::new(0.0, -state.mass * GRAVITY, 0.0)
    }

    fn asphalt() -> TerrainSample {
        TerrainSample::new(0.0, SurfaceType::Asphalt)
    }

    fn ground_forces(
        state: &AircraftState,
        airframe: &Vector3<f64>,
        controls: &ControlInputs,
    ) -> GroundForces {
        calculate_ground_forces(
            &AircraftConfig::cessna_172(),
            state,
            airframe,
            controls,
            &asphalt(),
            GRAVITY,
            DT,
        )
    }

    #[test]
    fn test_compression() {
        assert_eq!(gear_compression(&Vector3::new(0.0, -5000.0, 0.0), 10_000.0), 0.5);
        assert_eq!(gear_compression(&Vector3::new(0.0, 2000.0, 0.0), 10_000.0), 0.0);
        assert_eq!(gear_compression(&Vector3::new(0.0, -20_000.0, 0.0), 10_000.0), 1.0);
    }

    #[test]
    fn test_normal_force_supports_weight() {
        let state = parked();
        let output = ground_forces(&state, &weight_only(&state), &ControlInputs::default());

        assert_relative_eq!(output.force.y, state.mass * GRAVITY, epsilon = 1e-9);
        assert_eq!(output.contact.compression, 1.0);
        assert_eq!(output.contact.mode, GroundMode::Holding);
    }

    #[test]
    fn test_rolling_resistance_bound() {
        let state = rolling(15.0);
        let output = ground_forces(&state, &weight_only(&state), &ControlInputs::default());

        assert_eq!(output.contact.mode, GroundMode::Rolling);
        assert!(output.contact.resistance < 250.0, "{}", output.contact.resistance);
        assert_relative_eq!(
            output.contact.resistance,
            0.015 * state.mass * GRAVITY,
            epsilon = 1e-9
        );
        assert!(output.force.z < 0.0);
    }

    #[test]
    fn test_braking_replaces_rolling() {
        let state = rolling(15.0);
        let controls = ControlInputs {
            brakes: 0.5,
            ..Default::default()
        };
        let output = ground_forces(&state, &weight_only(&state), &controls);

        assert_eq!(output.contact.mode, GroundMode::Braking);
        assert_relative_eq!(
            output.contact.resistance,
            0.5 * 0.7 * state.mass * GRAVITY,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_brake_force_is_capped() {
        let state = AircraftState {
            mass: 5000.0,
            ..rolling(20.0)
        };
        let controls = ControlInputs {
            brakes: 1.0,
            ..Default::default()
        };
        let output = ground_forces(&state, &weight_only(&state), &controls);
        assert_relative_eq!(output.contact.resistance, 15_000.0);
    }

    #[test]
    fn test_resistance_never_reverses_motion() {
        // Full brakes could stop 0.057 m/s in one tick
        let state = rolling(0.055);
        let controls = ControlInputs {
            brakes: 1.0,
            ..Default::default()
        };
        let output = ground_forces(&state, &weight_only(&state), &controls);

        assert_eq!(output.contact.mode, GroundMode::Braking);
        let dv = output.force.z / state.mass * DT;
        assert_relative_eq!(dv, -0.055, epsilon = 1e-12);
    }

    #[test]
    fn test_parking_brake_holds_against_full_thrust() {
        let state = parked();
        let airframe = weight_only(&state) + Vector3::new(0.0, 0.0, 1_050.0);
        let controls = ControlInputs {
            throttle: 1.0,
            parking_brake: true,
            ..Default::default()
        };
        let output = ground_forces(&state, &airframe, &controls);

        assert_eq!(output.contact.mode, GroundMode::Holding);
        assert_relative_eq!(output.force.z, -1_050.0, epsilon = 1e-9);
    }

    #[test]
    fn test_rolling_friction_alone_cannot_hold_full_thrust() {
        let state = parked();
        let airframe = weight_only(&state) + Vector3::new(0.0, 0.0, 1_050.0);
        let output = ground_forces(&state, &airframe, &ControlInputs::with_throttle(1.0));

        let net = airframe.z + output.force.z;
        assert!(net > 800.0, "net forward force {net}");
    }

    #[test]
    fn test_light_load_is_unloaded() {
        let state = rolling(30.0);
        let airframe = Vector3::new(0.0, -0.05 * state.mass * GRAVITY, 0.0);
        let output = ground_forces(&state, &airframe, &ControlInputs::default());

        assert_eq!(output.contact.mode, GroundMode::Unloaded);
        assert!(output.contact.on_ground);
        assert_eq!(output.force, Vector3::zeros());
    }

    #[test]
    fn test_airborne_has_no_ground_force() {
        let state = AircraftState {
            position: Vector3::new(0.0, 100.0, 0.0),
            on_ground: false,
            ..rolling(50.0)
        };
        let output = ground_forces(&state, &weight_only(&state), &ControlInputs::default());

        assert_eq!(output.contact.mode, GroundMode::Airborne);
        assert_eq!(output.force, Vector3::zeros());
        assert_eq!(output.moments, MomentSet::default());
    }

    #[test]
    fn test_tires_resist_sideslip() {
        // Heading north while sliding east
        let state = AircraftState {
            velocity: Vector3::new(2.0, 0.0, 15.0),
            ..parked()
        };
        let output = ground_forces(&state, &weight_only(&state), &ControlInputs::default());
        assert!(output.force.x < 0.0);
    }

    #[test]
    fn test_nosewheel_steering() {
        let state = rolling(15.0);
        let controls = ControlInputs {
            yaw: 1.0,
            ..Default::default()
        };
        let output = ground_forces(&state, &weight_only(&state), &controls);
        assert_relative_eq!(output.moments.yaw, 1_500.0);

        let slow = rolling(2.0);
        let output = ground_forces(&slow, &weight_only(&slow), &controls);
        assert_relative_eq!(output.moments.yaw, 300.0, epsilon = 1e-9);
    }

    #[test]
    fn test_pitch_settles_toward_rest_attitude() {
        let nose_high = AircraftState {
            rotation: Vector3::new(deg_to_rad(8.0), 0.0, 0.0),
            ..parked()
        };
        let output = ground_forces(&nose_high, &weight_only(&nose_high), &ControlInputs::default());
        assert!(output.moments.pitch < 0.0);

        let at_rest = ground_forces(&parked(), &weight_only(&parked()), &ControlInputs::default());
        assert_relative_eq!(at_rest.moments.pitch, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_grass_rolls_harder_than_asphalt() {
        let config = GroundConfig::light_single();
        assert!(
            rolling_coefficient(&config, SurfaceType::Grass)
                > rolling_coefficient(&config, SurfaceType::Asphalt)
        );
        assert!(
            braking_coefficient(&config, SurfaceType::Grass)
                < braking_coefficient(&config, SurfaceType::Concrete)
        );
    }
}
