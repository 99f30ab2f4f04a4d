use bevy::prelude::*;
use nalgebra::Vector3;

use crate::components::{
    AircraftConfig, AircraftState, EngineState, ForceSet, GroundConfig, MassModel, MomentSet,
    PhysicsFault, TerrainSample,
};
use crate::resources::{PhysicsConfig, SimulationClock};
use crate::utils::{deg_to_rad, is_finite_vector, IntegrationError, GROUND_CONTACT_TOLERANCE};

/// System advancing every aircraft's rigid-body state by one tick.
///
/// The only writer of `AircraftState`. A tick whose result is not finite is
/// discarded: the previous state is kept and a [`PhysicsFault`] is sent.
pub fn integrator_system(
    mut query: Query<(
        Entity,
        &AircraftConfig,
        &ForceSet,
        &MomentSet,
        &EngineState,
        &TerrainSample,
        &mut AircraftState,
    )>,
    physics_config: Res<PhysicsConfig>,
    clock: Res<SimulationClock>,
    mut faults: EventWriter<PhysicsFault>,
) {
    let dt = physics_config.time_step;

    for (entity, config, forces, moments, engine, terrain, mut state) in query.iter_mut() {
        match integrate(
            &state,
            forces,
            moments,
            &config.mass,
            engine.fuel_remaining,
            terrain,
            &config.ground,
            dt,
        ) {
            Ok(next) => *state = next,
            Err(IntegrationError::InvalidTimestep(dt)) => {
                debug!("skipping integration with dt = {dt}");
            }
            Err(error) => {
                error!("{:?} tick {} discarded: {error}", entity, clock.tick);
                faults.send(PhysicsFault {
                    entity,
                    tick: clock.tick,
                    error,
                });
            }
        }
    }
}

/// Semi-implicit Euler step of the rigid body.
///
/// Velocity is updated from the acceleration first and position from the new
/// velocity. Angular motion follows the same scheme per axis with the axis
/// inertias from `mass`. Penetration of the terrain is resolved by clamping
/// the height; only a downward vertical velocity is removed, so an aircraft
/// lifting off keeps its climb rate.
///
/// # Arguments
/// * `state` - State at the start of the tick.
/// * `forces` - Every force of this tick; summed once through [`ForceSet::total`].
/// * `moments` - Aerodynamic and gear moments.
/// * `mass` - Axis inertias and empty mass. The acceleration uses the mass in
///   `state`; the returned state carries `empty_mass + fuel`.
/// * `fuel` - Usable fuel left after this tick's burn (kg).
/// * `terrain` - Elevation under the aircraft.
/// * `ground` - Attitude limits imposed by the gear while on ground.
/// * `dt` - Time step (s), must be positive.
pub fn integrate(
    state: &AircraftState,
    forces: &ForceSet,
    moments: &MomentSet,
    mass: &MassModel,
    fuel: f64,
    terrain: &TerrainSample,
    ground: &GroundConfig,
    dt: f64,
) -> Result<AircraftState, IntegrationError> {
    if !(dt > 0.0) || !dt.is_finite() {
        return Err(IntegrationError::InvalidTimestep(dt));
    }

    let total_force = forces.total();
    if !is_finite_vector(&total_force) {
        return Err(IntegrationError::NonFiniteState("force total"));
    }
    let total_moment = moments.total();
    if !is_finite_vector(&total_moment) {
        return Err(IntegrationError::NonFiniteState("moment total"));
    }
    if !(state.mass > 0.0) {
        return Err(IntegrationError::NonFiniteState("mass"));
    }

    let mut next = state.clone();
    next.mass = mass.total_mass(fuel);
    if !(next.mass > 0.0) {
        return Err(IntegrationError::NonFiniteState("mass"));
    }

    next.acceleration = total_force / state.mass;
    next.velocity += next.acceleration * dt;
    next.position += next.velocity * dt;

    let angular_acceleration = Vector3::new(
        total_moment.x / mass.pitch_inertia,
        total_moment.y / mass.roll_inertia,
        total_moment.z / mass.yaw_inertia,
    );
    next.angular_velocity += angular_acceleration * dt;
    next.rotation += next.angular_velocity * dt;

    if next.position.y < terrain.elevation {
        next.position.y = terrain.elevation;
        if next.velocity.y < 0.0 {
            next.velocity.y = 0.0;
        }
    }
    next.on_ground = next.position.y <= terrain.elevation + GROUND_CONTACT_TOLERANCE;

    if next.on_ground {
        apply_gear_attitude_limits(&mut next, ground);
    }
    next.normalize_rotation();

    if !next.is_finite() {
        return Err(IntegrationError::NonFiniteState("integrated state"));
    }

    Ok(next)
}

/// Keeps pitch and roll within what the gear geometry allows, removing any
/// rate that pushes further into a limit.
fn apply_gear_attitude_limits(state: &mut AircraftState, ground: &GroundConfig) {
    let (min_pitch, max_pitch) = (deg_to_rad(ground.min_pitch), deg_to_rad(ground.max_pitch));
    if state.rotation.x > max_pitch {
        state.rotation.x = max_pitch;
        state.angular_velocity.x = state.angular_velocity.x.min(0.0);
    } else if state.rotation.x < min_pitch {
        state.rotation.x = min_pitch;
        state.angular_velocity.x = state.angular_velocity.x.max(0.0);
    }

    let max_roll = deg_to_rad(ground.max_roll);
    if state.rotation.y.abs() > max_roll {
        state.rotation.y = state.rotation.y.clamp(-max_roll, max_roll);
        if state.angular_velocity.y * state.rotation.y > 0.0 {
            state.angular_velocity.y = 0.0;
        }
    }
}
