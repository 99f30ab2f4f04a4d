use bevy::prelude::*;

use crate::components::{
    AeroState, AirData, AircraftState, EngineState, FlightSnapshot, ForceSet, GroundContact,
    PropellerState,
};
use crate::resources::SimulationClock;

/// Copies the integrated state and the tick's model outputs into the
/// read-only [`FlightSnapshot`].
pub fn publish_snapshot_system(
    mut query: Query<(
        &AircraftState,
        &AirData,
        &AeroState,
        &EngineState,
        &PropellerState,
        &GroundContact,
        &ForceSet,
        &mut FlightSnapshot,
    )>,
    clock: Res<SimulationClock>,
) {
    for (state, air_data, aero, engine, propeller, contact, forces, mut snapshot) in query.iter_mut()
    {
        *snapshot = FlightSnapshot {
            tick: clock.tick,
            time: clock.time,
            position: state.position,
            velocity: state.velocity,
            rotation: state.rotation,
            angular_velocity: state.angular_velocity,
            acceleration: state.acceleration,
            mass: state.mass,
            on_ground: state.on_ground,
            airspeed: state.airspeed(),
            ground_speed: state.ground_speed(),
            angle_of_attack: air_data.angle_of_attack,
            lift_coefficient: aero.lift_coefficient,
            drag_coefficient: aero.drag_coefficient,
            stalled: aero.stalled,
            rpm: engine.rpm,
            power_hp: engine.power_hp,
            thrust: propeller.thrust,
            engine: engine.run_state,
            ground_mode: contact.mode,
            forces: *forces,
        };
    }
}
