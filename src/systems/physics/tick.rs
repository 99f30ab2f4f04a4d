use bevy::prelude::*;
use nalgebra::Vector3;

use crate::components::{AircraftState, ControlInputs, ForceSet, MomentSet};
use crate::resources::{PhysicsConfig, SimulationClock};

/// Opens a tick: advances the clock, clamps the pilot inputs and resets the
/// force and moment records so that every model writes into a clean set.
pub fn begin_tick_system(
    mut query: Query<(&AircraftState, &mut ControlInputs, &mut ForceSet, &mut MomentSet)>,
    physics_config: Res<PhysicsConfig>,
    mut clock: ResMut<SimulationClock>,
) {
    let dt = physics_config.time_step;
    if dt > 0.0 {
        clock.advance(dt);
    }

    for (state, mut controls, mut forces, mut moments) in query.iter_mut() {
        let clamped = controls.clamped();
        // Avoid tripping change detection every tick
        if *controls != clamped {
            *controls = clamped;
        }

        forces.clear();
        forces.weight = Vector3::new(0.0, -state.mass * physics_config.gravity, 0.0);
        moments.clear();
    }
}
