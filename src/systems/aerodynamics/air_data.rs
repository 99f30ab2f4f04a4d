use bevy::prelude::*;

use crate::components::{AirData, AircraftState};
use crate::resources::PhysicsConfig;
use crate::utils::MIN_HORIZONTAL_SPEED;

/// Derives airspeed, flight path angle, angle of attack and dynamic pressure
/// from the rigid-body state in still air.
pub fn calculate_air_data(state: &AircraftState, density: f64) -> AirData {
    let true_airspeed = state.airspeed();
    let horizontal_speed = state.ground_speed();

    // Flight path is undefined while hovering or falling vertically
    let flight_path_angle = if horizontal_speed < MIN_HORIZONTAL_SPEED {
        0.0
    } else {
        state.velocity.y.atan2(horizontal_speed)
    };

    AirData {
        true_airspeed,
        horizontal_speed,
        flight_path_angle,
        angle_of_attack: state.pitch() - flight_path_angle,
        dynamic_pressure: 0.5 * density * true_airspeed * true_airspeed,
        density,
    }
}

pub fn air_data_system(
    mut query: Query<(&AircraftState, &mut AirData)>,
    physics_config: Res<PhysicsConfig>,
) {
    for (state, mut air_data) in query.iter_mut() {
        *air_data = calculate_air_data(state, physics_config.air_density);
    }
}
