use bevy::prelude::*;
use nalgebra::Vector3;

use crate::{
    components::{
        AircraftBundle, AircraftConfig, AircraftState, ControlInputs, EngineState, EngineSwitches,
        StartCondition, StartConfig, TerrainSample,
    },
    resources::PhysicsConfig,
    systems::trim::solve_level_trim,
    utils::{deg_to_rad, normalize_angle, TrimError},
};

/// Builds the components for an aircraft spawned in `start`'s condition.
///
/// Ground starts rest on the gear at the configured attitude. A trimmed start
/// solves for level flight first and fails if no trim exists at the requested
/// airspeed.
pub fn initial_bundle(
    config: &AircraftConfig,
    start: &StartConfig,
    physics: &PhysicsConfig,
) -> Result<AircraftBundle, TrimError> {
    let yaw = normalize_angle(deg_to_rad(start.heading));
    let terrain = TerrainSample::new(start.elevation, start.surface);

    let on_ground = AircraftState {
        position: Vector3::new(0.0, start.elevation, 0.0),
        rotation: Vector3::new(deg_to_rad(config.ground.rest_pitch), 0.0, yaw),
        mass: config.takeoff_mass(),
        on_ground: true,
        ..Default::default()
    };
    let parked = ControlInputs {
        parking_brake: true,
        ..Default::default()
    };

    let (state, controls, engine) = match start.condition {
        StartCondition::ColdAndDark => (
            on_ground,
            ControlInputs {
                switches: EngineSwitches::all_off(),
                ..parked
            },
            EngineState::off(&config.engine),
        ),
        StartCondition::ReadyToStart => (on_ground, parked, EngineState::off(&config.engine)),
        StartCondition::ReadyForTakeoff => (
            on_ground,
            ControlInputs::default(),
            EngineState::running(&config.engine, config.engine.idle_rpm),
        ),
        StartCondition::Trimmed { airspeed, altitude } => {
            let solution = solve_level_trim(config, physics, airspeed)?;
            let state = AircraftState {
                position: Vector3::new(0.0, start.elevation + altitude, 0.0),
                velocity: Vector3::new(yaw.sin(), 0.0, yaw.cos()) * airspeed,
                rotation: Vector3::new(solution.pitch, 0.0, yaw),
                mass: config.takeoff_mass(),
                on_ground: false,
                ..Default::default()
            };
            let controls = ControlInputs {
                throttle: solution.throttle,
                pitch_trim: solution.pitch_trim,
                ..Default::default()
            };
            (state, controls, solution.engine_state(&config.engine))
        }
    };

    debug!(
        "{} initial state for {:?}: position={:?}, velocity={:?}",
        config.name, start.condition, state.position, state.velocity
    );

    Ok(AircraftBundle::new(
        config.clone(),
        state,
        controls,
        engine,
        terrain,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::{EngineRunState, SurfaceType};
    use approx::assert_relative_eq;

    fn bundle(start: StartConfig) -> Result<AircraftBundle, TrimError> {
        initial_bundle(
            &AircraftConfig::cessna_172(),
            &start,
            &PhysicsConfig::default(),
        )
    }

    #[test]
    fn test_cold_and_dark() {
        let bundle = bundle(StartConfig::runway(StartCondition::ColdAndDark)).unwrap();

        assert_eq!(bundle.controls.switches, EngineSwitches::all_off());
        assert!(bundle.controls.parking_brake);
        assert_eq!(bundle.engine.run_state, EngineRunState::Off);
        assert!(bundle.state.on_ground);
        assert_relative_eq!(bundle.state.rotation.x, deg_to_rad(2.0), epsilon = 1e-12);
    }

    #[test]
    fn test_ready_for_takeoff_idles_with_brakes_off() {
        let start = StartConfig::runway(StartCondition::ReadyForTakeoff)
            .with_elevation(150.0)
            .with_surface(SurfaceType::Grass);
        let bundle = bundle(start).unwrap();

        assert!(bundle.engine.is_running());
        assert_eq!(bundle.engine.rpm, 600.0);
        assert!(!bundle.controls.parking_brake);
        assert_eq!(bundle.state.position.y, 150.0);
        assert_eq!(bundle.terrain.surface, SurfaceType::Grass);
        assert_eq!(bundle.contact.surface, SurfaceType::Grass);
    }

    #[test]
    fn test_trimmed_start_flies_along_heading() {
        let start = StartConfig::trimmed(50.0, 1_000.0).with_heading(90.0);
        let bundle = bundle(start).unwrap();

        assert!(!bundle.state.on_ground);
        assert_relative_eq!(bundle.state.position.y, 1_000.0);
        assert_relative_eq!(bundle.state.velocity.x, 50.0, epsilon = 1e-9);
        assert_relative_eq!(bundle.state.velocity.z, 0.0, epsilon = 1e-9);
        assert!(bundle.controls.throttle > 0.0);
        assert!(bundle.engine.is_running());
    }

    #[test]
    fn test_trimmed_start_below_stall_fails() {
        assert!(matches!(
            bundle(StartConfig::trimmed(15.0, 500.0)),
            Err(TrimError::BelowStallSpeed { .. })
        ));
    }
}
