use flight_core::{
    components::{AircraftState, StartConfig},
    utils::IntegrationError,
};

use crate::common::TestAppBuilder;

#[test]
fn test_non_finite_tick_is_discarded() {
    let mut app = TestAppBuilder::new()
        .with_start(StartConfig::trimmed(50.0, 1_000.0))
        .build();
    app.run_steps(10);

    let before = app.state();
    if let Some(mut state) = app.query_single_mut::<AircraftState>() {
        state.mass = f64::NAN;
    }
    app.step();

    let faults = app.faults();
    assert_eq!(faults.len(), 1);
    assert!(matches!(
        faults[0].error,
        IntegrationError::NonFiniteState(_)
    ));
    assert_eq!(faults[0].entity, app.aircraft());

    let after = app.state();
    assert_eq!(after.position, before.position);
    assert_eq!(after.velocity, before.velocity);
    assert_eq!(after.rotation, before.rotation);
}

#[test]
fn test_zero_timestep_is_a_no_op() {
    let mut app = TestAppBuilder::new()
        .with_start(StartConfig::trimmed(50.0, 1_000.0))
        .build();
    app.app
        .world_mut()
        .resource_mut::<flight_core::resources::PhysicsConfig>()
        .time_step = 0.0;

    let before = app.state();
    app.run_steps(5);

    assert_eq!(app.state(), before);
    assert!(app.faults().is_empty());
}
