use flight_core::components::{
    ControlInputs, EngineRunState, EngineSwitches, StartCondition, StartConfig,
};
use pretty_assertions::assert_eq;

use crate::common::{starter_engaged, wait_for, TestAppBuilder};

#[test]
fn test_engine_start_and_shutdown() {
    let mut app = TestAppBuilder::new()
        .with_start(StartConfig::runway(StartCondition::ReadyToStart))
        .build();
    assert_eq!(app.snapshot().engine, EngineRunState::Off);

    app.set_controls(starter_engaged(0.1));
    wait_for(&mut app, 5.0, |s| s.engine == EngineRunState::Running)
        .expect("engine never caught");

    // Releasing the starter keeps it running
    app.set_controls(ControlInputs {
        switches: EngineSwitches::default(),
        ..starter_engaged(0.1)
    });
    app.run_seconds(3.0);
    let snapshot = app.snapshot();
    assert_eq!(snapshot.engine, EngineRunState::Running);
    assert!(snapshot.rpm > 600.0 && snapshot.rpm < 1_000.0);

    // Magnetos off at low throttle starves combustion
    app.set_controls(ControlInputs {
        parking_brake: true,
        throttle: 0.0,
        switches: EngineSwitches {
            ignition: false,
            ..Default::default()
        },
        ..Default::default()
    });
    wait_for(&mut app, 10.0, |s| s.engine == EngineRunState::Off).expect("engine never stopped");
    app.run_seconds(3.0);
    assert_eq!(app.snapshot().rpm, 0.0);
}

#[test]
fn test_cold_and_dark_starter_does_nothing() {
    let mut app = TestAppBuilder::new()
        .with_start(StartConfig::runway(StartCondition::ColdAndDark))
        .build();

    let mut controls = app.controls();
    controls.switches.starter = true;
    app.set_controls(controls);
    app.run_seconds(3.0);

    let snapshot = app.snapshot();
    assert_eq!(snapshot.engine, EngineRunState::Off);
    assert_eq!(snapshot.rpm, 0.0);
}
