use flight_core::components::{
    ControlInputs, EngineRunState, GroundMode, StartCondition, StartConfig, SurfaceType,
};

use crate::common::{assert_within, full_throttle_brakes_off, TestAppBuilder};

#[test]
fn test_parking_brake_holds_full_throttle() {
    let mut app = TestAppBuilder::new()
        .with_start(StartConfig::runway(StartCondition::ReadyForTakeoff))
        .build();
    let start = app.state().position;

    app.set_controls(ControlInputs {
        parking_brake: true,
        ..full_throttle_brakes_off()
    });
    app.run_seconds(10.0);

    let snapshot = app.snapshot();
    assert!(snapshot.rpm > 2_600.0);
    assert!(snapshot.thrust > 900.0);
    assert_eq!(snapshot.ground_mode, GroundMode::Holding);
    assert!((snapshot.position - start).norm() < 0.01);
    assert!(snapshot.ground_speed < 0.05);
}

#[test]
fn test_closed_throttle_stays_put() {
    let mut app = TestAppBuilder::new()
        .with_start(StartConfig::runway(StartCondition::ReadyForTakeoff))
        .build();
    app.run_seconds(10.0);

    let snapshot = app.snapshot();
    assert_eq!(snapshot.engine, EngineRunState::Running);
    assert!(snapshot.on_ground);
    assert!(snapshot.ground_speed < 0.05);
    assert_within("altitude", snapshot.altitude(), 0.0, 0.01);
}

#[test]
fn test_brakes_stop_a_rolling_aircraft() {
    let mut app = TestAppBuilder::new()
        .with_start(StartConfig::runway(StartCondition::ReadyForTakeoff))
        .build();
    app.set_controls(full_throttle_brakes_off());
    app.run_seconds(20.0);
    assert!(app.snapshot().ground_speed > 10.0);

    app.set_controls(ControlInputs {
        brakes: 1.0,
        ..Default::default()
    });
    app.run_seconds(10.0);

    let snapshot = app.snapshot();
    assert!(snapshot.ground_speed < 0.05, "still rolling at {}", snapshot.ground_speed);
    assert_eq!(snapshot.ground_mode, GroundMode::Holding);
}

#[test]
fn test_grass_is_slower_than_asphalt() {
    let mut speeds = Vec::new();
    for surface in [SurfaceType::Asphalt, SurfaceType::Grass] {
        let mut app = TestAppBuilder::new()
            .with_start(StartConfig::runway(StartCondition::ReadyForTakeoff).with_surface(surface))
            .build();
        app.set_controls(full_throttle_brakes_off());
        app.run_seconds(15.0);
        speeds.push(app.snapshot().ground_speed);
    }

    assert!(speeds[1] < speeds[0], "grass {} vs asphalt {}", speeds[1], speeds[0]);
}
