use flight_core::components::{ControlInputs, GroundMode, StartCondition, StartConfig};

use crate::common::{
    assert_snapshot_finite, full_throttle_brakes_off, wait_for, TestApp, TestAppBuilder,
};

/// Rotation speed of the C172 preset (55 kt).
const ROTATION_SPEED: f64 = 28.3;
/// A 0.79 m/s² average reaches rotation speed in about 36 s.
const GROUND_ROLL_WINDOW: std::ops::RangeInclusive<f64> = 33.0..=48.0;

fn lined_up() -> TestApp {
    let mut app = TestAppBuilder::new()
        .with_start(StartConfig::runway(StartCondition::ReadyForTakeoff))
        .build();
    app.set_controls(full_throttle_brakes_off());
    app
}

#[test]
fn test_takeoff_roll_reaches_rotation_speed() {
    let mut app = lined_up();

    let elapsed = wait_for(&mut app, 60.0, |s| s.airspeed >= ROTATION_SPEED)
        .expect("never reached rotation speed");

    assert!(
        GROUND_ROLL_WINDOW.contains(&elapsed),
        "rotation speed reached after {elapsed:.1} s"
    );

    let snapshot = app.snapshot();
    assert_snapshot_finite(&snapshot);
    assert!(snapshot.on_ground);
    assert_eq!(snapshot.ground_mode, GroundMode::Rolling);
    // Still on the runway centreline heading north
    assert!(snapshot.position.x.abs() < 1e-6);
    assert!(snapshot.position.z > 300.0);
}

#[test]
fn test_roll_accelerates_monotonically() {
    let mut app = lined_up();

    let mut previous = 0.0;
    for _ in 0..20 {
        app.run_seconds(1.0);
        let speed = app.snapshot().ground_speed;
        assert!(speed > previous, "ground speed fell from {previous} to {speed}");
        previous = speed;
    }
}

#[test]
fn test_rotation_lifts_off_and_climbs() {
    let mut app = lined_up();
    wait_for(&mut app, 70.0, |s| s.airspeed >= ROTATION_SPEED)
        .expect("never reached rotation speed");

    app.set_controls(ControlInputs {
        pitch: 0.6,
        ..full_throttle_brakes_off()
    });

    let after = wait_for(&mut app, 10.0, |s| s.altitude() > 1.0)
        .expect("aircraft never left the runway");
    assert!(after < 6.0, "lift-off took {after:.1} s after rotation");

    let snapshot = app.snapshot();
    assert!(!snapshot.on_ground);
    assert!(snapshot.velocity.y > 0.0);
    assert_eq!(snapshot.ground_mode, GroundMode::Airborne);
}
