use approx::assert_relative_eq;
use flight_core::{
    components::{ControlInputs, EngineState, MomentSet, StartConfig},
    utils::rad_to_deg,
};

use crate::common::{assert_state_finite, assert_within, wait_for, TestAppBuilder};

#[test]
fn test_trimmed_cruise_holds_for_thirty_seconds() {
    let mut app = TestAppBuilder::new()
        .with_start(StartConfig::trimmed(50.0, 1_000.0))
        .build();
    let initial = app.state();

    for _ in 0..30 {
        app.run_seconds(1.0);
        let state = app.state();
        assert_state_finite(&state);
        assert_within(
            "pitch (deg)",
            rad_to_deg(state.pitch()),
            rad_to_deg(initial.pitch()),
            1.0,
        );
        assert_within("airspeed", state.airspeed(), 50.0, 1.5);
        assert_within("altitude", state.position.y, initial.position.y, 10.0);
    }

    assert!(app.faults().is_empty());
}

#[test]
fn test_acceleration_matches_force_total() {
    let mut app = TestAppBuilder::new()
        .with_start(StartConfig::trimmed(45.0, 800.0))
        .build();
    let controls = app.controls();
    app.set_controls(ControlInputs {
        pitch: 0.3,
        roll: -0.2,
        ..controls
    });

    for _ in 0..5 {
        app.run_steps(37);
        let snapshot = app.snapshot();
        assert_relative_eq!(
            snapshot.acceleration,
            snapshot.forces.total() / snapshot.mass,
            epsilon = 1e-9
        );
    }
}

#[test]
fn test_full_back_stick_stalls_and_breaks() {
    let mut app = TestAppBuilder::new()
        .with_start(StartConfig::trimmed(35.0, 1_500.0))
        .build();
    let controls = app.controls();
    app.set_controls(ControlInputs {
        pitch: 1.0,
        throttle: 0.0,
        ..controls
    });

    // Step one tick at a time so the last unstalled tick is kept
    let mut previous = app.snapshot();
    let max_steps = (10.0 / app.time_step) as usize;
    for _ in 0..max_steps {
        app.step();
        if app.snapshot().stalled {
            break;
        }
        previous = app.snapshot();
    }
    let stalled = app.snapshot();
    assert!(stalled.stalled, "never stalled");
    assert!(!previous.stalled);
    assert!(rad_to_deg(stalled.angle_of_attack) > 16.0);

    assert!(
        stalled.lift_coefficient < previous.lift_coefficient,
        "CL {} -> {}",
        previous.lift_coefficient,
        stalled.lift_coefficient
    );
    assert!(
        stalled.drag_coefficient > previous.drag_coefficient,
        "CD {} -> {}",
        previous.drag_coefficient,
        stalled.drag_coefficient
    );
    let pitch_moment = app
        .query_single::<MomentSet>()
        .expect("aircraft has moments")
        .pitch;
    assert!(pitch_moment < 0.0, "pitch moment {pitch_moment}");

    wait_for(&mut app, 5.0, |s| s.angular_velocity.x < 0.0).expect("nose never dropped");

    app.run_seconds(5.0);
    assert_state_finite(&app.state());
    assert!(app.faults().is_empty());
}

#[test]
fn test_fuel_burn_lowers_mass() {
    let mut app = TestAppBuilder::new()
        .with_start(StartConfig::trimmed(50.0, 1_000.0))
        .build();
    let mass_before = app.state().mass;
    let fuel_before = app
        .query_single::<EngineState>()
        .expect("aircraft has an engine")
        .fuel_remaining;

    app.run_seconds(60.0);

    let mass_after = app.state().mass;
    let fuel_after = app
        .query_single::<EngineState>()
        .expect("aircraft has an engine")
        .fuel_remaining;
    let burned = fuel_before - fuel_after;

    assert!(burned > 0.1, "burned {burned} kg");
    assert_relative_eq!(mass_before - mass_after, burned, epsilon = 1e-9);
    assert_relative_eq!(app.snapshot().mass, mass_after);
}
