use flight_core::components::{AircraftState, FlightSnapshot};

#[track_caller]
pub fn assert_state_finite(state: &AircraftState) {
    assert!(state.is_finite(), "aircraft state is not finite: {state:?}");
    assert!(state.mass > 0.0, "mass must be positive");
}

#[track_caller]
pub fn assert_snapshot_finite(snapshot: &FlightSnapshot) {
    assert!(
        snapshot.position.iter().all(|v| v.is_finite()),
        "position is not finite"
    );
    assert!(
        snapshot.velocity.iter().all(|v| v.is_finite()),
        "velocity is not finite"
    );
    assert!(
        snapshot.forces.is_finite(),
        "force breakdown is not finite: {:?}",
        snapshot.forces
    );
}

/// Asserts `|actual - expected| <= tolerance` with a labelled message.
#[track_caller]
pub fn assert_within(label: &str, actual: f64, expected: f64, tolerance: f64) {
    assert!(
        (actual - expected).abs() <= tolerance,
        "{label}: {actual} not within {tolerance} of {expected}"
    );
}
