use flight_core::components::{ControlInputs, EngineSwitches, FlightSnapshot};

use crate::common::TestApp;

/// Steps until `condition` holds for the snapshot, returning the simulated
/// time it took, or `None` after `max_seconds`.
pub fn wait_for<F>(test_app: &mut TestApp, max_seconds: f64, condition: F) -> Option<f64>
where
    F: Fn(&FlightSnapshot) -> bool,
{
    let max_steps = (max_seconds / test_app.time_step).ceil() as usize;
    let start = test_app.snapshot().time;
    for _ in 0..max_steps {
        test_app.step();
        let snapshot = test_app.snapshot();
        if condition(&snapshot) {
            return Some(snapshot.time - start);
        }
    }
    None
}

pub fn full_throttle_brakes_off() -> ControlInputs {
    ControlInputs {
        throttle: 1.0,
        ..Default::default()
    }
}

/// Master and magnetos on with the starter engaged.
pub fn starter_engaged(throttle: f64) -> ControlInputs {
    ControlInputs {
        throttle,
        parking_brake: true,
        switches: EngineSwitches {
            starter: true,
            ..Default::default()
        },
        ..Default::default()
    }
}
