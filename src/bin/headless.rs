use bevy::{log::LogPlugin, prelude::*};
use std::{env, path::PathBuf};

use flight_core::{
    components::{AircraftSource, AircraftType, ControlInputs, FlightSnapshot},
    plugins::{FlightDynamicsPlugin, PhysicsPlugin, TelemetryPlugin},
    prelude::{AircraftConfig, PhysicsConfig, StartCondition, StartConfig, TelemetryConfig},
    utils::deg_to_rad,
};

/// Airspeed at which the script starts pulling the nose up (m/s).
const ROTATION_SPEED: f64 = 28.3;
const CLIMB_PITCH_DEG: f64 = 8.0;

struct Args {
    aircraft: AircraftSource,
    seconds: f64,
    telemetry: Option<PathBuf>,
}

fn usage() -> String {
    "usage: flight_core_headless [c172|pa28|<aircraft.yaml>] [seconds] [telemetry.jsonl]".into()
}

fn parse_args() -> Result<Args, String> {
    let args: Vec<String> = env::args().skip(1).collect();
    if args.iter().any(|a| a == "-h" || a == "--help") {
        return Err(usage());
    }

    let aircraft = match args.first().map(String::as_str) {
        None | Some("c172") => AircraftSource::Preset(AircraftType::Cessna172),
        Some("pa28") => AircraftSource::Preset(AircraftType::Pa28Warrior),
        Some(path) => AircraftSource::File(PathBuf::from(path)),
    };
    let seconds = match args.get(1) {
        Some(s) => s
            .parse::<f64>()
            .map_err(|e| format!("invalid duration {s:?}: {e}\n{}", usage()))?,
        None => 60.0,
    };
    let telemetry = args.get(2).map(PathBuf::from);

    Ok(Args {
        aircraft,
        seconds,
        telemetry,
    })
}

/// Full throttle with brakes released, rotate at `ROTATION_SPEED` and hold
/// a climb attitude.
fn takeoff_controls(snapshot: &FlightSnapshot, current: &ControlInputs) -> ControlInputs {
    let pitch_input = if snapshot.airspeed < ROTATION_SPEED && snapshot.on_ground {
        0.0
    } else {
        let error = deg_to_rad(CLIMB_PITCH_DEG) - snapshot.pitch();
        (3.0 * error - 0.5 * snapshot.angular_velocity.x).clamp(-1.0, 1.0)
    };

    ControlInputs {
        throttle: 1.0,
        brakes: 0.0,
        parking_brake: false,
        pitch: pitch_input,
        ..*current
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = match parse_args() {
        Ok(args) => args,
        Err(message) => {
            eprintln!("{message}");
            std::process::exit(2);
        }
    };

    let aircraft = AircraftConfig::new(args.aircraft)?;
    let physics = PhysicsConfig::default();
    let steps = physics.steps_for(args.seconds);
    let log_every = physics.steps_for(5.0).max(1);

    let mut telemetry = TelemetryConfig::default();
    if let Some(path) = &args.telemetry {
        telemetry = telemetry.with_output(path);
    }

    let mut app = App::new();
    app.add_plugins(LogPlugin::default())
        .add_plugins(PhysicsPlugin::new(physics))
        .add_plugins(FlightDynamicsPlugin::new(
            aircraft,
            StartConfig::runway(StartCondition::ReadyForTakeoff),
        ))
        .add_plugins(TelemetryPlugin::new(telemetry));
    app.finish();
    app.cleanup();
    app.update();

    info!("running {steps} ticks ({:.1} s)", args.seconds);

    let mut airborne_at = None;
    for step in 1..=steps {
        let world = app.world_mut();
        let mut query = world.query::<(&FlightSnapshot, &mut ControlInputs)>();
        for (snapshot, mut controls) in query.iter_mut(world) {
            let next = takeoff_controls(snapshot, &controls);
            *controls = next;
        }

        world.run_schedule(FixedUpdate);

        let mut query = world.query::<&FlightSnapshot>();
        for snapshot in query.iter(world) {
            if airborne_at.is_none() && !snapshot.on_ground {
                airborne_at = Some(snapshot.time);
                info!(
                    "lift-off at {:.1} s, {:.1} kt",
                    snapshot.time,
                    snapshot.airspeed_knots()
                );
            }
            if step % log_every == 0 {
                info!(
                    "t={:>5.1}s alt={:>6.1}m ias={:>5.1}kt pitch={:>5.1}° rpm={:>4.0} thrust={:>6.0}N {:?}",
                    snapshot.time,
                    snapshot.altitude(),
                    snapshot.airspeed_knots(),
                    snapshot.pitch().to_degrees(),
                    snapshot.rpm,
                    snapshot.thrust,
                    snapshot.ground_mode
                );
            }
        }

        if step % log_every == 0 {
            world.run_schedule(Last);
        }
    }
    app.world_mut().run_schedule(Last);

    match airborne_at {
        Some(time) => info!("done, airborne after {time:.1} s"),
        None => warn!("done, still on the ground after {:.1} s", args.seconds),
    }
    Ok(())
}
