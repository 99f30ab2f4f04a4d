use bevy::prelude::*;

use crate::components::FlightSnapshot;
use crate::resources::{
    SimulationClock, TelemetryBuffer, TelemetryConfig, TelemetrySample, TelemetrySink,
};

/// Pushes a sample per aircraft into the [`TelemetryBuffer`] every
/// `sample_interval` ticks. No I/O happens here.
pub fn record_telemetry_system(
    query: Query<&FlightSnapshot>,
    config: Res<TelemetryConfig>,
    clock: Res<SimulationClock>,
    mut buffer: ResMut<TelemetryBuffer>,
) {
    if clock.tick % config.sample_interval.max(1) != 0 {
        return;
    }

    for snapshot in query.iter() {
        buffer.push(TelemetrySample::from_snapshot(
            snapshot,
            config.force_breakdown_min_airspeed,
        ));
    }
}

/// Drains buffered samples into the sink, if one is installed.
///
/// Without a sink the buffer keeps the most recent samples in memory. A
/// failing sink is removed after logging so the simulation keeps running.
pub fn flush_telemetry_system(
    mut commands: Commands,
    mut buffer: ResMut<TelemetryBuffer>,
    sink: Option<ResMut<TelemetrySink>>,
) {
    let Some(mut sink) = sink else {
        return;
    };
    if buffer.is_empty() {
        return;
    }

    let result = buffer
        .drain()
        .try_for_each(|sample| sink.write(&sample))
        .and_then(|_| sink.flush());

    if let Err(error) = result {
        error!(
            "telemetry output {} disabled: {error}",
            sink.path().display()
        );
        commands.remove_resource::<TelemetrySink>();
    }
}
