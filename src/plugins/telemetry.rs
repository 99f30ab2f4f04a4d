use bevy::prelude::*;

use crate::plugins::FlightDynamicsSet;
use crate::resources::{SimulationClock, TelemetryBuffer, TelemetryConfig, TelemetrySink};
use crate::systems::{flush_telemetry_system, publish_snapshot_system, record_telemetry_system};

/// Samples every published snapshot and, with an output path configured,
/// streams the samples to a JSON-lines file once per frame.
#[derive(Default)]
pub struct TelemetryPlugin {
    pub config: TelemetryConfig,
}

impl TelemetryPlugin {
    pub fn new(config: TelemetryConfig) -> Self {
        Self { config }
    }
}

impl Plugin for TelemetryPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(self.config.clone())
            .insert_resource(TelemetryBuffer::with_capacity(self.config.capacity))
            .init_resource::<SimulationClock>();

        if let Some(path) = &self.config.output {
            match TelemetrySink::create(path) {
                Ok(sink) => {
                    info!("writing telemetry to {}", path.display());
                    app.insert_resource(sink);
                }
                Err(e) => warn!("telemetry kept in memory, cannot open {}: {e}", path.display()),
            }
        }

        app.add_systems(
            FixedUpdate,
            record_telemetry_system
                .in_set(FlightDynamicsSet::Publish)
                .after(publish_snapshot_system),
        )
        .add_systems(Last, flush_telemetry_system);
    }
}
