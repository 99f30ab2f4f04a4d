mod clock;
pub mod config;
mod telemetry;

pub use clock::SimulationClock;
pub use config::PhysicsConfig;
pub use telemetry::{TelemetryBuffer, TelemetryConfig, TelemetrySample, TelemetrySink};
