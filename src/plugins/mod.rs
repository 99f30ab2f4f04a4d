mod flight_dynamics;
mod physics;
mod telemetry;

pub use flight_dynamics::FlightDynamicsPlugin;
pub use physics::{FlightDynamicsSet, PhysicsPlugin};
pub use telemetry::TelemetryPlugin;
