pub mod aerodynamics;
pub mod ground;
pub mod physics;
pub mod propulsion;
mod spawn;
pub mod telemetry;
pub mod trim;

pub use aerodynamics::{aero_force_system, air_data_system};
pub use ground::ground_contact_system;
pub use physics::{begin_tick_system, integrate, integrator_system};
pub use propulsion::{engine_system, propeller_system};
pub use spawn::initial_bundle;
pub use telemetry::{flush_telemetry_system, publish_snapshot_system, record_telemetry_system};
pub use trim::{solve_level_trim, TrimSolution, VirtualFlight};
