mod integrator;
mod tick;

pub use integrator::{integrate, integrator_system};
pub use tick::begin_tick_system;
