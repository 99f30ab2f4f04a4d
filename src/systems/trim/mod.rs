mod solver;
mod virtual_flight;

pub use solver::{solve_level_trim, TrimSolution};
pub use virtual_flight::VirtualFlight;
