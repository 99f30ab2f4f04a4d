mod air_data;
mod coefficients;
mod forces;
mod moments;

pub use air_data::{air_data_system, calculate_air_data};
pub use coefficients::{drag_coefficient, lift_coefficient, stall_angle};
pub use forces::{aero_force_system, calculate_aero_forces, lift_direction, AeroForces};
pub use moments::calculate_aero_moments;
