mod contact;

pub use contact::{
    braking_coefficient, calculate_ground_forces, gear_compression, ground_contact_system,
    in_contact, rolling_coefficient, GroundForces,
};
