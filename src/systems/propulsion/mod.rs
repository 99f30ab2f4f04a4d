mod engine;
mod propeller;

pub use engine::{calculate_power, engine_system, fuel_flow, target_rpm, update_engine_state};
pub use propeller::{
    advance_ratio, blend_factor, calculate_thrust, induced_velocity, propeller_efficiency,
    propeller_system, static_correction, ThrustOutput,
};
