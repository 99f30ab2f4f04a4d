pub const GRAVITY: f64 = 9.80665; // m/s^2
pub const SEA_LEVEL_AIR_DENSITY: f64 = 1.225; // kg/m^3

pub const HP_TO_WATTS: f64 = 745.7;
pub const MPS_TO_KNOTS: f64 = 1.943_844;
pub const LB_TO_KG: f64 = 0.453_592;

/// Below this airspeed (m/s) lift and drag are not computed.
pub const MIN_AERO_AIRSPEED: f64 = 0.1;
/// Below this horizontal speed (m/s) angle of attack falls back to pitch.
pub const MIN_HORIZONTAL_SPEED: f64 = 0.1;
/// Position tolerance (m) for treating the aircraft as resting on terrain.
pub const GROUND_CONTACT_TOLERANCE: f64 = 0.01;
