use std::io;
use thiserror::Error;

/// Per-tick failures of the rigid-body integrator.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum IntegrationError {
    #[error("Invalid timestep: {0}")]
    InvalidTimestep(f64),

    #[error("Non-finite value in {0}")]
    NonFiniteState(&'static str),
}

/// Reasons a level-flight trim cannot be found.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TrimError {
    #[error("{airspeed:.1} m/s needs CL {required_cl:.2}, above the maximum of {cl_max:.2}")]
    BelowStallSpeed {
        airspeed: f64,
        required_cl: f64,
        cl_max: f64,
    },

    #[error("Full throttle cannot balance drag at {airspeed:.1} m/s")]
    InsufficientThrust { airspeed: f64 },

    #[error("Trim did not converge after {iterations} iterations (residual {residual:.3} N)")]
    NotConverged { iterations: usize, residual: f64 },

    #[error("Trim solver failed: {0}")]
    Solver(String),
}

#[derive(Error, Debug)]
pub enum TelemetryError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}
