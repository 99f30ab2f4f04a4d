//! Flight dynamics core for a light-aircraft simulator.
//!
//! Each tick the engine, propeller, aerodynamic and ground-contact models
//! write their forces into a [`components::ForceSet`], and the integrator
//! advances the rigid body from the sum. Models are plain functions with a
//! thin Bevy system around them; [`plugins::PhysicsPlugin`] chains the systems
//! in `FixedUpdate`.
pub mod components;
pub mod plugins;
pub mod resources;
pub mod systems;
pub mod utils;

pub mod prelude {
    pub use crate::components::{
        AircraftBundle, AircraftConfig, AircraftSource, AircraftState, AircraftType,
        ControlInputs, EngineSwitches, FlightSnapshot, PhysicsFault, StartCondition, StartConfig,
        SurfaceType,
    };
    pub use crate::plugins::{
        FlightDynamicsPlugin, FlightDynamicsSet, PhysicsPlugin, TelemetryPlugin,
    };
    pub use crate::resources::{PhysicsConfig, SimulationClock, TelemetryBuffer, TelemetryConfig};
}
