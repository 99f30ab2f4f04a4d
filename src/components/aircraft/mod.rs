pub mod air_data;
pub mod bundle;
pub mod config;
pub mod controls;
pub mod ground;
pub mod propulsion;
pub mod state;

pub use air_data::{AeroState, AirData};
pub use bundle::AircraftBundle;
pub use config::*;
pub use controls::{ControlInputs, EngineSwitches};
pub use ground::{GroundContact, GroundMode, SurfaceType, TerrainSample};
pub use propulsion::{EngineRunState, EngineState, PropellerState};
pub use state::{AircraftState, FlightSnapshot};
