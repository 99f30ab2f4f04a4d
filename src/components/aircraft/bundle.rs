use bevy::prelude::*;

use crate::components::{
    AeroState, AirData, AircraftConfig, AircraftState, ControlInputs, EngineState, FlightSnapshot,
    ForceSet, GroundContact, MomentSet, PropellerState, TerrainSample,
};

/// Every component the flight model reads or writes for one aircraft.
#[derive(Bundle)]
pub struct AircraftBundle {
    pub name: Name,
    pub config: AircraftConfig,
    pub state: AircraftState,
    pub controls: ControlInputs,
    pub engine: EngineState,
    pub propeller: PropellerState,
    pub air_data: AirData,
    pub aero: AeroState,
    pub forces: ForceSet,
    pub moments: MomentSet,
    pub contact: GroundContact,
    pub terrain: TerrainSample,
    pub snapshot: FlightSnapshot,
}

impl AircraftBundle {
    /// Bundle with derived components at their defaults; they are filled in
    /// by the first tick.
    pub fn new(
        config: AircraftConfig,
        state: AircraftState,
        controls: ControlInputs,
        engine: EngineState,
        terrain: TerrainSample,
    ) -> Self {
        Self {
            name: Name::new(config.name.clone()),
            propeller: PropellerState::from_config(&config.propeller),
            contact: GroundContact {
                on_ground: state.on_ground,
                surface: terrain.surface,
                ..Default::default()
            },
            config,
            state,
            controls,
            engine,
            air_data: AirData::default(),
            aero: AeroState::default(),
            forces: ForceSet::default(),
            moments: MomentSet::default(),
            terrain,
            snapshot: FlightSnapshot::default(),
        }
    }
}
