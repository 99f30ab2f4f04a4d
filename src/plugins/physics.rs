use bevy::prelude::*;

use crate::components::PhysicsFault;
use crate::resources::{PhysicsConfig, SimulationClock};
use crate::systems::{
    aero_force_system, air_data_system, begin_tick_system, engine_system, ground_contact_system,
    integrator_system, propeller_system, publish_snapshot_system,
};

/// Stages of one physics tick, chained in `FixedUpdate`.
#[derive(Debug, Hash, PartialEq, Eq, Clone, SystemSet)]
pub enum FlightDynamicsSet {
    BeginTick,
    Engine,
    Propeller,
    Aerodynamics,
    GroundContact,
    Integration,
    Publish,
}

/// Schedules the flight model for every entity carrying an
/// [`AircraftBundle`](crate::components::AircraftBundle).
pub struct PhysicsPlugin {
    pub config: PhysicsConfig,
}

impl Default for PhysicsPlugin {
    fn default() -> Self {
        Self {
            config: PhysicsConfig::default(),
        }
    }
}

impl PhysicsPlugin {
    pub fn new(config: PhysicsConfig) -> Self {
        Self { config }
    }
}

impl Plugin for PhysicsPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(self.config.clone())
            .init_resource::<SimulationClock>()
            .add_event::<PhysicsFault>();

        // Fixed loop runs at the same period the models integrate over
        if self.config.time_step > 0.0 {
            app.insert_resource(Time::<Fixed>::from_seconds(self.config.time_step));
        }

        app.configure_sets(
            FixedUpdate,
            (
                FlightDynamicsSet::BeginTick,
                FlightDynamicsSet::Engine,
                FlightDynamicsSet::Propeller,
                FlightDynamicsSet::Aerodynamics,
                FlightDynamicsSet::GroundContact,
                FlightDynamicsSet::Integration,
                FlightDynamicsSet::Publish,
            )
                .chain(),
        );

        app.add_systems(
            FixedUpdate,
            (
                begin_tick_system.in_set(FlightDynamicsSet::BeginTick),
                engine_system.in_set(FlightDynamicsSet::Engine),
                propeller_system.in_set(FlightDynamicsSet::Propeller),
                (air_data_system, aero_force_system)
                    .chain()
                    .in_set(FlightDynamicsSet::Aerodynamics),
                ground_contact_system.in_set(FlightDynamicsSet::GroundContact),
                integrator_system.in_set(FlightDynamicsSet::Integration),
                publish_snapshot_system.in_set(FlightDynamicsSet::Publish),
            ),
        );
    }
}
