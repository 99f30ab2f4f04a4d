use bevy::prelude::*;

use crate::{
    components::{AircraftBundle, AircraftState, ControlInputs, FlightSnapshot, PhysicsFault},
    resources::{PhysicsConfig, SimulationClock},
    systems::{
        aerodynamics::{aero_force_system, air_data_system},
        ground::ground_contact_system,
        physics::{begin_tick_system, integrator_system},
        propulsion::{engine_system, propeller_system},
        telemetry::publish_snapshot_system,
    },
};

/// Runs the flight model in a private world, independent of any app's clock.
///
/// Used to check trim solutions and to evaluate a configuration off-line with
/// exactly the systems the plugin schedules.
pub struct VirtualFlight {
    world: World,
    schedule: Schedule,
}

impl VirtualFlight {
    pub fn new(physics_config: PhysicsConfig) -> Self {
        let mut world = World::new();
        world.insert_resource(physics_config);
        world.insert_resource(SimulationClock::default());
        world.init_resource::<Events<PhysicsFault>>();

        let mut schedule = Schedule::default();
        schedule.add_systems(
            (
                begin_tick_system,
                engine_system,
                propeller_system,
                air_data_system,
                aero_force_system,
                ground_contact_system,
                integrator_system,
                publish_snapshot_system,
            )
                .chain(),
        );

        Self { world, schedule }
    }

    pub fn spawn(&mut self, bundle: AircraftBundle) -> Entity {
        self.world.spawn(bundle).id()
    }

    /// Advances every aircraft by `steps` ticks.
    pub fn run_steps(&mut self, steps: usize) {
        for _ in 0..steps {
            self.world.resource_mut::<Events<PhysicsFault>>().update();
            self.schedule.run(&mut self.world);
        }
    }

    /// Advances by however many ticks cover `seconds`.
    pub fn run_for(&mut self, seconds: f64) {
        let steps = self.world.resource::<PhysicsConfig>().steps_for(seconds);
        self.run_steps(steps);
    }

    pub fn state(&self, entity: Entity) -> Option<&AircraftState> {
        self.world.get::<AircraftState>(entity)
    }

    pub fn snapshot(&self, entity: Entity) -> Option<&FlightSnapshot> {
        self.world.get::<FlightSnapshot>(entity)
    }

    pub fn set_controls(&mut self, entity: Entity, controls: ControlInputs) {
        if let Some(mut current) = self.world.get_mut::<ControlInputs>(entity) {
            *current = controls;
        }
    }

    pub fn clock(&self) -> SimulationClock {
        *self.world.resource::<SimulationClock>()
    }

    /// Faults sent during the last tick.
    pub fn recent_faults(&self) -> Vec<PhysicsFault> {
        let events = self.world.resource::<Events<PhysicsFault>>();
        events.iter_current_update_events().cloned().collect()
    }
}
