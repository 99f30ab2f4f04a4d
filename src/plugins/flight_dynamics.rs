use bevy::prelude::*;

use crate::components::{AircraftConfig, StartConfig};
use crate::plugins::PhysicsPlugin;
use crate::resources::PhysicsConfig;
use crate::systems::initial_bundle;

/// Spawns one aircraft in its start condition and makes sure the flight
/// model is scheduled.
///
/// # Panics
/// When the configuration fails validation or a trimmed start has no trim
/// solution. Both are build-time misconfigurations.
pub struct FlightDynamicsPlugin {
    pub aircraft: AircraftConfig,
    pub start: StartConfig,
}

impl FlightDynamicsPlugin {
    pub fn new(aircraft: AircraftConfig, start: StartConfig) -> Self {
        Self { aircraft, start }
    }
}

impl Default for FlightDynamicsPlugin {
    fn default() -> Self {
        Self::new(AircraftConfig::cessna_172(), StartConfig::default())
    }
}

impl Plugin for FlightDynamicsPlugin {
    fn build(&self, app: &mut App) {
        if !app.is_plugin_added::<PhysicsPlugin>() {
            app.add_plugins(PhysicsPlugin::default());
        }

        if let Err(e) = self.aircraft.validate() {
            error!("invalid aircraft configuration {}: {e}", self.aircraft.name);
            panic!("invalid aircraft configuration {}: {e}", self.aircraft.name);
        }

        let physics = app
            .world()
            .get_resource::<PhysicsConfig>()
            .cloned()
            .unwrap_or_default();

        let bundle = match initial_bundle(&self.aircraft, &self.start, &physics) {
            Ok(bundle) => bundle,
            Err(e) => {
                error!("cannot start {} as {:?}: {e}", self.aircraft.name, self.start.condition);
                panic!("cannot start {} as {:?}: {e}", self.aircraft.name, self.start.condition);
            }
        };

        let entity = app.world_mut().spawn(bundle).id();
        info!(
            "spawned {} as {:?} ({:?}), heading {:.0}°",
            self.aircraft.name, self.start.condition, entity, self.start.heading
        );
    }
}
