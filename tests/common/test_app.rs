use bevy::prelude::*;
use flight_core::{
    components::{
        AircraftConfig, AircraftState, ControlInputs, FlightSnapshot, PhysicsFault, StartConfig,
    },
    plugins::{FlightDynamicsPlugin, PhysicsPlugin, TelemetryPlugin},
    resources::{PhysicsConfig, TelemetryConfig},
};

/// Builder for a headless app running one aircraft.
pub struct TestAppBuilder {
    aircraft: AircraftConfig,
    start: StartConfig,
    physics: PhysicsConfig,
    telemetry: Option<TelemetryConfig>,
}

impl Default for TestAppBuilder {
    fn default() -> Self {
        Self {
            aircraft: AircraftConfig::cessna_172(),
            start: StartConfig::default(),
            physics: PhysicsConfig::default(),
            telemetry: None,
        }
    }
}

impl TestAppBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_aircraft(mut self, config: AircraftConfig) -> Self {
        self.aircraft = config;
        self
    }

    pub fn with_start(mut self, start: StartConfig) -> Self {
        self.start = start;
        self
    }

    pub fn with_physics(mut self, config: PhysicsConfig) -> Self {
        self.physics = config;
        self
    }

    pub fn with_telemetry(mut self, config: TelemetryConfig) -> Self {
        self.telemetry = Some(config);
        self
    }

    pub fn build(self) -> TestApp {
        let mut app = App::new();
        let time_step = self.physics.time_step;

        app.add_plugins(PhysicsPlugin::new(self.physics))
            .add_plugins(FlightDynamicsPlugin::new(self.aircraft, self.start));
        if let Some(telemetry) = self.telemetry {
            app.add_plugins(TelemetryPlugin::new(telemetry));
        }

        // Run startup once so resources and the aircraft are in place
        app.update();

        TestApp { app, time_step }
    }
}

/// Steps the fixed schedule directly so tests do not depend on wall time.
pub struct TestApp {
    pub app: App,
    pub time_step: f64,
}

impl TestApp {
    pub fn run_steps(&mut self, steps: usize) {
        for _ in 0..steps {
            self.step();
        }
    }

    pub fn step(&mut self) {
        let world = self.app.world_mut();
        // Faults of the coming tick stay readable until the next step
        world.resource_mut::<Events<PhysicsFault>>().update();
        world.run_schedule(FixedUpdate);
        // Only present when telemetry is installed
        let _ = world.try_run_schedule(Last);
    }

    pub fn run_seconds(&mut self, seconds: f64) {
        let steps = (seconds / self.time_step).round() as usize;
        self.run_steps(steps);
    }

    pub fn aircraft(&mut self) -> Entity {
        let world = self.app.world_mut();
        let mut query = world.query_filtered::<Entity, With<AircraftState>>();
        query
            .get_single(world)
            .expect("exactly one aircraft in the test app")
    }

    pub fn state(&mut self) -> AircraftState {
        self.query_single::<AircraftState>()
            .expect("aircraft has a state")
            .clone()
    }

    pub fn snapshot(&mut self) -> FlightSnapshot {
        self.query_single::<FlightSnapshot>()
            .expect("aircraft has a snapshot")
            .clone()
    }

    pub fn controls(&mut self) -> ControlInputs {
        *self
            .query_single::<ControlInputs>()
            .expect("aircraft has controls")
    }

    pub fn set_controls(&mut self, controls: ControlInputs) {
        if let Some(mut current) = self.query_single_mut::<ControlInputs>() {
            *current = controls;
        }
    }

    pub fn faults(&self) -> Vec<PhysicsFault> {
        self.app
            .world()
            .resource::<Events<PhysicsFault>>()
            .iter_current_update_events()
            .cloned()
            .collect()
    }

    pub fn resource<T: Resource>(&self) -> Option<&T> {
        self.app.world().get_resource::<T>()
    }

    pub fn query_single<T: Component>(&mut self) -> Option<&T> {
        let world = self.app.world_mut();
        let mut query = world.query::<&T>();
        query.get_single(world).ok()
    }

    pub fn query_single_mut<T: Component>(&mut self) -> Option<Mut<T>> {
        let world = self.app.world_mut();
        let mut query = world.query::<&mut T>();
        query.get_single_mut(world).ok()
    }
}
