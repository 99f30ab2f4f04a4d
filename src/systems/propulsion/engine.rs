use bevy::prelude::*;

use crate::{
    components::{AircraftConfig, ControlInputs, EngineConfig, EngineRunState, EngineState},
    resources::PhysicsConfig,
    utils::LB_TO_KG,
};

/// Combustion energy above which a cranking engine is considered to have caught.
const CATCH_ENERGY: f64 = 0.5;

/// Advances the engine by `dt`: combustion, state machine, rpm and power.
///
/// Returns the `(from, to)` pair when the run state changed this step.
pub fn update_engine_state(
    state: &mut EngineState,
    config: &EngineConfig,
    controls: &ControlInputs,
    dt: f64,
) -> Option<(EngineRunState, EngineRunState)> {
    if dt <= 0.0 {
        return None;
    }

    let controls = &controls.clamped();
    let throttle = controls.throttle;
    let switches = &controls.switches;
    let fuel_available = switches.fuel_selector && state.fuel_remaining > 0.0;

    // Combustion only sustains itself while the crank turns fast enough to fire.
    let firing = state.run_state != EngineRunState::Off
        && switches.ignition
        && fuel_available
        && state.rpm >= config.firing_rpm;
    state.combustion_energy = if firing {
        (state.combustion_energy + config.combustion_build_rate * dt).min(1.0)
    } else {
        (state.combustion_energy - config.combustion_decay_rate * dt).max(0.0)
    };

    let previous = state.run_state;
    state.run_state = next_run_state(state, config, controls);

    let target = target_rpm(state, config, throttle);
    let max_step = if target > state.rpm {
        config.spool_up_rate * dt
    } else {
        config.spool_down_rate * dt
    };
    state.rpm = (state.rpm + (target - state.rpm).clamp(-max_step, max_step)).max(0.0);

    state.power_hp = if state.is_running() {
        calculate_power(config, state.rpm, throttle, state.combustion_energy)
    } else {
        0.0
    };

    state.fuel_flow = fuel_flow(config, state.power_hp);
    state.fuel_remaining = (state.fuel_remaining - state.fuel_flow * dt).max(0.0);

    (previous != state.run_state).then_some((previous, state.run_state))
}

/// Transition guards of the engine state machine.
fn next_run_state(
    state: &EngineState,
    config: &EngineConfig,
    controls: &ControlInputs,
) -> EngineRunState {
    let switches = &controls.switches;
    match state.run_state {
        EngineRunState::Off if switches.starter && switches.electrical_power => {
            EngineRunState::Cranking
        }
        EngineRunState::Cranking if state.rpm >= config.start_rpm => EngineRunState::Running,
        EngineRunState::Cranking if !(switches.starter && switches.electrical_power) => {
            EngineRunState::Off
        }
        EngineRunState::Running
            if state.combustion_energy <= config.shutdown_energy
                && controls.throttle <= config.shutdown_throttle =>
        {
            EngineRunState::Off
        }
        current => current,
    }
}

/// RPM the crankshaft is being driven toward.
///
/// A running engine always follows the throttle, even while combustion
/// energy is low; power output, not target rpm, carries that deficit.
pub fn target_rpm(state: &EngineState, config: &EngineConfig, throttle: f64) -> f64 {
    match state.run_state {
        EngineRunState::Off => 0.0,
        EngineRunState::Cranking if state.combustion_energy >= CATCH_ENERGY => config.idle_rpm,
        EngineRunState::Cranking => config.cranking_rpm,
        EngineRunState::Running => {
            config.idle_rpm + throttle.clamp(0.0, 1.0) * (config.max_rpm - config.idle_rpm)
        }
    }
}

/// Shaft power (hp) = max power · rpm factor · throttle factor · mixture efficiency.
pub fn calculate_power(
    config: &EngineConfig,
    rpm: f64,
    throttle: f64,
    combustion_energy: f64,
) -> f64 {
    let rpm_factor = (rpm / config.max_rpm).clamp(0.0, 1.0);
    let throttle_factor = throttle.clamp(0.0, 1.0);
    let mixture_efficiency = (config.mixture_efficiency * combustion_energy).clamp(0.0, 1.0);

    config.max_power_hp * rpm_factor * throttle_factor * mixture_efficiency
}

/// Fuel mass flow (kg/s) for a shaft power.
pub fn fuel_flow(config: &EngineConfig, power_hp: f64) -> f64 {
    power_hp.max(0.0) * config.bsfc * LB_TO_KG / 3600.0
}

/// Bevy system advancing every engine by one physics step.
pub fn engine_system(
    mut query: Query<(Entity, &AircraftConfig, &ControlInputs, &mut EngineState)>,
    physics_config: Res<PhysicsConfig>,
) {
    let dt = physics_config.time_step;

    for (entity, config, controls, mut engine) in query.iter_mut() {
        if let Some((from, to)) = update_engine_state(&mut engine, &config.engine, controls, dt) {
            info!(
                "{:?} engine {:?} -> {:?} at {:.0} rpm",
                entity, from, to, engine.rpm
            );
        }
    }
}
