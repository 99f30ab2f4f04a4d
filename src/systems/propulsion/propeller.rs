use bevy::prelude::*;

use crate::{
    components::{AircraftConfig, AircraftState, EngineState, ForceSet, PropellerConfig, PropellerState},
    resources::PhysicsConfig,
    utils::{lerp, smoothstep},
};

/// Efficiency lost per unit of advance ratio past 1.5× cruise.
const EFFICIENCY_FALLOFF_RATE: f64 = 0.3;
const MAX_EFFICIENCY_FALLOFF: f64 = 0.5;

/// Every intermediate of one thrust evaluation, kept for telemetry and tests.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ThrustOutput {
    pub advance_ratio: f64,
    pub efficiency: f64,
    pub static_correction: f64,
    pub blend_factor: f64,
    /// Momentum-theory estimate including boost and correction (N).
    pub static_thrust: f64,
    /// Power-over-speed estimate with the induced-velocity term (N).
    pub dynamic_thrust: f64,
    /// Final thrust along the body forward axis (N).
    pub thrust: f64,
}

/// J = V / (n·D), with n in revolutions per second.
pub fn advance_ratio(airspeed: f64, rpm: f64, diameter: f64) -> f64 {
    let revs_per_second = rpm / 60.0;
    if revs_per_second <= 0.0 || diameter <= 0.0 {
        return 0.0;
    }
    airspeed.max(0.0) / (revs_per_second * diameter)
}

/// Efficiency rises linearly to the cruise value at the cruise advance ratio,
/// holds to 1.5× that, then falls off as the blades unload. The falloff is
/// bounded, so a windmilling propeller keeps some efficiency.
pub fn propeller_efficiency(config: &PropellerConfig, j: f64) -> f64 {
    let cruise_j = config.cruise_advance_ratio;
    let efficiency = if j <= cruise_j {
        lerp(config.static_efficiency, config.cruise_efficiency, j / cruise_j)
    } else if j <= 1.5 * cruise_j {
        config.cruise_efficiency
    } else {
        let falloff = ((j - 1.5 * cruise_j) * EFFICIENCY_FALLOFF_RATE).min(MAX_EFFICIENCY_FALLOFF);
        config.cruise_efficiency - falloff
    };
    efficiency.clamp(0.0, 1.0)
}

/// Static-thrust correction, `static_correction_max` at J = 0 fading
/// continuously to 1.0 at `correction_fade_end`.
pub fn static_correction(config: &PropellerConfig, j: f64) -> f64 {
    let fade = 1.0 - smoothstep(0.0, config.correction_fade_end, j);
    1.0 + (config.static_correction_max - 1.0) * fade
}

/// Weight of the dynamic estimate.
pub fn blend_factor(config: &PropellerConfig, j: f64) -> f64 {
    config.blend_min
        + (config.blend_max - config.blend_min) * smoothstep(config.blend_start, config.blend_end, j)
}

/// Induced velocity through the disc (m/s).
///
/// Hover momentum theory gives `(P / (2ρA))^(1/3)`; the slipstream
/// increment shrinks as the advance ratio approaches cruise.
pub fn induced_velocity(config: &PropellerConfig, power_watts: f64, density: f64, j: f64) -> f64 {
    let disc_area = std::f64::consts::PI * (config.diameter / 2.0).powi(2);
    if power_watts <= 0.0 || density <= 0.0 || disc_area <= 0.0 {
        return 0.0;
    }
    let hover = (power_watts / (2.0 * density * disc_area)).cbrt();
    hover * (1.0 - 0.8 * j / config.cruise_advance_ratio).max(0.2)
}

/// Scalar propeller thrust for a shaft power, crankshaft speed and airspeed.
pub fn calculate_thrust(
    config: &PropellerConfig,
    power_watts: f64,
    rpm: f64,
    airspeed: f64,
    density: f64,
) -> ThrustOutput {
    let j = advance_ratio(airspeed, rpm, config.diameter);
    let efficiency = propeller_efficiency(config, j);
    let correction = static_correction(config, j);
    let blend = blend_factor(config, j);

    if power_watts <= 0.0 || rpm <= 0.0 {
        return ThrustOutput {
            advance_ratio: j,
            efficiency,
            static_correction: correction,
            blend_factor: blend,
            ..Default::default()
        };
    }

    let disc_area = std::f64::consts::PI * (config.diameter / 2.0).powi(2);
    let static_thrust = (efficiency * power_watts * density * disc_area).sqrt()
        * config.static_boost
        * correction;

    let v_induced = induced_velocity(config, power_watts, density, j);
    let dynamic_thrust = efficiency * power_watts / (airspeed.max(0.0) + v_induced).max(1.0);

    let blended = (1.0 - blend) * static_thrust + blend * dynamic_thrust;
    let thrust = blended.clamp(0.0, config.max_static_multiple * static_thrust);

    ThrustOutput {
        advance_ratio: j,
        efficiency,
        static_correction: correction,
        blend_factor: blend,
        static_thrust,
        dynamic_thrust,
        thrust,
    }
}

/// Turns engine power into a thrust vector along the nose.
pub fn propeller_system(
    mut query: Query<(
        &AircraftConfig,
        &AircraftState,
        &EngineState,
        &mut PropellerState,
        &mut ForceSet,
    )>,
    physics_config: Res<PhysicsConfig>,
) {
    for (config, state, engine, mut propeller, mut forces) in query.iter_mut() {
        let output = calculate_thrust(
            &config.propeller,
            engine.power_watts(),
            engine.rpm,
            state.airspeed(),
            physics_config.air_density,
        );

        propeller.advance_ratio = output.advance_ratio;
        propeller.efficiency = output.efficiency;
        propeller.static_correction = output.static_correction;
        propeller.blend_factor = output.blend_factor;
        propeller.thrust = output.thrust;

        forces.thrust = state.forward() * output.thrust;
    }
}
