use serde::{Deserialize, Serialize};

/// Normally aspirated piston engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    pub name: String,
    /// Rated power at `max_rpm` (hp).
    pub max_power_hp: f64,
    pub max_rpm: f64,
    pub idle_rpm: f64,
    /// Crankshaft speed the starter motor alone can hold.
    pub cranking_rpm: f64,
    /// RPM at which a cranking engine is considered started.
    pub start_rpm: f64,
    /// Minimum crankshaft speed for the magnetos to fire.
    pub firing_rpm: f64,
    /// Maximum RPM increase rate (rpm/s).
    pub spool_up_rate: f64,
    /// Maximum RPM decrease rate (rpm/s).
    pub spool_down_rate: f64,
    /// Best-case mixture efficiency, 0..1.
    pub mixture_efficiency: f64,
    /// Combustion energy gained per second while firing.
    pub combustion_build_rate: f64,
    /// Combustion energy lost per second without ignition or fuel.
    pub combustion_decay_rate: f64,
    /// Running engine stops once combustion energy falls to this level...
    pub shutdown_energy: f64,
    /// ...and throttle is at or below this.
    pub shutdown_throttle: f64,
    /// Brake specific fuel consumption (lb/hp/hr).
    pub bsfc: f64,
    /// Usable fuel (kg).
    pub fuel_capacity: f64,
}

impl EngineConfig {
    /// Lycoming O-360, 180 hp.
    pub fn lycoming_o360() -> Self {
        Self {
            name: "Lycoming O-360".to_string(),
            max_power_hp: 180.0,
            max_rpm: 2700.0,
            idle_rpm: 600.0,
            cranking_rpm: 250.0,
            start_rpm: 500.0,
            firing_rpm: 150.0,
            spool_up_rate: 1500.0,
            spool_down_rate: 1000.0,
            mixture_efficiency: 1.0,
            combustion_build_rate: 2.0,
            combustion_decay_rate: 0.5,
            shutdown_energy: 0.05,
            shutdown_throttle: 0.1,
            bsfc: 0.45,
            fuel_capacity: 144.0,
        }
    }

    /// Lycoming O-320, 160 hp.
    pub fn lycoming_o320() -> Self {
        Self {
            name: "Lycoming O-320".to_string(),
            max_power_hp: 160.0,
            fuel_capacity: 138.0,
            ..Self::lycoming_o360()
        }
    }
}

/// Fixed-pitch propeller and its thrust-model tuning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropellerConfig {
    /// Diameter (m).
    pub diameter: f64,
    pub pitch_ratio: f64,
    /// Efficiency at J = 0.
    pub static_efficiency: f64,
    /// Efficiency at the cruise advance ratio.
    pub cruise_efficiency: f64,
    pub cruise_advance_ratio: f64,
    /// Blade-element gain over pure momentum theory.
    pub static_boost: f64,
    /// Static-thrust correction at J = 0; fades to 1.0 at `correction_fade_end`.
    pub static_correction_max: f64,
    pub correction_fade_end: f64,
    /// Dynamic-estimate weight at and below `blend_start`.
    pub blend_min: f64,
    /// Dynamic-estimate weight at and above `blend_end`.
    pub blend_max: f64,
    pub blend_start: f64,
    pub blend_end: f64,
    /// Thrust never exceeds this multiple of the static estimate.
    pub max_static_multiple: f64,
}

impl PropellerConfig {
    /// McCauley 75 in fixed pitch.
    pub fn cessna_172() -> Self {
        Self {
            diameter: 1.905,
            pitch_ratio: 0.6,
            static_efficiency: 0.72,
            cruise_efficiency: 0.85,
            cruise_advance_ratio: 0.6,
            static_boost: 1.05,
            static_correction_max: 1.45,
            correction_fade_end: 0.7,
            blend_min: 0.05,
            blend_max: 0.90,
            blend_start: 0.2,
            blend_end: 0.7,
            max_static_multiple: 1.5,
        }
    }

    pub fn pa28_warrior() -> Self {
        Self {
            diameter: 1.88,
            pitch_ratio: 0.62,
            ..Self::cessna_172()
        }
    }
}
