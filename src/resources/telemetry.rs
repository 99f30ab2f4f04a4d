use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::components::{EngineRunState, FlightSnapshot, ForceSet, GroundMode};
use crate::utils::{rad_to_deg, TelemetryError};

/// What gets recorded and where it goes.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TelemetryConfig {
    /// JSON-lines output file; samples stay in memory when unset.
    pub output: Option<PathBuf>,
    /// Samples kept in memory before the oldest are dropped.
    pub capacity: usize,
    /// Record one sample every this many ticks.
    pub sample_interval: u64,
    /// Airspeed (m/s) above which the per-force breakdown is included.
    pub force_breakdown_min_airspeed: f64,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            output: None,
            capacity: 7_200,
            sample_interval: 1,
            force_breakdown_min_airspeed: 25.0,
        }
    }
}

impl TelemetryConfig {
    pub fn with_output<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.output = Some(path.into());
        self
    }

    pub fn with_sample_interval(mut self, interval: u64) -> Self {
        self.sample_interval = interval.max(1);
        self
    }
}

/// One telemetry record, flattened for plotting.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TelemetrySample {
    pub tick: u64,
    pub time: f64,
    pub altitude: f64,
    pub airspeed: f64,
    pub airspeed_knots: f64,
    pub ground_speed: f64,
    pub vertical_speed: f64,
    pub pitch_deg: f64,
    pub roll_deg: f64,
    pub heading_deg: f64,
    pub aoa_deg: f64,
    pub lift_coefficient: f64,
    pub stalled: bool,
    pub rpm: f64,
    pub power_hp: f64,
    pub thrust: f64,
    pub engine: EngineRunState,
    pub on_ground: bool,
    pub ground_mode: GroundMode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub forces: Option<ForceSet>,
}

impl TelemetrySample {
    pub fn from_snapshot(snapshot: &FlightSnapshot, force_breakdown_min_airspeed: f64) -> Self {
        Self {
            tick: snapshot.tick,
            time: snapshot.time,
            altitude: snapshot.altitude(),
            airspeed: snapshot.airspeed,
            airspeed_knots: snapshot.airspeed_knots(),
            ground_speed: snapshot.ground_speed,
            vertical_speed: snapshot.velocity.y,
            pitch_deg: rad_to_deg(snapshot.rotation.x),
            roll_deg: rad_to_deg(snapshot.rotation.y),
            heading_deg: snapshot.heading_deg(),
            aoa_deg: rad_to_deg(snapshot.angle_of_attack),
            lift_coefficient: snapshot.lift_coefficient,
            stalled: snapshot.stalled,
            rpm: snapshot.rpm,
            power_hp: snapshot.power_hp,
            thrust: snapshot.thrust,
            engine: snapshot.engine,
            on_ground: snapshot.on_ground,
            ground_mode: snapshot.ground_mode,
            forces: (snapshot.airspeed > force_breakdown_min_airspeed).then_some(snapshot.forces),
        }
    }
}

/// Bounded in-memory queue of samples waiting to be flushed.
#[derive(Resource, Debug, Clone, Default)]
pub struct TelemetryBuffer {
    samples: VecDeque<TelemetrySample>,
    capacity: usize,
    dropped: u64,
}

impl TelemetryBuffer {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            samples: VecDeque::with_capacity(capacity.min(8_192)),
            capacity: capacity.max(1),
            dropped: 0,
        }
    }

    pub fn push(&mut self, sample: TelemetrySample) {
        if self.samples.len() >= self.capacity {
            self.samples.pop_front();
            self.dropped += 1;
        }
        self.samples.push_back(sample);
    }

    pub fn drain(&mut self) -> impl Iterator<Item = TelemetrySample> + '_ {
        self.samples.drain(..)
    }

    pub fn iter(&self) -> impl Iterator<Item = &TelemetrySample> {
        self.samples.iter()
    }

    pub fn latest(&self) -> Option<&TelemetrySample> {
        self.samples.back()
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Samples lost to the capacity bound since startup.
    pub fn dropped(&self) -> u64 {
        self.dropped
    }
}

/// JSON-lines writer for telemetry samples.
#[derive(Resource, Debug)]
pub struct TelemetrySink {
    path: PathBuf,
    writer: BufWriter<File>,
    written: u64,
}

impl TelemetrySink {
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self, TelemetryError> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        let file = File::create(&path)?;
        Ok(Self {
            path,
            writer: BufWriter::new(file),
            written: 0,
        })
    }

    pub fn write(&mut self, sample: &TelemetrySample) -> Result<(), TelemetryError> {
        serde_json::to_writer(&mut self.writer, sample)?;
        self.writer.write_all(b"\n")?;
        self.written += 1;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<(), TelemetryError> {
        self.writer.flush()?;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn written(&self) -> u64 {
        self.written
    }
}
