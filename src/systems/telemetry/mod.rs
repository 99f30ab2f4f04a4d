mod recorder;
mod snapshot;

pub use recorder::{flush_telemetry_system, record_telemetry_system};
pub use snapshot::publish_snapshot_system;
