use flight_core::{
    components::StartConfig,
    resources::{TelemetryBuffer, TelemetryConfig},
};

use crate::common::TestAppBuilder;

#[test]
fn test_cruise_telemetry_is_written_as_json_lines() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cruise.jsonl");

    let mut app = TestAppBuilder::new()
        .with_start(StartConfig::trimmed(50.0, 1_000.0))
        .with_telemetry(TelemetryConfig::default().with_output(&path))
        .build();
    app.run_seconds(2.0);

    assert!(app.resource::<TelemetryBuffer>().unwrap().is_empty());

    let contents = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<serde_json::Value> = contents
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    assert_eq!(lines.len(), 240);
    assert_eq!(lines[0]["tick"], 1);
    assert_eq!(lines[239]["tick"], 240);
    assert!(lines.iter().all(|l| l["forces"].is_object()));
    assert_eq!(lines[0]["engine"], "Running");
}

#[test]
fn test_slow_samples_omit_force_breakdown() {
    let mut app = TestAppBuilder::new()
        .with_telemetry(TelemetryConfig::default().with_sample_interval(10))
        .build();
    app.run_seconds(1.0);

    let buffer = app.resource::<TelemetryBuffer>().unwrap();
    assert_eq!(buffer.len(), 12);
    assert!(buffer.iter().all(|s| s.forces.is_none()));
    assert!(buffer.iter().all(|s| s.on_ground));
}
