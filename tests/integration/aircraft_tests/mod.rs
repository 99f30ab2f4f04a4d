mod cruise;
mod engine;
mod faults;
mod ground;
mod takeoff;
mod telemetry;
