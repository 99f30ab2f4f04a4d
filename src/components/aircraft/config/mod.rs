mod aero;
mod aircraft;
mod geometry;
mod ground;
mod loader;
mod mass;
mod propulsion;
mod start;

pub use aero::{AeroCoefficients, DragPolar, LiftCurve, MomentCoefficients};
pub use aircraft::{AircraftConfig, AircraftSource, AircraftType};
pub use geometry::AircraftGeometry;
pub use ground::{GroundConfig, SurfaceCoefficients};
pub use loader::{load_yaml, ConfigError};
pub use mass::MassModel;
pub use propulsion::{EngineConfig, PropellerConfig};
pub use start::{StartCondition, StartConfig};
