pub mod aircraft;
pub mod events;
pub mod physics;

pub use aircraft::*;
pub use events::PhysicsFault;
pub use physics::{ForceSet, MomentSet};
