use bevy::prelude::*;

use crate::utils::IntegrationError;

/// Sent when a tick was discarded because it produced non-finite values.
#[derive(Event, Debug, Clone, PartialEq)]
pub struct PhysicsFault {
    pub entity: Entity,
    /// Index of the discarded tick.
    pub tick: u64,
    pub error: IntegrationError,
}
