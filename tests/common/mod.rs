mod assertions;
mod helpers;
mod test_app;

pub use assertions::{assert_snapshot_finite, assert_state_finite, assert_within};
pub use helpers::*;
pub use test_app::{TestApp, TestAppBuilder};
