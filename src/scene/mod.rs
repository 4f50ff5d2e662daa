//! Scene state, lighting and the session that front ends drive.

mod lighting;
mod snapshot;
mod state;
mod studio;

pub use lighting::{Lighting, LightingMode};
pub use snapshot::{GradientStop, LightingSummary, SceneSnapshot};
pub use state::{SceneState, Target};
pub use studio::Studio;
