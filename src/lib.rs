//! Synchro Path Library.
//! Zeitparametrisierte Bahnen mit synchronisierten Drehungen für fahrende Roboter.

pub mod core;
pub mod movement;
pub mod path;
pub mod plan;
pub mod profile;
pub mod shared;

pub use crate::core::{Pose, RotationState, TimeSpan};
pub use movement::{Delay, LinearRotation, Movement, MovementKind};
pub use path::{SegmentSpan, SplinePath};
pub use plan::{PlanFile, WaypointEntry};
pub use profile::{BoundedProfile, Profile, StretchedProfile, UnboundedProfile};
pub use shared::MotionOptions;
