//! Core-Werttypen: Pose, Drehzustand, Zeitfenster.

pub mod pose;
pub mod rotation_state;
pub mod time_span;

pub use pose::Pose;
pub use rotation_state::RotationState;
pub use time_span::TimeSpan;
