//! Catmull-Rom-Bahnplanung mit synchronisierten Drehungen.
//!
//! Aufgeteilt in:
//! - `spline_path` — Aufbau (Bogenlänge, Zeitmarken, Drehgruppen) und Sampling
//! - `turn_groups` — reine Aufteilung der Segmente in Drehgruppen

mod spline_path;
pub mod turn_groups;

pub use spline_path::SplinePath;
pub use turn_groups::{partition_segments, SegmentSpan, TurnGroup};
