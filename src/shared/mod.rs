//! Geteilte Bausteine ohne Abhängigkeit zu Profilen oder Bahnen.
//!
//! Winkel-Hilfen, Catmull-Rom-Geometrie und die Konfiguration der Bewegungsgrenzen.

pub mod angle;
pub mod options;
pub mod spline_geometry;

pub use angle::{bound, normalize_angle, sign};
pub use options::MotionOptions;
pub use spline_geometry::ArcLengthTable;
