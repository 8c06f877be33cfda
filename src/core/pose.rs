//! Pose eines fahrenden Roboters: Position in der Ebene plus Ausrichtung.

use glam::DVec2;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Position (x, y) und Heading (Radiant).
///
/// Wird auch als Geschwindigkeits-Tripel verwendet: `position` ist dann der
/// Geschwindigkeitsvektor, `heading` die Winkelgeschwindigkeit.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Pose {
    /// Position in Welt-Koordinaten
    pub position: DVec2,
    /// Ausrichtung in Radiant
    pub heading: f64,
}

impl Pose {
    /// Ruhende Pose im Ursprung.
    pub const ZERO: Self = Self {
        position: DVec2::ZERO,
        heading: 0.0,
    };

    /// Erstellt eine neue Pose
    pub fn new(x: f64, y: f64, heading: f64) -> Self {
        Self {
            position: DVec2::new(x, y),
            heading,
        }
    }

    pub fn x(&self) -> f64 {
        self.position.x
    }

    pub fn y(&self) -> f64 {
        self.position.y
    }

    /// Gleiche Position, anderes Heading.
    pub fn with_heading(self, heading: f64) -> Self {
        Self { heading, ..self }
    }

    /// Euklidischer Abstand der Positionen (Heading wird ignoriert).
    pub fn distance(&self, other: &Pose) -> f64 {
        self.position.distance(other.position)
    }

    /// True wenn Position und Heading endlich sind.
    pub fn is_finite(&self) -> bool {
        self.position.is_finite() && self.heading.is_finite()
    }
}

impl fmt::Display for Pose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({:.3}, {:.3}, {:.3} rad)",
            self.position.x, self.position.y, self.heading
        )
    }
}
