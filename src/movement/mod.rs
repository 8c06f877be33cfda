//! Bewegungen als gemeinsame Abstraktion über Bahnen, Pausen und Drehungen.
//!
//! Eine externe Regelschleife fragt `pose` und `velocity` zur aktuellen Zeit
//! ab; welcher Bewegungstyp dahinter steckt, spielt für sie keine Rolle.

mod delay;
mod linear_rotation;

pub use delay::Delay;
pub use linear_rotation::LinearRotation;

use crate::core::Pose;
use crate::path::SplinePath;

/// Art einer Bewegung.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MovementKind {
    /// Fahrt entlang einer Bahn
    Drive,
    /// Reine Drehung auf der Stelle
    Rotation,
    /// Stillstand für eine feste Zeit
    Delay,
}

/// Zeitparametrisierte Bewegung mit Soll-Pose und Soll-Geschwindigkeit.
///
/// `elapsed` ist die Zeit seit Beginn der Bewegung; Werte außerhalb von
/// `[0, duration()]` werden geklemmt.
pub trait Movement {
    fn kind(&self) -> MovementKind;

    /// Gesamtdauer in Sekunden.
    fn duration(&self) -> f64;

    fn pose(&self, elapsed: f64) -> Pose;

    /// Geschwindigkeit als Pose (Vektor + Winkelgeschwindigkeit).
    fn velocity(&self, elapsed: f64) -> Pose;

    fn start_pose(&self) -> Pose;

    fn end_pose(&self) -> Pose;

    fn display_name(&self) -> &'static str;
}

impl Movement for SplinePath {
    fn kind(&self) -> MovementKind {
        MovementKind::Drive
    }

    fn duration(&self) -> f64 {
        SplinePath::duration(self)
    }

    fn pose(&self, elapsed: f64) -> Pose {
        SplinePath::pose(self, elapsed)
    }

    fn velocity(&self, elapsed: f64) -> Pose {
        SplinePath::velocity(self, elapsed)
    }

    fn start_pose(&self) -> Pose {
        SplinePath::start_pose(self)
    }

    fn end_pose(&self) -> Pose {
        SplinePath::end_pose(self)
    }

    fn display_name(&self) -> &'static str {
        "SplinePath"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::MotionOptions;

    #[test]
    fn test_movements_behind_trait_object() {
        let path = SplinePath::new(
            &[Pose::new(0.0, 0.0, 0.0), Pose::new(2.0, 0.0, 0.0)],
            &MotionOptions::default(),
        )
        .expect("Bahn muss sich bauen lassen");
        let delay = Delay::new(path.end_pose(), 1.5).expect("gültige Pause");

        let movements: Vec<Box<dyn Movement>> = vec![Box::new(path), Box::new(delay)];
        let kinds: Vec<MovementKind> = movements.iter().map(|m| m.kind()).collect();
        assert_eq!(kinds, vec![MovementKind::Drive, MovementKind::Delay]);

        // Übergänge zwischen aufeinanderfolgenden Bewegungen sind stetig
        assert_eq!(movements[0].end_pose(), movements[1].start_pose());
        assert_eq!(
            movements[0].pose(movements[0].duration()),
            movements[1].pose(0.0)
        );
        assert_eq!(movements[0].display_name(), "SplinePath");
        assert_eq!(movements[1].duration(), 1.5);
    }
}
