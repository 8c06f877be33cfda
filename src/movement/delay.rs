//! Stillstand an einer festen Pose.

use super::{Movement, MovementKind};
use crate::core::Pose;
use anyhow::{ensure, Result};

/// Hält `pose` für `seconds` Sekunden.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Delay {
    pose: Pose,
    seconds: f64,
}

impl Delay {
    pub fn new(pose: Pose, seconds: f64) -> Result<Self> {
        ensure!(
            seconds.is_finite() && seconds >= 0.0,
            "Pausendauer muss endlich und nicht-negativ sein, war {}",
            seconds
        );
        Ok(Self { pose, seconds })
    }
}

impl Movement for Delay {
    fn kind(&self) -> MovementKind {
        MovementKind::Delay
    }

    fn duration(&self) -> f64 {
        self.seconds
    }

    fn pose(&self, _elapsed: f64) -> Pose {
        self.pose
    }

    fn velocity(&self, _elapsed: f64) -> Pose {
        Pose::ZERO
    }

    fn start_pose(&self) -> Pose {
        self.pose
    }

    fn end_pose(&self) -> Pose {
        self.pose
    }

    fn display_name(&self) -> &'static str {
        "Delay"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delay_holds_pose() {
        let pose = Pose::new(1.0, 2.0, 0.5);
        let delay = Delay::new(pose, 3.0).expect("gültige Pause");

        assert_eq!(delay.duration(), 3.0);
        assert_eq!(delay.pose(0.0), pose);
        assert_eq!(delay.pose(10.0), pose);
        assert_eq!(delay.velocity(1.0), Pose::ZERO);
        assert_eq!(delay.start_pose(), delay.end_pose());
    }

    #[test]
    fn test_delay_rejects_negative_duration() {
        assert!(Delay::new(Pose::ZERO, -1.0).is_err());
        assert!(Delay::new(Pose::ZERO, f64::NAN).is_err());
    }
}
