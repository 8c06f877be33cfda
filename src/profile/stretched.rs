//! Profil, das ein gewünschtes Zeitfenster ausfüllt, sofern es machbar ist.

use super::shape::ProfileShape;
use super::{validate_limits, Profile};
use anyhow::{ensure, Result};

/// Streckt ein Profil auf ein gewünschtes Zeitfenster.
///
/// Ist die Minimalzeit kürzer als das Fenster, wird die Spitzengeschwindigkeit
/// gedrosselt, bis das Profil das Fenster genau füllt. Sonst bleibt es beim
/// Minimalzeit-Profil und `duration() == min_duration()`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StretchedProfile {
    shape: ProfileShape,
    min_duration: f64,
    desired_duration: f64,
}

impl StretchedProfile {
    pub fn new(
        distance: f64,
        desired_duration: f64,
        max_velocity: f64,
        max_acceleration: f64,
    ) -> Result<Self> {
        ensure!(
            distance.is_finite() && distance >= 0.0,
            "Distanz muss endlich und nicht-negativ sein, war {}",
            distance
        );
        ensure!(
            desired_duration.is_finite() && desired_duration >= 0.0,
            "Zeitfenster muss endlich und nicht-negativ sein, war {}",
            desired_duration
        );
        validate_limits(max_velocity, max_acceleration)?;

        let fastest = ProfileShape::fastest(distance, max_velocity, max_acceleration);
        let min_duration = fastest.duration();
        let shape = if distance > 0.0 && min_duration < desired_duration {
            ProfileShape::filling(distance, desired_duration, max_velocity, max_acceleration)
        } else {
            fastest
        };

        Ok(Self {
            shape,
            min_duration,
            desired_duration,
        })
    }

    pub fn distance(&self) -> f64 {
        self.shape.distance()
    }

    /// Tatsächlich verwendete Dauer.
    pub fn duration(&self) -> f64 {
        self.shape.duration()
    }

    /// Kürzeste machbare Dauer für die Distanz.
    pub fn min_duration(&self) -> f64 {
        self.min_duration
    }

    pub fn desired_duration(&self) -> f64 {
        self.desired_duration
    }

    /// True wenn das gewünschte Fenster mit den Grenzen erreichbar ist.
    pub fn is_feasible(&self) -> bool {
        self.min_duration <= self.desired_duration
    }

    pub fn peak_velocity(&self) -> f64 {
        self.shape.peak_velocity()
    }

    pub fn displacement(&self, elapsed: f64) -> f64 {
        self.shape.position(elapsed)
    }

    pub fn velocity(&self, elapsed: f64) -> f64 {
        self.shape.velocity(elapsed)
    }
}

impl Profile for StretchedProfile {
    fn duration(&self) -> f64 {
        self.duration()
    }

    fn displacement(&self, elapsed: f64) -> f64 {
        self.displacement(elapsed)
    }

    fn velocity(&self, elapsed: f64) -> f64 {
        self.velocity(elapsed)
    }

    fn total_displacement(&self) -> f64 {
        self.distance()
    }
}
