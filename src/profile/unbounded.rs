//! Zeitoptimales Profil ohne Zeitvorgabe.

use super::shape::ProfileShape;
use super::{validate_limits, Profile};
use anyhow::{ensure, Result};

/// Minimalzeit-Profil für eine Distanz unter Geschwindigkeits- und Beschleunigungsgrenze.
///
/// Startet und endet in Ruhe. Neben dem Vorwärts-Sampling (`position`, `velocity`)
/// liefert `inverse` die Zeit, zu der eine Teilstrecke erreicht ist.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnboundedProfile {
    shape: ProfileShape,
    max_velocity: f64,
    max_acceleration: f64,
}

impl UnboundedProfile {
    /// Erstellt das Profil. Negative Distanz oder nicht-positive Grenzen sind ein Fehler.
    pub fn new(distance: f64, max_velocity: f64, max_acceleration: f64) -> Result<Self> {
        ensure!(
            distance.is_finite() && distance >= 0.0,
            "Distanz muss endlich und nicht-negativ sein, war {}",
            distance
        );
        validate_limits(max_velocity, max_acceleration)?;

        Ok(Self {
            shape: ProfileShape::fastest(distance, max_velocity, max_acceleration),
            max_velocity,
            max_acceleration,
        })
    }

    /// Gesamtdistanz
    pub fn distance(&self) -> f64 {
        self.shape.distance()
    }

    /// Minimale Fahrzeit für die Distanz.
    pub fn duration(&self) -> f64 {
        self.shape.duration()
    }

    pub fn max_velocity(&self) -> f64 {
        self.max_velocity
    }

    pub fn max_acceleration(&self) -> f64 {
        self.max_acceleration
    }

    /// True wenn die Spitzengeschwindigkeit nie erreicht wird (Dreiecksprofil).
    pub fn is_triangular(&self) -> bool {
        self.shape.peak_velocity() < self.max_velocity
    }

    /// Zurückgelegte Distanz nach `elapsed` Sekunden.
    pub fn position(&self, elapsed: f64) -> f64 {
        self.shape.position(elapsed)
    }

    /// Geschwindigkeit nach `elapsed` Sekunden.
    pub fn velocity(&self, elapsed: f64) -> f64 {
        self.shape.velocity(elapsed)
    }

    /// Verstrichene Zeit, zu der `traveled` zurückgelegt ist.
    ///
    /// Monoton; Werte außerhalb `[0, distance]` werden geklemmt.
    pub fn inverse(&self, traveled: f64) -> f64 {
        self.shape.inverse(traveled)
    }
}

impl Profile for UnboundedProfile {
    fn duration(&self) -> f64 {
        self.duration()
    }

    fn displacement(&self, elapsed: f64) -> f64 {
        self.position(elapsed)
    }

    fn velocity(&self, elapsed: f64) -> f64 {
        self.velocity(elapsed)
    }

    fn total_displacement(&self) -> f64 {
        self.distance()
    }
}
