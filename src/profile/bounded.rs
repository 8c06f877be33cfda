//! Profil mit fester Zeitvorgabe, z.B. für Drehungen synchron zu Bahnsegmenten.

use super::shape::ProfileShape;
use super::{validate_limits, Profile};
use crate::shared::angle::sign;
use anyhow::{ensure, Result};

/// Relative Toleranz, unter der eine Kürzung als Rundungsfehler gilt.
const CLAMP_TOLERANCE: f64 = 1e-12;

/// Profil, das eine vorzeichenbehaftete Verschiebung in genau `target_time` ausführt.
///
/// Ist das Zeitfenster länger als nötig, wird die Spitzengeschwindigkeit
/// gedrosselt. Ist es zu kurz, wird die Distanz auf das in `target_time`
/// Erreichbare gekürzt (`is_clamped`). Die Dauer übersteigt `target_time` nie.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundedProfile {
    shape: ProfileShape,
    sign: f64,
    requested_distance: f64,
    target_time: f64,
    max_velocity: f64,
    max_acceleration: f64,
}

impl BoundedProfile {
    pub fn new(
        target_displacement: f64,
        target_time: f64,
        max_velocity: f64,
        max_acceleration: f64,
    ) -> Result<Self> {
        ensure!(
            target_displacement.is_finite(),
            "Zielverschiebung muss endlich sein, war {}",
            target_displacement
        );
        ensure!(
            target_time.is_finite() && target_time >= 0.0,
            "Zielzeit muss endlich und nicht-negativ sein, war {}",
            target_time
        );
        validate_limits(max_velocity, max_acceleration)?;

        let requested_distance = target_displacement.abs();
        let max_distance = ProfileShape::max_distance(target_time, max_velocity, max_acceleration);
        let distance = requested_distance.min(max_distance);

        Ok(Self {
            shape: ProfileShape::filling(distance, target_time, max_velocity, max_acceleration),
            sign: sign(target_displacement),
            requested_distance,
            target_time,
            max_velocity,
            max_acceleration,
        })
    }

    /// Profil ohne Verschiebung (Segment ohne Drehung).
    pub fn zero(max_velocity: f64, max_acceleration: f64) -> Self {
        Self {
            shape: ProfileShape::zero(max_acceleration),
            sign: 0.0,
            requested_distance: 0.0,
            target_time: 0.0,
            max_velocity,
            max_acceleration,
        }
    }

    /// Tatsächlich zurückgelegter Betrag (ggf. gekürzt).
    pub fn total_distance(&self) -> f64 {
        self.shape.distance()
    }

    /// Tatsächliche vorzeichenbehaftete Verschiebung am Ende des Profils.
    pub fn total_displacement(&self) -> f64 {
        self.sign * self.shape.distance()
    }

    /// Dauer des Profils, `<= target_time`.
    pub fn duration(&self) -> f64 {
        self.shape.duration()
    }

    pub fn target_time(&self) -> f64 {
        self.target_time
    }

    /// True wenn die angeforderte Verschiebung im Zeitfenster nicht erreichbar war.
    pub fn is_clamped(&self) -> bool {
        self.requested_distance - self.shape.distance()
            > CLAMP_TOLERANCE * self.requested_distance.max(1.0)
    }

    /// Gedrosselte Spitzengeschwindigkeit (Betrag).
    pub fn peak_velocity(&self) -> f64 {
        self.shape.peak_velocity()
    }

    pub fn max_velocity(&self) -> f64 {
        self.max_velocity
    }

    pub fn max_acceleration(&self) -> f64 {
        self.max_acceleration
    }

    /// Vorzeichenbehaftete Verschiebung nach `elapsed` Sekunden.
    pub fn displacement(&self, elapsed: f64) -> f64 {
        self.sign * self.shape.position(elapsed)
    }

    /// Vorzeichenbehaftete Geschwindigkeit nach `elapsed` Sekunden.
    pub fn velocity(&self, elapsed: f64) -> f64 {
        self.sign * self.shape.velocity(elapsed)
    }
}

impl Profile for BoundedProfile {
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
        self.total_displacement()
    }
}
