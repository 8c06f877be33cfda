//! Skalarer Drehzustand für reine Rotationsbewegungen.

use crate::shared::angle;
use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul, Neg, Sub};

/// Heading (Radiant) als eigenständiger Wert mit Arithmetik.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
pub struct RotationState {
    heading: f64,
}

impl RotationState {
    pub fn new(heading: f64) -> Self {
        Self { heading }
    }

    pub fn heading(&self) -> f64 {
        self.heading
    }

    /// Betrag des Drehwinkels.
    pub fn abs(&self) -> f64 {
        self.heading.abs()
    }

    /// Drehrichtung: -1, 0 oder +1.
    pub fn sign(&self) -> f64 {
        angle::sign(self.heading)
    }
}

impl Add for RotationState {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.heading + rhs.heading)
    }
}

impl Sub for RotationState {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.heading - rhs.heading)
    }
}

impl Mul<f64> for RotationState {
    type Output = Self;

    fn mul(self, factor: f64) -> Self {
        Self::new(self.heading * factor)
    }
}

impl Neg for RotationState {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.heading)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotation_state_arithmetic() {
        let a = RotationState::new(1.0);
        let b = RotationState::new(-0.5);

        assert_eq!((a - b).heading(), 1.5);
        assert_eq!((a + b).heading(), 0.5);
        assert_eq!((b * 4.0).heading(), -2.0);
        assert_eq!((-a).heading(), -1.0);
        assert_eq!(b.abs(), 0.5);
        assert_eq!(b.sign(), -1.0);
        assert_eq!(RotationState::default().sign(), 0.0);
    }
}
