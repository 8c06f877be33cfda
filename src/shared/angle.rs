//! Winkel- und Skalar-Hilfsfunktionen.
//!
//! Alle Winkel sind Radiant. Normalisiert wird auf `(-π, π]`.

use std::f64::consts::{PI, TAU};

/// Normalisiert einen Winkel (Radiant) auf `(-π, π]`.
///
/// Nicht-endliche Werte werden unverändert zurückgegeben.
pub fn normalize_angle(radians: f64) -> f64 {
    if !radians.is_finite() {
        return radians;
    }
    let mut angle = radians % TAU;
    if angle <= -PI {
        angle += TAU;
    } else if angle > PI {
        angle -= TAU;
    }
    angle
}

/// Begrenzt `x` auf `[lower, upper]`.
pub fn bound(x: f64, lower: f64, upper: f64) -> f64 {
    x.max(lower).min(upper)
}

/// Vorzeichen mit `sign(0) == 0` (im Gegensatz zu `f64::signum`).
pub fn sign(x: f64) -> f64 {
    if x > 0.0 {
        1.0
    } else if x < 0.0 {
        -1.0
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_normalize_angle_range() {
        assert_abs_diff_eq!(normalize_angle(0.0), 0.0);
        assert_abs_diff_eq!(normalize_angle(PI), PI);
        // -π liegt außerhalb des halboffenen Intervalls → +π
        assert_abs_diff_eq!(normalize_angle(-PI), PI);
        assert_abs_diff_eq!(normalize_angle(3.0 * PI / 2.0), -PI / 2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(normalize_angle(-5.0 * PI / 2.0), -PI / 2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(normalize_angle(7.0 * TAU + 0.25), 0.25, epsilon = 1e-9);
    }

    #[test]
    fn test_bound_and_sign() {
        assert_eq!(bound(-1.0, 0.0, 2.0), 0.0);
        assert_eq!(bound(3.0, 0.0, 2.0), 2.0);
        assert_eq!(bound(1.5, 0.0, 2.0), 1.5);
        assert_eq!(sign(0.0), 0.0);
        assert_eq!(sign(-0.3), -1.0);
        assert_eq!(sign(12.0), 1.0);
    }
}
