//! Symmetrisches Trapez-/Dreiecksprofil von Ruhe zu Ruhe.
//!
//! Gemeinsamer Sampling-Kern aller Profil-Varianten. Das Profil beschleunigt
//! mit `acceleration` bis `peak_velocity`, fährt konstant und bremst
//! spiegelbildlich. Erreicht es `peak_velocity` nie, entfällt die
//! Konstantphase (Dreieck).

use crate::shared::angle::bound;

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct ProfileShape {
    distance: f64,
    peak_velocity: f64,
    acceleration: f64,
    duration: f64,
}

impl ProfileShape {
    /// Profil ohne Bewegung und ohne Dauer.
    pub fn zero(acceleration: f64) -> Self {
        Self {
            distance: 0.0,
            peak_velocity: 0.0,
            acceleration,
            duration: 0.0,
        }
    }

    /// Zeitoptimales Profil für `distance` unter den Grenzen.
    ///
    /// Dreieck wenn `distance < max_velocity² / max_acceleration`,
    /// sonst Trapez mit `T = distance / max_velocity + max_velocity / max_acceleration`.
    pub fn fastest(distance: f64, max_velocity: f64, max_acceleration: f64) -> Self {
        if distance <= 0.0 {
            return Self::zero(max_acceleration);
        }

        let t_a = max_velocity / max_acceleration;
        if distance < max_velocity * t_a {
            let duration = (4.0 * distance / max_acceleration).sqrt();
            Self {
                distance,
                peak_velocity: 0.5 * max_acceleration * duration,
                acceleration: max_acceleration,
                duration,
            }
        } else {
            Self {
                distance,
                peak_velocity: max_velocity,
                acceleration: max_acceleration,
                duration: distance / max_velocity + t_a,
            }
        }
    }

    /// Größte Distanz, die in `duration` unter den Grenzen erreichbar ist.
    pub fn max_distance(duration: f64, max_velocity: f64, max_acceleration: f64) -> f64 {
        let t_a = max_velocity / max_acceleration;
        if duration < 2.0 * t_a {
            max_acceleration * duration * duration / 4.0
        } else {
            (duration - t_a) * max_velocity
        }
    }

    /// Profil, das `distance` in exakt `duration` zurücklegt.
    ///
    /// Die Spitzengeschwindigkeit wird gedrosselt, bis das Profil das Fenster
    /// füllt: `v = (a·T − sqrt((a·T)² − 4·a·d)) / 2`. Der Aufrufer garantiert
    /// `distance <= max_distance(duration, ..)`.
    pub fn filling(distance: f64, duration: f64, max_velocity: f64, max_acceleration: f64) -> Self {
        if distance <= 0.0 || duration <= 0.0 {
            return Self::zero(max_acceleration);
        }

        let a = max_acceleration;
        let discriminant = (a * duration).powi(2) - 4.0 * a * distance;
        let peak_velocity = 0.5 * (a * duration - discriminant.max(0.0).sqrt());

        Self {
            distance,
            peak_velocity: peak_velocity.min(max_velocity).min(0.5 * a * duration),
            acceleration: a,
            duration,
        }
    }

    pub fn distance(&self) -> f64 {
        self.distance
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    pub fn peak_velocity(&self) -> f64 {
        self.peak_velocity
    }

    /// Zeit bis zum Erreichen der Spitzengeschwindigkeit.
    fn ramp_time(&self) -> f64 {
        self.peak_velocity / self.acceleration
    }

    /// Zurückgelegte Distanz nach `elapsed` (geklemmt auf `[0, duration]`).
    pub fn position(&self, elapsed: f64) -> f64 {
        if self.distance == 0.0 {
            return 0.0;
        }
        if elapsed >= self.duration {
            return self.distance;
        }
        let t = bound(elapsed, 0.0, self.duration);
        let a = self.acceleration;
        let v = self.peak_velocity;
        let t_a = self.ramp_time();

        if t <= t_a {
            0.5 * a * t * t
        } else if t <= self.duration - t_a {
            0.5 * a * t_a * t_a + v * (t - t_a)
        } else {
            let t_n = self.duration - t;
            self.distance - 0.5 * a * t_n * t_n
        }
    }

    /// Geschwindigkeit nach `elapsed` (0 außerhalb von `[0, duration]`).
    pub fn velocity(&self, elapsed: f64) -> f64 {
        if self.distance == 0.0 || elapsed <= 0.0 || elapsed >= self.duration {
            return 0.0;
        }
        let a = self.acceleration;
        let t_a = self.ramp_time();

        let velocity = if elapsed <= t_a {
            a * elapsed
        } else if elapsed <= self.duration - t_a {
            self.peak_velocity
        } else {
            a * (self.duration - elapsed)
        };
        velocity.min(self.peak_velocity)
    }

    /// Verstrichene Zeit, bei der `traveled` erreicht ist (Umkehrung von `position`).
    pub fn inverse(&self, traveled: f64) -> f64 {
        if self.distance == 0.0 {
            return 0.0;
        }
        let x = bound(traveled, 0.0, self.distance);
        let a = self.acceleration;
        let t_a = self.ramp_time();
        let ramp_distance = 0.5 * a * t_a * t_a;

        if x <= ramp_distance {
            (2.0 * x / a).sqrt()
        } else if x <= self.distance - ramp_distance {
            t_a + (x - ramp_distance) / self.peak_velocity
        } else {
            self.duration - (2.0 * (self.distance - x) / a).sqrt()
        }
    }
}
