//! Drehung auf der Stelle von einem Start- zu einem Ziel-Heading.

use super::MovementKind;
use crate::core::{RotationState, TimeSpan};
use crate::profile::StretchedProfile;
use crate::shared::MotionOptions;
use anyhow::{Context, Result};

/// Lineare Interpolation zwischen zwei Drehzuständen entlang eines gestreckten Profils.
///
/// Die Zeit wird relativ zum Beginn des Zeitfensters gemessen. Ist das Fenster
/// kürzer als die Minimalzeit, dauert die Drehung `min_duration()`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearRotation {
    start: RotationState,
    end: RotationState,
    time_span: TimeSpan,
    distance: f64,
    profile: StretchedProfile,
}

impl LinearRotation {
    pub fn new(
        start: RotationState,
        end: RotationState,
        time_span: TimeSpan,
        options: &MotionOptions,
    ) -> Result<Self> {
        let distance = (end - start).abs();
        let profile = StretchedProfile::new(
            distance,
            time_span.duration(),
            options.max_angular_velocity,
            options.max_angular_acceleration,
        )
        .context("Drehprofil konnte nicht erstellt werden")?;

        if !profile.is_feasible() {
            log::debug!(
                "Drehung um {:.3} rad passt nicht in {:.3}s, benötigt {:.3}s",
                distance,
                time_span.duration(),
                profile.min_duration()
            );
        }

        Ok(Self {
            start,
            end,
            time_span,
            distance,
            profile,
        })
    }

    pub fn kind(&self) -> MovementKind {
        MovementKind::Rotation
    }

    pub fn start_time(&self) -> f64 {
        self.time_span.start_time()
    }

    pub fn end_time(&self) -> f64 {
        self.time_span.end_time()
    }

    /// Tatsächliche Dauer der Drehung.
    pub fn duration(&self) -> f64 {
        self.profile.duration()
    }

    /// Kürzeste machbare Dauer mit den Winkelgrenzen.
    pub fn min_duration(&self) -> f64 {
        self.profile.min_duration()
    }

    pub fn start_state(&self) -> RotationState {
        self.start
    }

    pub fn end_state(&self) -> RotationState {
        self.end
    }

    /// Drehzustand zum Zeitpunkt `elapsed`.
    pub fn state(&self, elapsed: f64) -> RotationState {
        let progress = if self.distance != 0.0 {
            self.profile.displacement(self.local_time(elapsed)) / self.distance
        } else {
            0.0
        };
        self.start * (1.0 - progress) + self.end * progress
    }

    /// Winkelgeschwindigkeit zum Zeitpunkt `elapsed`, Vorzeichen = Drehrichtung.
    pub fn velocity(&self, elapsed: f64) -> RotationState {
        let sign = (self.end - self.start).sign();
        RotationState::new(sign * self.profile.velocity(self.local_time(elapsed)))
    }

    pub fn display_name(&self) -> &'static str {
        "LinearRotation"
    }

    fn local_time(&self, elapsed: f64) -> f64 {
        elapsed - self.time_span.start_time()
    }
}
