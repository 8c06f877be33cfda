//! Eindimensionale Bewegungsprofile (Trapez/Dreieck, ohne Ruckbegrenzung).
//!
//! Aufgeteilt in:
//! - `unbounded` — Minimalzeit-Profil mit Umkehrfunktion (Zeit zu Teilstrecke)
//! - `bounded`   — Profil mit fester Zeitvorgabe (Drehungen entlang der Bahn)
//! - `stretched` — Profil, das ein gewünschtes Zeitfenster ausfüllt (reine Rotation)

mod bounded;
mod shape;
mod stretched;
mod unbounded;

pub use bounded::BoundedProfile;
pub use stretched::StretchedProfile;
pub use unbounded::UnboundedProfile;

use anyhow::{ensure, Result};

/// Gemeinsame Sampling-Schnittstelle aller Profile.
///
/// Zeiten außerhalb von `[0, duration]` werden geklemmt.
pub trait Profile {
    /// Gesamtdauer in Sekunden.
    fn duration(&self) -> f64;
    /// Verschiebung nach `elapsed` Sekunden.
    fn displacement(&self, elapsed: f64) -> f64;
    /// Geschwindigkeit nach `elapsed` Sekunden.
    fn velocity(&self, elapsed: f64) -> f64;
    /// Verschiebung am Ende des Profils.
    fn total_displacement(&self) -> f64;
}

fn validate_limits(max_velocity: f64, max_acceleration: f64) -> Result<()> {
    ensure!(
        max_velocity.is_finite() && max_velocity > 0.0,
        "Maximalgeschwindigkeit muss endlich und positiv sein, war {}",
        max_velocity
    );
    ensure!(
        max_acceleration.is_finite() && max_acceleration > 0.0,
        "Maximalbeschleunigung muss endlich und positiv sein, war {}",
        max_acceleration
    );
    Ok(())
}
