//! Zentrale Konfiguration der Bewegungsgrenzen.
//!
//! `MotionOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use anyhow::{ensure, Result};
use serde::{Deserialize, Serialize};

// ── Translation ─────────────────────────────────────────────────────

/// Maximale Bahngeschwindigkeit (m/s).
pub const MAX_VELOCITY: f64 = 1.5;
/// Maximale Bahnbeschleunigung (m/s²).
pub const MAX_ACCELERATION: f64 = 1.0;

// ── Rotation ────────────────────────────────────────────────────────

/// Maximale Winkelgeschwindigkeit (rad/s).
pub const MAX_ANGULAR_VELOCITY: f64 = std::f64::consts::PI;
/// Maximale Winkelbeschleunigung (rad/s²).
pub const MAX_ANGULAR_ACCELERATION: f64 = std::f64::consts::PI;

// ── Numerik ─────────────────────────────────────────────────────────

/// Schrittweite im Kurvenparameter für die Bogenlängen-Integration.
pub const DELTA_T: f64 = 1e-2;
/// Kleinste zulässige Schrittweite; begrenzt die Größe der Bogenlängen-Tabellen.
pub const MIN_DELTA_T: f64 = 1e-6;

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Bewegungsgrenzen und Integrationsschritt.
/// Wird als `synchro_path.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MotionOptions {
    /// Maximale Bahngeschwindigkeit
    pub max_velocity: f64,
    /// Maximale Bahnbeschleunigung
    pub max_acceleration: f64,
    /// Maximale Winkelgeschwindigkeit
    pub max_angular_velocity: f64,
    /// Maximale Winkelbeschleunigung
    pub max_angular_acceleration: f64,
    /// Schrittweite der Bogenlängen-Integration (Parameter-Einheiten, [MIN_DELTA_T, 1])
    #[serde(default = "default_delta_t")]
    pub delta_t: f64,
}

impl Default for MotionOptions {
    fn default() -> Self {
        Self {
            max_velocity: MAX_VELOCITY,
            max_acceleration: MAX_ACCELERATION,
            max_angular_velocity: MAX_ANGULAR_VELOCITY,
            max_angular_acceleration: MAX_ANGULAR_ACCELERATION,
            delta_t: DELTA_T,
        }
    }
}

/// Serde-Default für `delta_t` (ältere Dateien ohne Integrationsschritt).
fn default_delta_t() -> f64 {
    DELTA_T
}

impl MotionOptions {
    /// Erstellt Optionen mit den angegebenen Grenzen und dem Standard-Integrationsschritt.
    pub fn new(
        max_velocity: f64,
        max_acceleration: f64,
        max_angular_velocity: f64,
        max_angular_acceleration: f64,
    ) -> Self {
        Self {
            max_velocity,
            max_acceleration,
            max_angular_velocity,
            max_angular_acceleration,
            delta_t: DELTA_T,
        }
    }

    /// Prüft, dass alle Grenzen endlich und positiv sind.
    pub fn validate(&self) -> Result<()> {
        check_limit("max_velocity", self.max_velocity)?;
        check_limit("max_acceleration", self.max_acceleration)?;
        check_limit("max_angular_velocity", self.max_angular_velocity)?;
        check_limit("max_angular_acceleration", self.max_angular_acceleration)?;
        ensure!(
            self.delta_t.is_finite() && self.delta_t >= MIN_DELTA_T && self.delta_t <= 1.0,
            "delta_t muss in [{}, 1] liegen, war {}",
            MIN_DELTA_T,
            self.delta_t
        );
        Ok(())
    }

    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str::<Self>(&content) {
                Ok(opts) => match opts.validate() {
                    Ok(()) => {
                        log::info!("Optionen geladen aus: {}", path.display());
                        opts
                    }
                    Err(e) => {
                        log::warn!("Optionen ungültig, verwende Standardwerte: {:#}", e);
                        Self::default()
                    }
                },
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("synchro_path"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("synchro_path.toml")
    }
}

fn check_limit(name: &str, value: f64) -> Result<()> {
    ensure!(
        value.is_finite() && value > 0.0,
        "{} muss endlich und positiv sein, war {}",
        name,
        value
    );
    Ok(())
}
