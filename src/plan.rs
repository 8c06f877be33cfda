//! Plan-Datei: Wegpunkte und optionale Bewegungsgrenzen als TOML.
//!
//! ```toml
//! [motion]
//! max_velocity = 1.5
//! max_acceleration = 1.0
//! max_angular_velocity = 3.14159
//! max_angular_acceleration = 3.14159
//!
//! [[waypoints]]
//! x = 0.0
//! y = 0.0
//!
//! [[waypoints]]
//! x = 2.0
//! y = 1.0
//! heading = 1.5708
//! ```

use crate::core::Pose;
use crate::path::SplinePath;
use crate::shared::MotionOptions;
use anyhow::{ensure, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Ein Wegpunkt der Plan-Datei. `heading` in Radiant, Standard 0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WaypointEntry {
    pub x: f64,
    pub y: f64,
    #[serde(default)]
    pub heading: f64,
}

impl From<WaypointEntry> for Pose {
    fn from(entry: WaypointEntry) -> Self {
        Pose::new(entry.x, entry.y, entry.heading)
    }
}

/// Inhalt einer Plan-Datei.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanFile {
    /// Überschreibt die globalen Optionen, falls gesetzt
    #[serde(default)]
    pub motion: Option<MotionOptions>,
    pub waypoints: Vec<WaypointEntry>,
}

impl PlanFile {
    /// Parst eine Plan-Datei aus einem TOML-String.
    pub fn parse(content: &str) -> Result<Self> {
        let plan: Self = toml::from_str(content).context("Plan-Datei ist kein gültiges TOML")?;
        ensure!(
            !plan.waypoints.is_empty(),
            "Plan-Datei enthält keine Wegpunkte"
        );
        if let Some(motion) = &plan.motion {
            motion
                .validate()
                .context("Ungültige Bewegungsgrenzen in [motion]")?;
        }
        Ok(plan)
    }

    /// Lädt und parst eine Plan-Datei.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Plan-Datei nicht lesbar: {}", path.display()))?;
        let plan = Self::parse(&content)
            .with_context(|| format!("Plan-Datei fehlerhaft: {}", path.display()))?;
        log::info!(
            "Plan geladen aus: {} ({} Wegpunkte)",
            path.display(),
            plan.waypoints.len()
        );
        Ok(plan)
    }

    /// Wegpunkte als Posen.
    pub fn poses(&self) -> Vec<Pose> {
        self.waypoints.iter().copied().map(Pose::from).collect()
    }

    /// Grenzen aus der Datei, sonst `fallback`.
    pub fn motion_or(&self, fallback: MotionOptions) -> MotionOptions {
        self.motion.unwrap_or(fallback)
    }

    /// Baut die Bahn mit den Grenzen der Datei oder `fallback`.
    pub fn build_path(&self, fallback: MotionOptions) -> Result<SplinePath> {
        SplinePath::new(&self.poses(), &self.motion_or(fallback))
    }
}
