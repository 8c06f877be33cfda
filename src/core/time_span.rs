//! Zeitfenster einer Bewegung.

use anyhow::{ensure, Result};
use serde::{Deserialize, Serialize};

/// Unveränderliches Zeitfenster `[start_time, end_time]` in Sekunden.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeSpan {
    start_time: f64,
    end_time: f64,
}

impl TimeSpan {
    /// Erstellt ein Zeitfenster. Endzeit vor Startzeit ist ein Fehler.
    pub fn new(start_time: f64, end_time: f64) -> Result<Self> {
        ensure!(
            start_time.is_finite() && end_time.is_finite(),
            "Zeitfenster muss endlich sein: [{}, {}]",
            start_time,
            end_time
        );
        ensure!(
            end_time >= start_time,
            "Endzeit {} liegt vor Startzeit {}",
            end_time,
            start_time
        );
        Ok(Self {
            start_time,
            end_time,
        })
    }

    pub fn start_time(&self) -> f64 {
        self.start_time
    }

    pub fn end_time(&self) -> f64 {
        self.end_time
    }

    /// `end_time - start_time`
    pub fn duration(&self) -> f64 {
        self.end_time - self.start_time
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_span_duration() {
        let span = TimeSpan::new(1.5, 4.0).expect("gültiges Zeitfenster");
        assert_eq!(span.duration(), 2.5);
        assert_eq!(span.start_time(), 1.5);
        assert_eq!(span.end_time(), 4.0);
    }

    #[test]
    fn test_time_span_rejects_reversed_window() {
        assert!(TimeSpan::new(2.0, 1.0).is_err());
        assert!(TimeSpan::new(0.0, f64::INFINITY).is_err());
    }
}
