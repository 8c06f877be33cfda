//! Reine Geometrie-Funktionen für Catmull-Rom-Splines.
//!
//! Uniforme Catmull-Rom-Segmente mit geklemmten Rändern: Für das erste und
//! letzte Segment wird der Randpunkt als Kontrollpunkt dupliziert.

use glam::DVec2;

/// Berechnet einen Punkt auf einem Catmull-Rom-Segment (t ∈ [0, 1]).
///
/// p0, p1, p2, p3: vier aufeinanderfolgende Kontrollpunkte.
/// Die Kurve verläuft von p1 nach p2.
pub fn catmull_rom_point(p0: DVec2, p1: DVec2, p2: DVec2, p3: DVec2, t: f64) -> DVec2 {
    let t2 = t * t;
    let t3 = t2 * t;
    0.5 * ((2.0 * p1)
        + (-p0 + p2) * t
        + (2.0 * p0 - 5.0 * p1 + 4.0 * p2 - p3) * t2
        + (-p0 + 3.0 * p1 - 3.0 * p2 + p3) * t3)
}

/// Ableitung eines Catmull-Rom-Segments nach dem Kurvenparameter t.
pub fn catmull_rom_derivative(p0: DVec2, p1: DVec2, p2: DVec2, p3: DVec2, t: f64) -> DVec2 {
    let t2 = t * t;
    0.5 * ((-p0 + p2)
        + 2.0 * (2.0 * p0 - 5.0 * p1 + 4.0 * p2 - p3) * t
        + 3.0 * (-p0 + 3.0 * p1 - 3.0 * p2 + p3) * t2)
}

/// Kontrollpunkte `[i-1, i, i+1, i+2]` für Segment `segment`, an den Rändern geklemmt.
///
/// Aufrufer garantiert `segment + 1 < points.len()`.
pub fn segment_control_points(points: &[DVec2], segment: usize) -> [DVec2; 4] {
    let last = points.len() - 1;
    [
        points[segment.saturating_sub(1)],
        points[segment],
        points[segment + 1],
        points[(segment + 2).min(last)],
    ]
}

/// Kumulierte Bogenlängen eines Kurvensegments bei festen Parameterschritten.
///
/// `cumulative[k]` ist die Polylinien-Länge von `t = 0` bis `t = k / steps`.
/// Monoton steigend, daher per Binärsuche invertierbar.
#[derive(Debug, Clone, PartialEq)]
pub struct ArcLengthTable {
    cumulative: Vec<f64>,
}

impl ArcLengthTable {
    /// Tastet `eval` in Schritten von `delta_t` ab (letzter Schritt landet exakt auf t = 1).
    pub fn build(eval: impl Fn(f64) -> DVec2, delta_t: f64) -> Self {
        let steps = (1.0 / delta_t).round().max(1.0) as usize;
        let mut cumulative = Vec::with_capacity(steps + 1);
        let mut prev = eval(0.0);
        let mut length = 0.0;
        cumulative.push(0.0);
        for i in 1..=steps {
            let p = eval(i as f64 / steps as f64);
            length += prev.distance(p);
            cumulative.push(length);
            prev = p;
        }
        Self { cumulative }
    }

    /// Anzahl der Parameterschritte.
    pub fn steps(&self) -> usize {
        self.cumulative.len() - 1
    }

    /// Gesamtlänge des Segments.
    pub fn length(&self) -> f64 {
        self.cumulative[self.steps()]
    }

    /// Kurvenparameter t ∈ [0, 1], bei dem die Bogenlänge `distance` erreicht wird.
    ///
    /// Binärsuche auf der Tabelle, linear interpoliert innerhalb eines Schritts.
    pub fn parameter_at(&self, distance: f64) -> f64 {
        let steps = self.steps();
        if distance <= 0.0 {
            return 0.0;
        }
        if distance >= self.length() {
            return 1.0;
        }

        let idx = self
            .cumulative
            .partition_point(|&len| len < distance)
            .clamp(1, steps);

        let len_before = self.cumulative[idx - 1];
        let len_after = self.cumulative[idx];
        let frac = if (len_after - len_before).abs() > f64::EPSILON {
            (distance - len_before) / (len_after - len_before)
        } else {
            0.0
        };

        ((idx - 1) as f64 + frac) / steps as f64
    }
}
