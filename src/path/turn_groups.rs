//! Drehgruppen: Aufteilung der Segmente in synchronisierte Drehungen.
//!
//! Eine Gruppe beginnt an einem Segment mit Heading-Änderung und schluckt alle
//! folgenden Segmente ohne eigene Änderung. Die Drehung verteilt sich damit auf
//! die Fahrzeit der ganzen Gruppe. Führende Segmente ohne Änderung bilden je
//! eine eigene Gruppe ohne Drehung.

use crate::profile::BoundedProfile;
use crate::shared::angle::normalize_angle;

/// Toleranz, unter der eine Heading-Änderung als "keine Drehung" gilt (Radiant).
pub const HEADING_EPSILON: f64 = 1e-12;

/// Segmentbereich `[first, last]` einer Drehgruppe. `first` ist der Anker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SegmentSpan {
    pub first: usize,
    pub last: usize,
}

impl SegmentSpan {
    pub fn contains(&self, segment: usize) -> bool {
        (self.first..=self.last).contains(&segment)
    }

    /// Anzahl der Segmente in der Gruppe.
    pub fn segment_count(&self) -> usize {
        self.last - self.first + 1
    }
}

/// Teilt die Segmente zwischen `headings` (ein Heading pro Wegpunkt) in Drehgruppen.
///
/// Arbeitet nur auf den Roh-Headings und ist frei von Seiteneffekten.
/// Jedes Segment liegt in genau einer Gruppe, die Gruppen sind lückenlos
/// und aufsteigend sortiert.
pub fn partition_segments(headings: &[f64]) -> Vec<SegmentSpan> {
    let segment_count = headings.len().saturating_sub(1);
    let turns = |segment: usize| {
        normalize_angle(headings[segment + 1] - headings[segment]).abs() > HEADING_EPSILON
    };

    let mut spans = Vec::new();
    let mut first = 0;
    while first < segment_count {
        let mut last = first;
        if turns(first) {
            while last + 1 < segment_count && !turns(last + 1) {
                last += 1;
            }
        }
        spans.push(SegmentSpan { first, last });
        first = last + 1;
    }
    spans
}

/// Eine Drehgruppe mit ihrem Profil und den korrigierten Headings an ihren Rändern.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TurnGroup {
    pub(crate) span: SegmentSpan,
    /// Zeitpunkt, zu dem das Anker-Segment beginnt
    pub(crate) start_time: f64,
    /// Korrigiertes Heading beim Eintritt in die Gruppe
    pub(crate) start_heading: f64,
    /// Korrigiertes Heading nach Abschluss der Drehung
    pub(crate) end_heading: f64,
    pub(crate) profile: BoundedProfile,
}

impl TurnGroup {
    pub fn span(&self) -> SegmentSpan {
        self.span
    }

    pub fn start_time(&self) -> f64 {
        self.start_time
    }

    pub fn start_heading(&self) -> f64 {
        self.start_heading
    }

    pub fn end_heading(&self) -> f64 {
        self.end_heading
    }

    pub fn profile(&self) -> &BoundedProfile {
        &self.profile
    }

    /// Heading zum Gesamtzeitpunkt `elapsed`.
    ///
    /// Nach Ende des Profils wird exakt `end_heading` geliefert.
    pub fn heading(&self, elapsed: f64) -> f64 {
        let local = elapsed - self.start_time;
        if local >= self.profile.duration() {
            self.end_heading
        } else {
            self.start_heading + self.profile.displacement(local)
        }
    }

    /// Winkelgeschwindigkeit des Profils zum Gesamtzeitpunkt `elapsed`.
    pub fn angular_velocity(&self, elapsed: f64) -> f64 {
        self.profile.velocity(elapsed - self.start_time)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn test_partition_leading_straight_segments_are_own_groups() {
        let headings = [0.0, 0.0, 0.0, FRAC_PI_2];
        let spans = partition_segments(&headings);
        assert_eq!(
            spans,
            vec![
                SegmentSpan { first: 0, last: 0 },
                SegmentSpan { first: 1, last: 1 },
                SegmentSpan { first: 2, last: 2 },
            ]
        );
    }

    #[test]
    fn test_partition_turn_swallows_following_straight_segments() {
        let headings = [0.0, FRAC_PI_2, FRAC_PI_2, FRAC_PI_2, PI, PI];
        let spans = partition_segments(&headings);
        assert_eq!(
            spans,
            vec![
                SegmentSpan { first: 0, last: 2 },
                SegmentSpan { first: 3, last: 4 },
            ]
        );
        assert_eq!(spans[0].segment_count(), 3);
        assert!(spans[1].contains(4));
        assert!(!spans[1].contains(2));
    }

    #[test]
    fn test_partition_full_turn_counts_as_no_turn() {
        let headings = [0.0, 2.0 * PI];
        let spans = partition_segments(&headings);
        assert_eq!(spans, vec![SegmentSpan { first: 0, last: 0 }]);
    }

    #[test]
    fn test_partition_without_segments() {
        assert!(partition_segments(&[]).is_empty());
        assert!(partition_segments(&[1.0]).is_empty());
    }

    #[test]
    fn test_partition_covers_every_segment_once() {
        let headings = [0.3, 0.3, 1.0, 1.0, -2.0, 2.5, 2.5, 2.5];
        let spans = partition_segments(&headings);
        let mut expected = 0;
        for span in &spans {
            assert_eq!(span.first, expected);
            assert!(span.last >= span.first);
            expected = span.last + 1;
        }
        assert_eq!(expected, headings.len() - 1);
    }

    #[test]
    fn test_turn_group_heading_snaps_to_end() {
        let profile = BoundedProfile::new(1.0, 4.0, 1.0, 1.0).unwrap();
        let group = TurnGroup {
            span: SegmentSpan { first: 1, last: 2 },
            start_time: 2.0,
            start_heading: 0.5,
            end_heading: 1.5,
            profile,
        };
        assert_eq!(group.heading(0.0), 0.5);
        assert_eq!(group.heading(6.0), 1.5);
        assert_eq!(group.heading(100.0), 1.5);
        let mid = group.heading(4.0);
        assert!((mid - 1.0).abs() < 1e-9, "Mitte der Drehung: {}", mid);
        assert!(group.angular_velocity(4.0) > 0.0);
        assert_eq!(group.angular_velocity(1.0), 0.0);
    }
}
