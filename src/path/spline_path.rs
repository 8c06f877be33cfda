//! Zeitparametrisierte Catmull-Rom-Bahn durch eine Folge von Wegpunkten.
//!
//! Die Translation folgt einem einzigen Minimalzeit-Profil über die gesamte
//! Bogenlänge. Die Segmentgrenzen in der Zeit ergeben sich aus der Umkehrung
//! dieses Profils. Heading-Änderungen werden in Drehgruppen zusammengefasst
//! und auf die Fahrzeit ihrer Segmente synchronisiert. Reicht die Fahrzeit der
//! letzten Gruppe nicht, wird das letzte Segment verlängert, damit das
//! End-Heading exakt erreicht wird.
//!
//! Die gesamte Rechenarbeit passiert in `SplinePath::new`; danach ist die Bahn
//! unveränderlich und alle Abfragen sind reine Funktionen der Zeit.

use super::turn_groups::{partition_segments, SegmentSpan, TurnGroup, HEADING_EPSILON};
use crate::core::Pose;
use crate::profile::{BoundedProfile, UnboundedProfile};
use crate::shared::angle::{bound, normalize_angle};
use crate::shared::spline_geometry::{
    catmull_rom_derivative, catmull_rom_point, segment_control_points, ArcLengthTable,
};
use crate::shared::MotionOptions;
use anyhow::{bail, ensure, Context, Result};
use glam::DVec2;

/// Catmull-Rom-Bahn mit synchronisierten Drehungen.
#[derive(Debug, Clone)]
pub struct SplinePath {
    waypoints: Vec<Pose>,
    /// Positionen der Wegpunkte (Kontrollpunkte der Spline)
    control_points: Vec<DVec2>,
    /// Bogenlängen-Tabelle pro Segment
    arc_tables: Vec<ArcLengthTable>,
    lengths: Vec<f64>,
    props: Vec<f64>,
    /// Anteil der Gesamtdistanz vor Beginn des Segments
    partial_props: Vec<f64>,
    /// Fahrzeit pro Segment inkl. Verlängerung für die letzte Drehung
    times: Vec<f64>,
    partial_times: Vec<f64>,
    distance: f64,
    time: f64,
    translation: UnboundedProfile,
    turn_groups: Vec<TurnGroup>,
    /// Segment-Index → Index in `turn_groups`
    segment_groups: Vec<usize>,
    corrected_headings: Vec<f64>,
}

/// Zeitmarken pro Segment aus der Umkehrung des Translationsprofils.
struct SegmentTiming {
    props: Vec<f64>,
    partial_props: Vec<f64>,
    times: Vec<f64>,
    partial_times: Vec<f64>,
}

/// Ergebnis der Dreh-Synchronisation.
struct TurnPlan {
    groups: Vec<TurnGroup>,
    segment_groups: Vec<usize>,
    corrected_headings: Vec<f64>,
    /// Zusätzliche Zeit am letzten Segment
    extension: f64,
}

impl SplinePath {
    /// Baut die Bahn aus mindestens einem Wegpunkt.
    ///
    /// Leere Wegpunktliste, ungültige Grenzen oder nicht-endliche Wegpunkte sind ein Fehler.
    pub fn new(waypoints: &[Pose], options: &MotionOptions) -> Result<Self> {
        ensure!(!waypoints.is_empty(), "Bahn braucht mindestens einen Wegpunkt");
        options.validate().context("Ungültige Bewegungsgrenzen")?;
        for (index, pose) in waypoints.iter().enumerate() {
            ensure!(
                pose.is_finite(),
                "Wegpunkt {} ist nicht endlich: {}",
                index,
                pose
            );
        }

        let waypoints = waypoints.to_vec();
        let control_points: Vec<DVec2> = waypoints.iter().map(|p| p.position).collect();
        let segment_count = waypoints.len() - 1;

        let arc_tables: Vec<ArcLengthTable> = (0..segment_count)
            .map(|segment| {
                let [p0, p1, p2, p3] = segment_control_points(&control_points, segment);
                ArcLengthTable::build(
                    |t| catmull_rom_point(p0, p1, p2, p3, t),
                    options.delta_t,
                )
            })
            .collect();
        let lengths: Vec<f64> = arc_tables.iter().map(ArcLengthTable::length).collect();
        let distance: f64 = lengths.iter().sum();

        let translation =
            UnboundedProfile::new(distance, options.max_velocity, options.max_acceleration)
                .context("Translationsprofil konnte nicht erstellt werden")?;

        let timing = segment_timing(&lengths, distance, &translation);
        let headings: Vec<f64> = waypoints.iter().map(|p| p.heading).collect();
        let plan = plan_turns(&headings, &timing, options)?;

        let mut times = timing.times;
        if let Some(last) = times.last_mut() {
            *last += plan.extension;
        }
        let time = translation.duration() + plan.extension;

        log::debug!(
            "Bahn: {} Segmente, Distanz {:.3}, Fahrzeit {:.3}s, Drehgruppen {}, Verlängerung {:.3}s",
            segment_count,
            distance,
            time,
            plan.groups.len(),
            plan.extension
        );

        Ok(Self {
            waypoints,
            control_points,
            arc_tables,
            lengths,
            props: timing.props,
            partial_props: timing.partial_props,
            times,
            partial_times: timing.partial_times,
            distance,
            time,
            translation,
            turn_groups: plan.groups,
            segment_groups: plan.segment_groups,
            corrected_headings: plan.corrected_headings,
        })
    }

    // ── Kenngrößen ──────────────────────────────────────────────────

    /// Gesamtdauer inkl. Verlängerung für die letzte Drehung.
    pub fn duration(&self) -> f64 {
        self.time
    }

    /// Gesamte Bogenlänge.
    pub fn total_distance(&self) -> f64 {
        self.distance
    }

    /// Anzahl der Wegpunkte.
    pub fn waypoint_count(&self) -> usize {
        self.waypoints.len()
    }

    /// Anzahl der Segmente (`waypoint_count() - 1`).
    pub fn segment_count(&self) -> usize {
        self.lengths.len()
    }

    /// Kopie der Wegpunkte.
    pub fn waypoints(&self) -> Vec<Pose> {
        self.waypoints.clone()
    }

    /// Wegpunkt an `index`, Fehler außerhalb von `[0, N-1]`.
    pub fn waypoint(&self, index: usize) -> Result<Pose> {
        match self.waypoints.get(index) {
            Some(pose) => Ok(*pose),
            None => bail!(
                "Wegpunkt-Index {} außerhalb von [0, {}]",
                index,
                self.waypoints.len() - 1
            ),
        }
    }

    pub fn start_pose(&self) -> Pose {
        self.waypoints[0]
    }

    pub fn end_pose(&self) -> Pose {
        self.waypoints[self.waypoints.len() - 1]
    }

    pub fn segment_lengths(&self) -> Vec<f64> {
        self.lengths.clone()
    }

    /// Längenanteil jedes Segments an der Gesamtdistanz.
    pub fn segment_proportions(&self) -> Vec<f64> {
        self.props.clone()
    }

    /// Anteil der Gesamtdistanz vor Beginn jedes Segments.
    pub fn partial_proportions(&self) -> Vec<f64> {
        self.partial_props.clone()
    }

    /// Fahrzeit pro Segment; Summe entspricht `duration()`.
    pub fn segment_times(&self) -> Vec<f64> {
        self.times.clone()
    }

    /// Startzeit jedes Segments.
    pub fn segment_start_times(&self) -> Vec<f64> {
        self.partial_times.clone()
    }

    /// Tatsächlich kommandiertes Heading an jedem Wegpunkt.
    pub fn corrected_headings(&self) -> Vec<f64> {
        self.corrected_headings.clone()
    }

    /// Segmentbereiche aller Drehgruppen.
    pub fn turn_groups(&self) -> Vec<SegmentSpan> {
        self.turn_groups.iter().map(TurnGroup::span).collect()
    }

    /// Anker-Segment der Drehgruppe, zu der `segment` gehört.
    pub fn turn_group_anchor(&self, segment: usize) -> Result<usize> {
        Ok(self.group_of(segment)?.span.first)
    }

    /// Drehprofil der Gruppe, zu der `segment` gehört.
    pub fn turn_profile(&self, segment: usize) -> Result<BoundedProfile> {
        Ok(self.group_of(segment)?.profile)
    }

    /// Translationsprofil über die gesamte Bogenlänge.
    pub fn translation_profile(&self) -> UnboundedProfile {
        self.translation
    }

    // ── Geometrie ───────────────────────────────────────────────────

    /// Kurvenpunkt in Segment `segment` beim Parameter `t ∈ [0, 1]`.
    pub fn point(&self, segment: usize, t: f64) -> Result<DVec2> {
        let [p0, p1, p2, p3] = self.control_points_of(segment)?;
        Ok(catmull_rom_point(p0, p1, p2, p3, t))
    }

    /// Ableitung der Kurve in Segment `segment` beim Parameter `t ∈ [0, 1]`.
    pub fn derivative(&self, segment: usize, t: f64) -> Result<DVec2> {
        let [p0, p1, p2, p3] = self.control_points_of(segment)?;
        Ok(catmull_rom_derivative(p0, p1, p2, p3, t))
    }

    // ── Sampling ────────────────────────────────────────────────────

    /// Segment, in dem sich der Roboter zum Zeitpunkt `elapsed` befindet.
    ///
    /// `None` bei einer Bahn aus nur einem Wegpunkt.
    pub fn segment_at(&self, elapsed: f64) -> Option<usize> {
        self.locate(elapsed).map(|(segment, _)| segment)
    }

    /// Lokaler Kurvenparameter `t ∈ [0, 1]` zum Zeitpunkt `elapsed`.
    pub fn local_parameter(&self, elapsed: f64) -> Option<f64> {
        self.locate(elapsed).map(|(_, t)| t)
    }

    /// Soll-Pose zum Zeitpunkt `elapsed` (geklemmt auf `[0, duration()]`).
    ///
    /// Ab `duration()` wird exakt der letzte Wegpunkt geliefert.
    pub fn pose(&self, elapsed: f64) -> Pose {
        let Some((segment, t)) = self.locate(elapsed) else {
            return self.waypoints[0];
        };
        let elapsed = bound(elapsed, 0.0, self.time);
        // Endpose ist harte Vorgabe, unabhängig von Rundung in Zeitmarken und Bogenlänge
        if elapsed >= self.time {
            return self.end_pose();
        }
        let [p0, p1, p2, p3] = segment_control_points(&self.control_points, segment);

        Pose {
            position: catmull_rom_point(p0, p1, p2, p3, t),
            heading: self.turn_groups[self.segment_groups[segment]].heading(elapsed),
        }
    }

    /// Soll-Geschwindigkeit zum Zeitpunkt `elapsed`.
    ///
    /// `position` ist der Geschwindigkeitsvektor entlang der Kurventangente,
    /// `heading` die negierte Winkelgeschwindigkeit der aktiven Drehgruppe.
    pub fn velocity(&self, elapsed: f64) -> Pose {
        let Some((segment, t)) = self.locate(elapsed) else {
            return Pose::ZERO;
        };
        let elapsed = bound(elapsed, 0.0, self.time);
        let [p0, p1, p2, p3] = segment_control_points(&self.control_points, segment);

        let tangent = catmull_rom_derivative(p0, p1, p2, p3, t);
        let theta = tangent.y.atan2(tangent.x);
        let speed = self.translation.velocity(elapsed);
        let group = &self.turn_groups[self.segment_groups[segment]];

        Pose {
            position: DVec2::from_angle(theta) * speed,
            heading: -group.angular_velocity(elapsed),
        }
    }

    // ── intern ──────────────────────────────────────────────────────

    /// Segment und lokaler Parameter zum Zeitpunkt `elapsed`.
    fn locate(&self, elapsed: f64) -> Option<(usize, f64)> {
        if self.arc_tables.is_empty() {
            return None;
        }
        let elapsed = bound(elapsed, 0.0, self.time);
        let traveled = self.translation.position(elapsed);
        let progress = if self.distance != 0.0 {
            traveled / self.distance
        } else {
            0.0
        };

        // letztes Segment mit partial_props <= progress
        let segment = self
            .partial_props
            .partition_point(|&prop| prop <= progress)
            .saturating_sub(1)
            .min(self.arc_tables.len() - 1);

        let local_distance = traveled - self.partial_props[segment] * self.distance;
        Some((segment, self.arc_tables[segment].parameter_at(local_distance)))
    }

    fn check_segment(&self, segment: usize) -> Result<()> {
        if segment >= self.segment_count() {
            if self.segment_count() == 0 {
                bail!("Segment-Index {} ungültig: Bahn hat keine Segmente", segment);
            }
            bail!(
                "Segment-Index {} außerhalb von [0, {}]",
                segment,
                self.segment_count() - 1
            );
        }
        Ok(())
    }

    fn control_points_of(&self, segment: usize) -> Result<[DVec2; 4]> {
        self.check_segment(segment)?;
        Ok(segment_control_points(&self.control_points, segment))
    }

    fn group_of(&self, segment: usize) -> Result<&TurnGroup> {
        self.check_segment(segment)?;
        Ok(&self.turn_groups[self.segment_groups[segment]])
    }
}

/// Berechnet Längenanteile und Zeitmarken aller Segmente.
///
/// Die Segmentgrenzen in der Zeit kommen aus `translation.inverse` an den
/// kumulierten Bogenlängen, nicht aus Längenanteilen der Gesamtzeit.
fn segment_timing(lengths: &[f64], distance: f64, translation: &UnboundedProfile) -> SegmentTiming {
    let count = lengths.len();
    let mut timing = SegmentTiming {
        props: Vec::with_capacity(count),
        partial_props: Vec::with_capacity(count),
        times: Vec::with_capacity(count),
        partial_times: Vec::with_capacity(count),
    };

    let proportion = |length: f64| if distance > 0.0 { length / distance } else { 0.0 };
    let mut partial_length = 0.0;
    let mut partial_time = 0.0;
    for &length in lengths {
        timing.partial_props.push(proportion(partial_length));
        timing.props.push(proportion(length));
        partial_length += length;

        let end_time = translation.inverse(partial_length);
        timing.partial_times.push(partial_time);
        timing.times.push(end_time - partial_time);
        partial_time = end_time;
    }
    timing
}

/// Synchronisiert die Heading-Änderungen auf die Segmentzeiten.
///
/// Jede Gruppe dreht vom laufend korrigierten Heading zum Roh-Heading an ihrem
/// End-Wegpunkt. Eine gekürzte Drehung wird von der nächsten Gruppe nachgeholt.
/// Die letzte Gruppe darf nicht gekürzt werden: fehlt ihr Zeit, wird das letzte
/// Segment verlängert.
fn plan_turns(headings: &[f64], timing: &SegmentTiming, options: &MotionOptions) -> Result<TurnPlan> {
    let segment_count = timing.times.len();
    let mav = options.max_angular_velocity;
    let maa = options.max_angular_acceleration;

    let mut plan = TurnPlan {
        groups: Vec::new(),
        segment_groups: vec![0; segment_count],
        corrected_headings: vec![headings[0]; headings.len()],
        extension: 0.0,
    };

    let mut corrected = headings[0];
    for span in partition_segments(headings) {
        let target = normalize_angle(headings[span.last + 1] - corrected);
        let budget: f64 = timing.times[span.first..=span.last].iter().sum();
        let is_final = span.last + 1 == segment_count;

        let profile = if target.abs() <= HEADING_EPSILON {
            BoundedProfile::zero(mav, maa)
        } else {
            let budget = if is_final {
                let natural = UnboundedProfile::new(target.abs(), mav, maa)?.duration();
                plan.extension = (natural - budget).max(0.0);
                budget + plan.extension
            } else {
                budget
            };
            BoundedProfile::new(target, budget, mav, maa).with_context(|| {
                format!("Drehprofil für Segmente {}..={}", span.first, span.last)
            })?
        };

        if profile.is_clamped() {
            log::debug!(
                "Drehung in Segmenten {}..={} gekürzt: {:.4} von {:.4} rad in {:.3}s",
                span.first,
                span.last,
                profile.total_displacement(),
                target,
                budget
            );
        }

        let end_heading = if is_final {
            // End-Heading ist harte Vorgabe
            headings[span.last + 1]
        } else {
            corrected + profile.total_displacement()
        };

        let group_index = plan.groups.len();
        for segment in span.first..=span.last {
            plan.segment_groups[segment] = group_index;
            // geschluckte Wegpunkte drehen nicht selbst
            plan.corrected_headings[segment] = corrected;
        }
        plan.corrected_headings[span.last + 1] = end_heading;

        plan.groups.push(TurnGroup {
            span,
            start_time: timing.partial_times[span.first],
            start_heading: corrected,
            end_heading,
            profile,
        });
        corrected = end_heading;
    }

    if plan.extension > 0.0 {
        log::debug!(
            "Letztes Segment um {:.3}s verlängert, damit die Enddrehung abgeschlossen wird",
            plan.extension
        );
    }
    Ok(plan)
}
