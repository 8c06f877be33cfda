//! Integrationstests für SplinePath:
//! - Endpose wird exakt erreicht
//! - Geschwindigkeits- und Beschleunigungsgrenzen beim Abtasten
//! - Stetigkeit der Soll-Pose über Segment- und Gruppengrenzen

use approx::assert_abs_diff_eq;
use std::f64::consts::{FRAC_PI_2, PI};
use synchro_path::{MotionOptions, Movement, MovementKind, Pose, SplinePath};

/// Anzahl der Abtastschritte über die gesamte Dauer.
const SAMPLES: usize = 2000;

fn l_shape() -> Vec<Pose> {
    vec![
        Pose::new(0.0, 0.0, 0.0),
        Pose::new(10.0, 0.0, 0.0),
        Pose::new(10.0, 10.0, FRAC_PI_2),
    ]
}

fn slalom() -> Vec<Pose> {
    vec![
        Pose::new(0.0, 0.0, 0.0),
        Pose::new(3.0, 1.0, 0.6),
        Pose::new(6.0, -1.0, -0.6),
        Pose::new(9.0, 1.0, 0.6),
        Pose::new(12.0, 0.0, PI),
    ]
}

fn sample_times(duration: f64) -> impl Iterator<Item = f64> {
    (0..=SAMPLES).map(move |i| duration * i as f64 / SAMPLES as f64)
}

#[test]
fn test_l_shape_reaches_exact_end_pose() {
    let options = MotionOptions::new(10.0, 10.0, PI, PI);
    let path = SplinePath::new(&l_shape(), &options).expect("Bahn muss bauen");

    assert_eq!(path.pose(path.duration()), Pose::new(10.0, 10.0, FRAC_PI_2));
    assert_eq!(path.pose(path.duration() + 1.0), path.pose(path.duration()));
    assert_eq!(path.pose(-1.0), path.pose(0.0));
    assert_eq!(path.pose(0.0), Pose::new(0.0, 0.0, 0.0));
}

#[test]
fn test_sampled_velocity_respects_limits() {
    let options = MotionOptions::new(1.5, 1.0, 2.0, 1.5);
    let path = SplinePath::new(&slalom(), &options).expect("Bahn muss bauen");
    let dt = path.duration() / SAMPLES as f64;

    let mut last_speed = 0.0;
    let mut last_omega = 0.0;
    for t in sample_times(path.duration()) {
        let velocity = path.velocity(t);
        let speed = velocity.position.length();
        let omega = velocity.heading;

        assert!(speed <= options.max_velocity + 1e-9, "v={} bei t={}", speed, t);
        assert!(
            omega.abs() <= options.max_angular_velocity + 1e-9,
            "ω={} bei t={}",
            omega,
            t
        );
        assert!(
            (speed - last_speed).abs() <= options.max_acceleration * dt + 1e-9,
            "Bahnbeschleunigung überschritten bei t={}",
            t
        );
        last_speed = speed;
        last_omega = omega;
    }
    assert_abs_diff_eq!(last_speed, 0.0, epsilon = 1e-9);
    assert_abs_diff_eq!(last_omega, 0.0, epsilon = 1e-9);
}

#[test]
fn test_pose_is_continuous() {
    let options = MotionOptions::default();
    let path = SplinePath::new(&slalom(), &options).expect("Bahn muss bauen");
    let dt = path.duration() / SAMPLES as f64;

    let mut last = path.pose(0.0);
    for t in sample_times(path.duration()).skip(1) {
        let pose = path.pose(t);
        // Weg pro Schritt höchstens v_max·dt plus Toleranz der Bogenlängen-Tabelle
        assert!(
            pose.distance(&last) <= options.max_velocity * dt + 1e-3,
            "Positionssprung bei t={}",
            t
        );
        assert!(
            (pose.heading - last.heading).abs() <= options.max_angular_velocity * dt + 1e-6,
            "Heading-Sprung bei t={}: {} → {}",
            t,
            last.heading,
            pose.heading
        );
        last = pose;
    }
    assert_eq!(last, *slalom().last().unwrap());
}

#[test]
fn test_corrected_headings_end_with_final_heading() {
    let path = SplinePath::new(&slalom(), &MotionOptions::default()).expect("Bahn muss bauen");

    let corrected = path.corrected_headings();
    assert_eq!(corrected.len(), path.waypoint_count());
    assert_eq!(corrected[0], 0.0);
    assert_eq!(*corrected.last().unwrap(), PI);

    let groups = path.turn_groups();
    assert_eq!(groups.first().map(|g| g.first), Some(0));
    assert_eq!(groups.last().map(|g| g.last), Some(path.segment_count() - 1));
}

#[test]
fn test_spline_path_as_movement() {
    let path = SplinePath::new(&l_shape(), &MotionOptions::default()).expect("Bahn muss bauen");
    let movement: &dyn Movement = &path;

    assert_eq!(movement.kind(), MovementKind::Drive);
    assert_eq!(movement.duration(), path.duration());
    assert_eq!(movement.start_pose(), l_shape()[0]);
    assert_eq!(movement.end_pose(), l_shape()[2]);
    assert_eq!(movement.pose(1.0), path.pose(1.0));
}
