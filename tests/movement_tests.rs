//! Integrationstests für Bewegungen: Fahrt, Pause und Drehung hintereinander.

use approx::assert_abs_diff_eq;
use std::f64::consts::{FRAC_PI_2, PI};
use synchro_path::{
    Delay, LinearRotation, MotionOptions, Movement, MovementKind, Pose, RotationState,
    SplinePath, TimeSpan,
};

#[test]
fn test_drive_then_delay_sequence_is_seamless() {
    let options = MotionOptions::default();
    let drive = SplinePath::new(
        &[Pose::new(0.0, 0.0, 0.0), Pose::new(3.0, 0.0, FRAC_PI_2)],
        &options,
    )
    .expect("Bahn muss bauen");
    let delay = Delay::new(drive.end_pose(), 2.0).expect("gültige Pause");

    let sequence: Vec<&dyn Movement> = vec![&drive, &delay];
    let total: f64 = sequence.iter().map(|m| m.duration()).sum();
    assert_abs_diff_eq!(total, drive.duration() + 2.0, epsilon = 1e-12);

    for pair in sequence.windows(2) {
        assert_eq!(pair[0].pose(pair[0].duration()), pair[1].pose(0.0));
    }
    assert_eq!(delay.velocity(1.0), Pose::ZERO);
    assert_eq!(delay.kind(), MovementKind::Delay);
    assert_eq!(delay.display_name(), "Delay");
}

#[test]
fn test_linear_rotation_in_time_span() {
    let options = MotionOptions::new(1.0, 1.0, PI, PI);
    let span = TimeSpan::new(1.0, 5.0).expect("gültiges Zeitfenster");
    let rotation = LinearRotation::new(
        RotationState::new(0.0),
        RotationState::new(-FRAC_PI_2),
        span,
        &options,
    )
    .expect("gültige Drehung");

    assert_eq!(rotation.start_time(), 1.0);
    assert_eq!(rotation.end_time(), 5.0);
    assert_eq!(rotation.duration(), 4.0);
    assert!(rotation.min_duration() < 4.0);
    assert_eq!(rotation.start_state(), RotationState::new(0.0));
    assert_eq!(rotation.end_state(), RotationState::new(-FRAC_PI_2));

    assert_abs_diff_eq!(rotation.state(3.0).heading(), -PI / 4.0, epsilon = 1e-9);
    assert_abs_diff_eq!(rotation.state(5.0).heading(), -FRAC_PI_2, epsilon = 1e-12);
    assert!(rotation.velocity(3.0).heading() < 0.0);
    assert!(rotation.velocity(3.0).abs() <= PI);
    assert_eq!(rotation.display_name(), "LinearRotation");
}
