use launch_angle_calculator::{
    DomainError, launch_angle, launch_angle_range, max_altitude_ratio, max_velocity_ratio,
};

fn allclose(actual: f64, expected: f64) -> bool {
    (actual - expected).abs() <= 1e-8 + 1e-5 * expected.abs()
}

#[test]
fn launch_angle_reference_values() {
    let phi0 = launch_angle(2.0, 0.25).expect("valid inputs");
    assert!(allclose(phi0, 0.593200), "phi0 = {phi0}");
    let phi0 = launch_angle(3.0, 0.10).expect("valid inputs");
    assert!(allclose(phi0, 0.488205), "phi0 = {phi0}");
}

#[test]
fn launch_angle_satisfies_the_sine_relation() {
    for (ve_v0, alpha) in [(2.0, 0.25), (3.0, 0.1), (1.5, 0.5), (1.8, 0.2)] {
        let phi0 = launch_angle(ve_v0, alpha).unwrap();
        let rhs = (1.0 + alpha) * (1.0 - alpha / (1.0 + alpha) * ve_v0 * ve_v0).sqrt();
        assert!(
            (phi0.sin() - rhs).abs() < 1e-5,
            "ve_v0 = {ve_v0}, alpha = {alpha}: sin(phi0) = {}, rhs = {rhs}",
            phi0.sin()
        );
        assert!((0.0..=std::f64::consts::FRAC_PI_2).contains(&phi0));
    }
}

#[test]
fn sub_escape_velocity_ratio_is_rejected() {
    assert_eq!(
        launch_angle(0.9, 0.25),
        Err(DomainError::SubEscapeVelocity(0.9))
    );
}

#[test]
fn altitude_above_maximum_reports_the_limit() {
    match launch_angle(2.0, 0.34) {
        Err(DomainError::AltitudeAboveMaximum {
            ve_v0,
            alpha,
            alpha_max,
        }) => {
            assert_eq!(ve_v0, 2.0);
            assert_eq!(alpha, 0.34);
            assert!((alpha_max - 1.0 / 3.0).abs() < 1e-12);
        }
        other => panic!("expected AltitudeAboveMaximum, got {other:?}"),
    }
}

#[test]
fn velocity_ratio_too_large_for_altitude_is_rejected() {
    assert!(matches!(
        launch_angle(2.24, 0.25),
        Err(DomainError::AltitudeAboveMaximum { .. })
    ));
}

#[test]
fn sine_argument_above_one_fails_in_the_series() {
    // d >= 0 here, but (1 + alpha) * sqrt(d) exceeds 1
    assert!(matches!(
        launch_angle(1.1, 0.1),
        Err(DomainError::ArcsinArgument(_))
    ));
}

#[test]
fn launch_angle_range_reference_values() {
    let [upper, lower] = launch_angle_range(2.0, 0.25, 0.02).unwrap();
    assert!(allclose(upper, 0.574089), "upper = {upper}");
    assert!(allclose(lower, 0.611860), "lower = {lower}");

    let [upper, lower] = launch_angle_range(3.0, 0.10, 0.05).unwrap();
    assert!(allclose(upper, 0.433970), "upper = {upper}");
    assert!(allclose(lower, 0.538257), "lower = {lower}");
}

#[test]
fn launch_angle_range_orders_upper_altitude_first() {
    let [first, second] = launch_angle_range(2.0, 0.25, 0.02).unwrap();
    assert_eq!(first, launch_angle(2.0, (1.0 + 0.02) * 0.25).unwrap());
    assert_eq!(second, launch_angle(2.0, (1.0 - 0.02) * 0.25).unwrap());
    assert!(first < second);
}

#[test]
fn launch_angle_range_propagates_bound_failures() {
    // alpha itself is valid for ve_v0 = 2 (max 1/3) but the upper bound is not
    assert!(launch_angle(2.0, 0.32).is_ok());
    assert!(matches!(
        launch_angle_range(2.0, 0.32, 0.05),
        Err(DomainError::AltitudeAboveMaximum { .. })
    ));
    assert_eq!(
        launch_angle_range(0.5, 0.25, 0.02),
        Err(DomainError::SubEscapeVelocity(0.5))
    );
}

#[test]
fn successful_angles_lie_inside_the_boundary_limits() {
    for i in 1..40 {
        let ve_v0 = 1.0 + i as f64 * 0.05;
        for j in 1..40 {
            let alpha = j as f64 * 0.025;
            if launch_angle(ve_v0, alpha).is_ok() {
                assert!(alpha <= max_altitude_ratio(ve_v0).unwrap() * (1.0 + 1e-12));
                assert!(ve_v0 <= max_velocity_ratio(alpha).unwrap() * (1.0 + 1e-12));
            }
        }
    }
}
