use launch_angle_calculator::config::load_sweeps;
use launch_angle_calculator::sweep::{
    Sweep, SweepAxis, SweepError, SweepPoint, SweepRequest, generate, sweep_bounds,
};
use launch_angle_calculator::{DomainError, launch_angle_range};

fn request(axis: SweepAxis) -> SweepRequest {
    SweepRequest {
        name: "test".to_string(),
        axis,
        tol_alpha: 0.04,
        samples: 20,
    }
}

#[test]
fn altitude_sweep_bounds_follow_tolerance_band() {
    let (start, end) = sweep_bounds(&SweepAxis::Altitude { ve_v0: 2.0 }, 0.04).unwrap();
    assert_eq!(start, 0.0);
    assert!((end - (1.0 / 3.0) / 1.04).abs() < 1e-15, "end = {end}");

    let (start, end) = sweep_bounds(&SweepAxis::Altitude { ve_v0: 1.2 }, 0.04).unwrap();
    let expected_start = (-(1.2_f64 * 1.2 - 2.0) / (1.2 * 1.2 - 1.0)) / 0.96;
    assert!((start - expected_start).abs() < 1e-12);
    assert!(start < end);
}

#[test]
fn velocity_sweep_bounds_follow_tolerance_band() {
    let (start, end) = sweep_bounds(&SweepAxis::Velocity { alpha: 0.25 }, 0.04).unwrap();
    assert!((start - 1.3440430100644942).abs() < 1e-12, "start = {start}");
    assert!((end - 2.2013981571160284).abs() < 1e-12, "end = {end}");
}

#[test]
fn altitude_sweep_produces_ordered_angle_bands() {
    let sweep = generate(&request(SweepAxis::Altitude { ve_v0: 2.0 })).unwrap();
    assert_eq!(sweep.points.len(), 20);
    assert_eq!(sweep.points.first().unwrap().swept_value, sweep.start);
    assert_eq!(sweep.points.last().unwrap().swept_value, sweep.end);
    assert_eq!(sweep.feasible_count(), 20);

    for point in &sweep.points {
        assert!(point.feasible(), "alpha = {}", point.swept_value);
        // the band collapses at alpha = 0
        assert!(point.phi0_min <= point.phi0_max);
        let [upper, lower] = launch_angle_range(2.0, point.swept_value, 0.04).unwrap();
        assert_eq!(point.phi0_min, upper);
        assert_eq!(point.phi0_max, lower);
    }
    // higher targets need steeper (more vertical) launches
    for pair in sweep.points.windows(2) {
        assert!(pair[1].phi0_min < pair[0].phi0_min);
    }
}

#[test]
fn velocity_sweep_evaluates_every_sample() {
    let sweep = generate(&request(SweepAxis::Velocity { alpha: 0.25 })).unwrap();
    assert_eq!(sweep.points.len(), 20);
    assert_eq!(sweep.axis.swept_name(), "ve_v0");
    assert_eq!(sweep.axis.fixed_value(), 0.25);
    assert_eq!(sweep.feasible_count(), 20);
    for point in &sweep.points[1..19] {
        assert!(point.feasible(), "ve_v0 = {}", point.swept_value);
        assert!(point.phi0_min > 0.0 && point.phi0_max < std::f64::consts::FRAC_PI_2);
    }
    let (lo, hi) = sweep.angle_extrema().unwrap();
    assert!(lo < hi);
}

#[test]
fn invalid_requests_are_rejected() {
    let mut req = request(SweepAxis::Altitude { ve_v0: 2.0 });
    req.samples = 1;
    assert!(matches!(generate(&req), Err(SweepError::TooFewSamples(1))));

    for tol in [1.0, -0.1, f64::NAN] {
        assert!(matches!(
            sweep_bounds(&SweepAxis::Altitude { ve_v0: 2.0 }, tol),
            Err(SweepError::InvalidTolerance(_))
        ));
    }

    assert!(matches!(
        sweep_bounds(&SweepAxis::Altitude { ve_v0: 0.9 }, 0.04),
        Err(SweepError::Domain(DomainError::VelocityRatioNotAboveOne(_)))
    ));
    assert!(matches!(
        sweep_bounds(&SweepAxis::Velocity { alpha: 0.0 }, 0.04),
        Err(SweepError::Domain(DomainError::AltitudeRatioNotPositive(_)))
    ));
    // barely above escape: the tolerance band leaves no valid altitude
    assert!(matches!(
        sweep_bounds(&SweepAxis::Altitude { ve_v0: 1.01 }, 0.04),
        Err(SweepError::EmptyRange { .. })
    ));
}

#[test]
fn infeasible_points_are_excluded_from_extrema() {
    let sweep = Sweep {
        name: "mixed".to_string(),
        axis: SweepAxis::Altitude { ve_v0: 2.0 },
        tol_alpha: 0.04,
        start: 0.1,
        end: 0.4,
        points: vec![
            SweepPoint {
                swept_value: 0.1,
                phi0_min: 0.9,
                phi0_max: 1.0,
                error: None,
            },
            SweepPoint {
                swept_value: 0.2,
                phi0_min: 0.7,
                phi0_max: 0.8,
                error: None,
            },
            SweepPoint {
                swept_value: 0.4,
                phi0_min: f64::NAN,
                phi0_max: f64::NAN,
                error: Some(DomainError::AltitudeAboveMaximum {
                    ve_v0: 2.0,
                    alpha: 0.416,
                    alpha_max: 1.0 / 3.0,
                }),
            },
        ],
    };
    assert_eq!(sweep.feasible_count(), 2);
    assert!(!sweep.points[2].feasible());
    assert_eq!(sweep.angle_extrema(), Some((0.7, 1.0)));
}

#[test]
fn shipped_configs_reproduce_reference_figures() {
    let configs = load_sweeps("configs/sweeps").expect("sweep configs");
    assert_eq!(configs.len(), 2);
    for config in &configs {
        let req = SweepRequest::from_config(config);
        assert_eq!(req.samples, 20);
        assert_eq!(req.tol_alpha, 0.04);
        let sweep = generate(&req).expect("sweep");
        assert_eq!(sweep.feasible_count(), 20, "{}", sweep.name);
    }
    let altitude = configs.iter().find(|c| c.name == "ve_v0_2").unwrap();
    assert_eq!(
        SweepRequest::from_config(altitude).axis,
        SweepAxis::Altitude { ve_v0: 2.0 }
    );
}
