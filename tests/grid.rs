use launch_angle_calculator::grid::linspace;
use launch_angle_calculator::units::{deg_to_rad, rad_to_deg};

#[test]
fn linspace_includes_both_endpoints() {
    let samples = linspace(0.0, 1.0, 5);
    assert_eq!(samples, vec![0.0, 0.25, 0.5, 0.75, 1.0]);

    let samples = linspace(1.344, 2.201, 20);
    assert_eq!(samples.len(), 20);
    assert_eq!(samples[0], 1.344);
    assert_eq!(samples[19], 2.201);
    assert!(samples.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn linspace_degenerate_counts() {
    assert!(linspace(0.0, 1.0, 0).is_empty());
    assert_eq!(linspace(0.3, 1.0, 1), vec![0.3]);
}

#[test]
fn angle_conversions_round_trip() {
    assert!((rad_to_deg(std::f64::consts::FRAC_PI_2) - 90.0).abs() < 1e-12);
    assert!((deg_to_rad(180.0) - std::f64::consts::PI).abs() < 1e-15);
}
