//! End-to-end checks of the public API: known points, the origin, and the
//! round-trip guarantee over a sweep of inputs.

use approx::assert_abs_diff_eq;
use rstest::rstest;
use std::f64::consts::PI;

use coordview::coordinates::{
    cartesian_to_cylindrical, cartesian_to_spherical, cylindrical_to_cartesian,
    spherical_to_cartesian,
};
use coordview::{compute, Cartesian3, PointInput};

#[rstest]
#[case((1.0, 1.0, 1.0), 1.41421356, 45.0, 1.73205081, 45.0, 54.7356)]
#[case((0.0, 1.0, 0.0), 1.0, 90.0, 1.0, 90.0, 90.0)]
#[case((1.0, 0.0, 0.0), 1.0, 0.0, 1.0, 0.0, 90.0)]
fn known_points(
    #[case] point: (f64, f64, f64),
    #[case] r: f64,
    #[case] cyl_theta_deg: f64,
    #[case] rho: f64,
    #[case] sph_theta_deg: f64,
    #[case] phi_deg: f64,
) {
    let report = compute(Cartesian3::from_tuple(point));

    assert_abs_diff_eq!(report.cylindrical.r, r, epsilon = 1e-8);
    assert_abs_diff_eq!(report.cylindrical.theta_degrees(), cyl_theta_deg, epsilon = 1e-9);
    assert_eq!(report.cylindrical.z, point.2);

    assert_abs_diff_eq!(report.spherical.rho, rho, epsilon = 1e-8);
    assert_abs_diff_eq!(report.spherical.theta_degrees(), sph_theta_deg, epsilon = 1e-9);
    assert_abs_diff_eq!(report.spherical.phi_degrees(), phi_deg, epsilon = 1e-4);

    assert!(report.round_trip_ok());
}

#[test]
fn origin_cylindrical_is_defined_spherical_is_nan() {
    assert_eq!(cartesian_to_cylindrical(0.0, 0.0, 0.0), (0.0, 0.0, 0.0));

    let (rho, theta, phi) = cartesian_to_spherical(0.0, 0.0, 0.0);
    assert_eq!(rho, 0.0);
    assert_eq!(theta, 0.0);
    assert!(phi.is_nan());

    let report = compute(Cartesian3::origin());
    assert!(!report.spherical.is_defined());
    assert!(report.spherical_line().contains("NaN"));
}

#[test]
fn round_trips_reconstruct_input_over_sweep() {
    let mut checked = 0;
    for i in -6..=6 {
        for j in -6..=6 {
            for k in -6..=6 {
                let (x, y, z) = (i as f64 * 0.7, j as f64 * 1.3, k as f64 * 2.1);
                if x == 0.0 && y == 0.0 && z == 0.0 {
                    continue;
                }

                let (r, t, zc) = cartesian_to_cylindrical(x, y, z);
                let (xc, yc, zc) = cylindrical_to_cartesian(r, t, zc);
                assert!((xc - x).abs() < 1e-9 && (yc - y).abs() < 1e-9 && (zc - z).abs() < 1e-9);

                let (rho, theta, phi) = cartesian_to_spherical(x, y, z);
                let (xs, ys, zs) = spherical_to_cartesian(rho, theta, phi);
                assert!((xs - x).abs() < 1e-9 && (ys - y).abs() < 1e-9 && (zs - z).abs() < 1e-9);

                assert!(r >= 0.0 && rho >= 0.0);
                assert!(t > -PI && t <= PI);
                assert!(theta > -PI && theta <= PI);
                assert!((0.0..=PI).contains(&phi));
                checked += 1;
            }
        }
    }
    assert_eq!(checked, 13 * 13 * 13 - 1);
}

#[test]
fn session_commands_drive_recomputation() {
    let mut input = PointInput::default();
    assert_eq!(
        compute(input.point()).cylindrical_line(),
        "r = 1.414, θ = 45.00°, z = 1.000"
    );

    input.apply("0 1 0").unwrap();
    assert_eq!(
        compute(input.point()).spherical_line(),
        "ρ = 1.000, θ = 90.00°, φ = 90.00°"
    );

    input.apply("0 0 0").unwrap();
    assert!(!compute(input.point()).round_trip_ok());

    input.apply("reset").unwrap();
    assert!(compute(input.point()).round_trip_ok());
}

#[test]
fn text_and_svg_panels_render_for_default_input() {
    let scene = compute(PointInput::default().point()).scene();
    let text = scene.render_text(64, 24).unwrap();
    assert!(text.contains("Cartesian (input)"));

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("panel.svg");
    scene.save_svg(&path).unwrap();
    assert!(std::fs::metadata(&path).unwrap().len() > 0);
}
