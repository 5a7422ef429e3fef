pub mod cartesian;
pub mod cylindrical;
pub mod spherical;

pub use cartesian::Cartesian3;
pub use cylindrical::{cartesian_to_cylindrical, cylindrical_to_cartesian, Cylindrical};
pub use spherical::{cartesian_to_spherical, spherical_to_cartesian, Spherical};

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    /// Deterministic sample of points away from the origin, covering all octants
    fn sample_points() -> Vec<Cartesian3> {
        let values = [-7.5, -1.0, -0.1, 0.0, 0.3, 1.0, 2.0, 123.456];
        let mut points = Vec::new();
        for &x in &values {
            for &y in &values {
                for &z in &values {
                    if x == 0.0 && y == 0.0 && z == 0.0 {
                        continue;
                    }
                    points.push(Cartesian3::new(x, y, z));
                }
            }
        }
        points
    }

    #[test]
    fn test_cylindrical_round_trip() {
        for point in sample_points() {
            let (r, theta, z) = cartesian_to_cylindrical(point.x, point.y, point.z);
            let back = Cartesian3::from_tuple(cylindrical_to_cartesian(r, theta, z));
            assert!(
                point.max_abs_diff(&back) < 1e-9,
                "cylindrical round trip drifted for {:?}: {:?}",
                point,
                back
            );
        }
    }

    #[test]
    fn test_spherical_round_trip() {
        for point in sample_points() {
            let (rho, theta, phi) = cartesian_to_spherical(point.x, point.y, point.z);
            let back = Cartesian3::from_tuple(spherical_to_cartesian(rho, theta, phi));
            assert!(
                point.max_abs_diff(&back) < 1e-9,
                "spherical round trip drifted for {:?}: {:?}",
                point,
                back
            );
        }
    }

    #[test]
    fn test_forward_ranges() {
        for point in sample_points() {
            let cyl = point.to_cylindrical();
            let sph = point.to_spherical();

            assert!(cyl.r >= 0.0);
            assert!(sph.rho >= 0.0);
            assert!(cyl.theta > -PI && cyl.theta <= PI, "theta {} for {:?}", cyl.theta, point);
            assert!(sph.theta > -PI && sph.theta <= PI, "theta {} for {:?}", sph.theta, point);
            assert!((0.0..=PI).contains(&sph.phi), "phi {} for {:?}", sph.phi, point);
        }
    }
    #[test]
    fn test_negative_zero_y_gives_minus_pi() {
        // atan2(-0.0, x < 0) lands on -π, just outside (-π, π]
        let (r, theta, _) = cartesian_to_cylindrical(-1.0, -0.0, 0.0);
        assert_eq!(r, 1.0);
        assert_eq!(theta, -PI);
        assert_eq!(cartesian_to_spherical(-1.0, -0.0, 0.0).1, -PI);
        assert_eq!(cartesian_to_cylindrical(-1.0, 0.0, 0.0).1, PI);

        let (x, y, _) = cylindrical_to_cartesian(r, theta, 0.0);
        assert_eq!(x, -1.0);
        assert!(y.abs() < 1e-15);
    }
}
