//! Round-trip computation for a single input point
//!
//! [`compute`] is the only entry point the presentation layer needs: it runs
//! both forward conversions once, feeds each result through its inverse, and
//! packs everything into a [`TransformReport`]. It holds no state, so the
//! command line tool calls it again from scratch after every input change.

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::constants::{
    CYLINDRICAL_COLOR, CYLINDRICAL_LABEL, INPUT_COLOR, INPUT_LABEL, MARKER_ALPHA,
    ROUND_TRIP_TOLERANCE, SPHERICAL_COLOR, SPHERICAL_LABEL,
};
use crate::coordinates::{Cartesian3, Cylindrical, Spherical};
use crate::plot::{Scatter3d, Series};

/// Everything derived from one input point
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TransformReport {
    /// The point as entered
    pub input: Cartesian3,
    /// Forward cylindrical conversion of `input`
    pub cylindrical: Cylindrical,
    /// Forward spherical conversion of `input`
    pub spherical: Spherical,
    /// `cylindrical` converted back to Cartesian
    pub cylindrical_round_trip: Cartesian3,
    /// `spherical` converted back to Cartesian
    pub spherical_round_trip: Cartesian3,
}

/// Converts `input` to both representations and back again
pub fn compute(input: Cartesian3) -> TransformReport {
    let cylindrical = input.to_cylindrical();
    let spherical = input.to_spherical();

    let report = TransformReport {
        input,
        cylindrical,
        spherical,
        cylindrical_round_trip: cylindrical.to_cartesian(),
        spherical_round_trip: spherical.to_cartesian(),
    };

    debug!(
        "compute({}, {}, {}): cylindrical={:?} spherical={:?}",
        input.x, input.y, input.z, cylindrical, spherical
    );
    if !spherical.is_defined() {
        warn!(
            "spherical polar angle is undefined for ({}, {}, {}): z / rho = {} / {}",
            input.x, input.y, input.z, input.z, spherical.rho
        );
    }

    report
}

impl TransformReport {
    /// `r = …, θ = …°, z = …` with angles in degrees
    pub fn cylindrical_line(&self) -> String {
        format!(
            "r = {:.3}, θ = {:.2}°, z = {:.3}",
            self.cylindrical.r,
            self.cylindrical.theta_degrees(),
            self.input.z
        )
    }

    /// `ρ = …, θ = …°, φ = …°` with angles in degrees
    pub fn spherical_line(&self) -> String {
        format!(
            "ρ = {:.3}, θ = {:.2}°, φ = {:.2}°",
            self.spherical.rho,
            self.spherical.theta_degrees(),
            self.spherical.phi_degrees()
        )
    }

    /// Drift of the cylindrical reconstruction from the input
    pub fn cylindrical_error(&self) -> f64 {
        self.input.max_abs_diff(&self.cylindrical_round_trip)
    }

    /// Drift of the spherical reconstruction from the input (NaN at the origin)
    pub fn spherical_error(&self) -> f64 {
        self.input.max_abs_diff(&self.spherical_round_trip)
    }

    /// Larger of the two reconstruction errors, NaN if either is NaN
    pub fn max_round_trip_error(&self) -> f64 {
        let (cyl, sph) = (self.cylindrical_error(), self.spherical_error());
        if cyl.is_nan() || sph.is_nan() {
            return f64::NAN;
        }
        cyl.max(sph)
    }

    /// True when both reconstructions are within [`ROUND_TRIP_TOLERANCE`]
    pub fn round_trip_ok(&self) -> bool {
        // NaN compares false, so the origin is reported as not ok
        self.max_round_trip_error() <= ROUND_TRIP_TOLERANCE
    }

    /// Scatter scene with the input and both reconstructions
    ///
    /// Series are added in draw order: input, cylindrical, spherical.
    pub fn scene(&self) -> Scatter3d {
        Scatter3d::new()
            .with_series(Series::new(INPUT_LABEL, INPUT_COLOR, self.input).with_alpha(MARKER_ALPHA))
            .with_series(
                Series::new(CYLINDRICAL_LABEL, CYLINDRICAL_COLOR, self.cylindrical_round_trip)
                    .with_alpha(MARKER_ALPHA),
            )
            .with_series(
                Series::new(SPHERICAL_LABEL, SPHERICAL_COLOR, self.spherical_round_trip)
                    .with_alpha(MARKER_ALPHA),
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use rstest::rstest;

    #[test]
    fn test_unit_diagonal_scenario() {
        let report = compute(Cartesian3::new(1.0, 1.0, 1.0));

        assert_abs_diff_eq!(report.cylindrical.r, 1.41421356, epsilon = 1e-8);
        assert_abs_diff_eq!(report.cylindrical.theta_degrees(), 45.0, epsilon = 1e-9);
        assert_eq!(report.cylindrical.z, 1.0);

        assert_abs_diff_eq!(report.spherical.rho, 1.73205081, epsilon = 1e-8);
        assert_abs_diff_eq!(report.spherical.theta_degrees(), 45.0, epsilon = 1e-9);
        assert_abs_diff_eq!(report.spherical.phi_degrees(), 54.7356, epsilon = 1e-4);

        assert!(report.round_trip_ok());
    }

    #[rstest]
    #[case((1.0, 1.0, 1.0), "r = 1.414, θ = 45.00°, z = 1.000", "ρ = 1.732, θ = 45.00°, φ = 54.74°")]
    #[case((0.0, 1.0, 0.0), "r = 1.000, θ = 90.00°, z = 0.000", "ρ = 1.000, θ = 90.00°, φ = 90.00°")]
    #[case((1.0, 0.0, 0.0), "r = 1.000, θ = 0.00°, z = 0.000", "ρ = 1.000, θ = 0.00°, φ = 90.00°")]
    #[case((0.0, 0.0, -2.0), "r = 0.000, θ = 0.00°, z = -2.000", "ρ = 2.000, θ = 0.00°, φ = 180.00°")]
    fn test_formatted_lines(
        #[case] point: (f64, f64, f64),
        #[case] cylindrical: &str,
        #[case] spherical: &str,
    ) {
        let report = compute(Cartesian3::from_tuple(point));
        assert_eq!(report.cylindrical_line(), cylindrical);
        assert_eq!(report.spherical_line(), spherical);
    }

    #[test]
    fn test_origin_scenario() {
        let report = compute(Cartesian3::origin());

        assert_eq!(report.cylindrical, Cylindrical::new(0.0, 0.0, 0.0));
        assert_eq!(report.cylindrical_round_trip, Cartesian3::origin());
        assert_eq!(report.cylindrical_error(), 0.0);

        assert_eq!(report.spherical.rho, 0.0);
        assert!(report.spherical.phi.is_nan());
        assert!(!report.spherical_round_trip.is_finite());
        assert!(report.spherical_error().is_nan());
        assert!(report.max_round_trip_error().is_nan());
        assert!(!report.round_trip_ok());

        assert_eq!(report.cylindrical_line(), "r = 0.000, θ = 0.00°, z = 0.000");
        assert_eq!(report.spherical_line(), "ρ = 0.000, θ = 0.00°, φ = NaN°");
    }

    #[test]
    fn test_reconstructions_match_input() {
        let input = Cartesian3::new(-3.7, 12.25, -0.4);
        let report = compute(input);
        assert!(report.cylindrical_error() < 1e-9);
        assert!(report.spherical_error() < 1e-9);
        assert!(report.round_trip_ok());
    }

    #[test]
    fn test_scene_series_order_and_colors() {
        let report = compute(Cartesian3::new(1.0, 2.0, 3.0));
        let scene = report.scene();
        let series = scene.series();

        assert_eq!(series.len(), 3);
        assert_eq!(series[0].label, INPUT_LABEL);
        assert_eq!(series[0].color, "blue");
        assert_eq!(series[0].point, report.input);
        assert_eq!(series[1].color, "green");
        assert_eq!(series[1].point, report.cylindrical_round_trip);
        assert_eq!(series[2].color, "red");
        assert_eq!(series[2].point, report.spherical_round_trip);
        assert!(series.iter().all(|s| s.alpha == MARKER_ALPHA));
    }

    #[test]
    fn test_report_serializes_to_json() {
        let report = compute(Cartesian3::new(1.0, 0.0, 0.0));
        let json = serde_json::to_value(report).unwrap();
        assert_eq!(json["input"]["x"], 1.0);
        assert_eq!(json["cylindrical"]["r"], 1.0);
        assert_eq!(json["spherical"]["rho"], 1.0);
    }
}
