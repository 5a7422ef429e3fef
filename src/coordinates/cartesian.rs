//! # Cartesian Coordinate Module
//!
//! This module provides the 3D Cartesian point that every other
//! representation in the crate is converted from and back into.
//!
//! ## Coordinate System Convention
//!
//! A standard right-handed system:
//! - **X-axis**: azimuth θ = 0 in the equatorial plane
//! - **Y-axis**: azimuth θ = 90° in the equatorial plane
//! - **Z-axis**: polar angle φ = 0, the axis of the cylindrical system
//!
//! ## Internal Storage
//!
//! Components are stored as three `f64` values exactly as provided. Any real
//! triple is a valid point, including the origin and non-finite values; no
//! normalization or validation happens on construction.
//!
//! ## Examples
//!
//! ```rust
//! use coordview::coordinates::cartesian::Cartesian3;
//!
//! let point = Cartesian3::new(0.0, 1.0, 0.0);
//! let cyl = point.to_cylindrical();
//! assert_eq!(cyl.r, 1.0);
//! assert!((cyl.theta - std::f64::consts::FRAC_PI_2).abs() < 1e-15);
//! ```

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use super::cylindrical::{cartesian_to_cylindrical, Cylindrical};
use super::spherical::{cartesian_to_spherical, Spherical};

/// Three-dimensional Cartesian point
///
/// # Storage Strategy
///
/// - Each component stored as `f64`
/// - No invariants: the origin and negative components are ordinary values
/// - Compatible with nalgebra `Vector3` for the plot camera
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Cartesian3 {
    /// X-component
    pub x: f64,
    /// Y-component
    pub y: f64,
    /// Z-component
    pub z: f64,
}

impl Cartesian3 {
    /// Creates a new Cartesian point
    ///
    /// # Examples
    ///
    /// ```rust
    /// use coordview::coordinates::cartesian::Cartesian3;
    ///
    /// let point = Cartesian3::new(1.0, 2.0, 3.0);
    /// assert_eq!(point.x, 1.0);
    /// assert_eq!(point.y, 2.0);
    /// assert_eq!(point.z, 3.0);
    /// ```
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Cartesian3 { x, y, z }
    }

    /// The origin `(0, 0, 0)`
    pub fn origin() -> Self {
        Cartesian3::new(0.0, 0.0, 0.0)
    }

    /// Creates a point from an `(x, y, z)` tuple
    pub fn from_tuple((x, y, z): (f64, f64, f64)) -> Self {
        Cartesian3::new(x, y, z)
    }

    /// Returns the components as an `(x, y, z)` tuple
    pub fn to_tuple(&self) -> (f64, f64, f64) {
        (self.x, self.y, self.z)
    }

    /// Converts to cylindrical coordinates `(r, θ, z)`
    ///
    /// See [`cartesian_to_cylindrical`] for the formulas and edge cases.
    pub fn to_cylindrical(&self) -> Cylindrical {
        Cylindrical::from_tuple(cartesian_to_cylindrical(self.x, self.y, self.z))
    }

    /// Converts to spherical coordinates `(ρ, θ, φ)`
    ///
    /// The origin yields `φ = NaN`; see [`cartesian_to_spherical`].
    pub fn to_spherical(&self) -> Spherical {
        Spherical::from_tuple(cartesian_to_spherical(self.x, self.y, self.z))
    }

    /// Calculates the magnitude (distance from the origin)
    ///
    /// # Mathematical Formula
    ///
    /// `magnitude = sqrt(x² + y² + z²)`
    ///
    /// # Examples
    ///
    /// ```rust
    /// use coordview::coordinates::cartesian::Cartesian3;
    ///
    /// let point = Cartesian3::new(3.0, 4.0, 0.0);
    /// assert_eq!(point.magnitude(), 5.0);
    /// ```
    pub fn magnitude(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Largest absolute component-wise difference to another point
    ///
    /// Used to measure how far a round-tripped reconstruction drifted from
    /// its input. Any NaN component makes the result NaN.
    pub fn max_abs_diff(&self, other: &Cartesian3) -> f64 {
        let d = *self - *other;
        let (dx, dy, dz) = (d.x.abs(), d.y.abs(), d.z.abs());
        if dx.is_nan() || dy.is_nan() || dz.is_nan() {
            return f64::NAN;
        }
        dx.max(dy).max(dz)
    }

    /// True when all three components are finite
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    /// Converts to nalgebra Vector3 for linear algebra operations
    pub fn to_vector3(&self) -> Vector3<f64> {
        Vector3::new(self.x, self.y, self.z)
    }

    /// Creates from nalgebra Vector3
    pub fn from_vector3(vec: Vector3<f64>) -> Self {
        Cartesian3 {
            x: vec.x,
            y: vec.y,
            z: vec.z,
        }
    }
}

impl Default for Cartesian3 {
    fn default() -> Self {
        Cartesian3::origin()
    }
}

impl std::ops::Sub for Cartesian3 {
    type Output = Cartesian3;

    fn sub(self, other: Cartesian3) -> Cartesian3 {
        Cartesian3 {
            x: self.x - other.x,
            y: self.y - other.y,
            z: self.z - other.z,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_4;

    #[test]
    fn test_cartesian_creation() {
        let point = Cartesian3::new(1.0, 2.0, 3.0);
        assert_eq!(point.x, 1.0);
        assert_eq!(point.y, 2.0);
        assert_eq!(point.z, 3.0);
        assert_eq!(point.to_tuple(), (1.0, 2.0, 3.0));
        assert_eq!(Cartesian3::from_tuple((1.0, 2.0, 3.0)), point);
    }

    #[test]
    fn test_magnitude_calculation() {
        assert_eq!(Cartesian3::new(3.0, 4.0, 0.0).magnitude(), 5.0);
        assert_eq!(Cartesian3::new(2.0, 3.0, 6.0).magnitude(), 7.0);
        assert_eq!(Cartesian3::origin().magnitude(), 0.0);
    }

    #[test]
    fn test_to_cylindrical_and_spherical() {
        let point = Cartesian3::new(1.0, 1.0, 1.0);

        let cyl = point.to_cylindrical();
        assert!((cyl.r - 2f64.sqrt()).abs() < 1e-15);
        assert!((cyl.theta - FRAC_PI_4).abs() < 1e-15);
        assert_eq!(cyl.z, 1.0);

        let sph = point.to_spherical();
        assert!((sph.rho - 3f64.sqrt()).abs() < 1e-15);
        assert!((sph.theta - FRAC_PI_4).abs() < 1e-15);
        assert!((sph.phi - (1.0 / 3f64.sqrt()).acos()).abs() < 1e-15);
    }

    #[test]
    fn test_max_abs_diff() {
        let a = Cartesian3::new(1.0, 2.0, 3.0);
        let b = Cartesian3::new(1.5, 1.0, 3.25);
        assert_eq!(a.max_abs_diff(&b), 1.0);
        assert_eq!(a.max_abs_diff(&a), 0.0);

        let nan = Cartesian3::new(f64::NAN, 2.0, 3.0);
        assert!(a.max_abs_diff(&nan).is_nan());
    }

    #[test]
    fn test_is_finite() {
        assert!(Cartesian3::new(1.0, -2.0, 0.0).is_finite());
        assert!(!Cartesian3::new(f64::NAN, 0.0, 0.0).is_finite());
        assert!(!Cartesian3::new(0.0, f64::INFINITY, 0.0).is_finite());
    }

    #[test]
    fn test_vector3_conversions() {
        let point = Cartesian3::new(1.0, 2.0, 3.0);
        let vec = point.to_vector3();
        assert_eq!(vec.x, 1.0);
        assert_eq!(vec.y, 2.0);
        assert_eq!(vec.z, 3.0);
        assert_eq!(Cartesian3::from_vector3(vec), point);
    }

    #[test]
    fn test_subtraction() {
        let diff = Cartesian3::new(4.0, 5.0, 6.0) - Cartesian3::new(1.0, 2.0, 3.0);
        assert_eq!(diff, Cartesian3::new(3.0, 3.0, 3.0));
    }

    #[test]
    fn test_precision_preservation() {
        let precise = Cartesian3::new(0.123456789012345, 0.987654321098765, 0.555666777888999);
        assert_eq!(precise.x, 0.123456789012345);
        assert_eq!(precise.y, 0.987654321098765);
        assert_eq!(precise.z, 0.555666777888999);
    }
}
