//! # Cylindrical Coordinate Module
//!
//! Cylindrical coordinates `(r, θ, z)` describe a point by its distance from
//! the z-axis, its azimuth in the xy-plane and its height.
//!
//! The forward transform always produces `r ≥ 0` and `θ ∈ (−π, π]` (the
//! principal value of `atan2`). The inverse accepts any triple: a negative
//! `r` reflects the point through the z-axis and is not rejected.

use serde::{Deserialize, Serialize};

use super::cartesian::Cartesian3;
use crate::constants::RAD2DEG;

/// Converts Cartesian `(x, y, z)` to cylindrical `(r, θ, z)`
///
/// - `r = sqrt(x² + y²)`
/// - `θ = atan2(y, x)`
/// - `z` unchanged
///
/// On the z-axis (`x = y = 0`) this gives `r = 0` and `θ = 0`, since
/// `f64::atan2(0.0, 0.0)` is `0.0`.
///
/// ```rust
/// use coordview::coordinates::cylindrical::cartesian_to_cylindrical;
///
/// let (r, theta, z) = cartesian_to_cylindrical(0.0, 0.0, 5.0);
/// assert_eq!((r, theta, z), (0.0, 0.0, 5.0));
/// ```
pub fn cartesian_to_cylindrical(x: f64, y: f64, z: f64) -> (f64, f64, f64) {
    let r = (x * x + y * y).sqrt();
    let theta = y.atan2(x);
    (r, theta, z)
}

/// Converts cylindrical `(r, θ, z)` to Cartesian `(x, y, z)`
///
/// - `x = r·cos θ`
/// - `y = r·sin θ`
/// - `z` unchanged
pub fn cylindrical_to_cartesian(r: f64, theta: f64, z: f64) -> (f64, f64, f64) {
    (r * theta.cos(), r * theta.sin(), z)
}

/// A point in cylindrical coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Cylindrical {
    /// Distance from the z-axis
    pub r: f64,
    /// Azimuth in radians
    pub theta: f64,
    /// Height along the z-axis
    pub z: f64,
}

impl Cylindrical {
    pub fn new(r: f64, theta: f64, z: f64) -> Self {
        Cylindrical { r, theta, z }
    }

    pub fn from_tuple((r, theta, z): (f64, f64, f64)) -> Self {
        Cylindrical::new(r, theta, z)
    }

    pub fn from_cartesian(point: &Cartesian3) -> Self {
        point.to_cylindrical()
    }

    pub fn to_cartesian(&self) -> Cartesian3 {
        Cartesian3::from_tuple(cylindrical_to_cartesian(self.r, self.theta, self.z))
    }

    /// Azimuth in degrees
    pub fn theta_degrees(&self) -> f64 {
        self.theta * RAD2DEG
    }
}
