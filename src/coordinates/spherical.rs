//! # Spherical Coordinate Module
//!
//! Spherical coordinates `(ρ, θ, φ)` describe a point by its distance from
//! the origin, its azimuth in the xy-plane and its polar angle measured from
//! the positive z-axis.
//!
//! ## Ranges
//!
//! The forward transform produces `ρ ≥ 0`, `θ ∈ (−π, π]` and `φ ∈ [0, π]`.
//! The inverse accepts any triple without validation.
//!
//! ## The Origin
//!
//! At the origin `ρ = 0`, so `z / ρ` is `0 / 0 = NaN` and `acos` returns
//! NaN. The polar angle is left as NaN rather than clamped or defaulted;
//! callers can detect it with [`Spherical::is_defined`].

use serde::{Deserialize, Serialize};

use super::cartesian::Cartesian3;
use crate::constants::RAD2DEG;

/// Converts Cartesian `(x, y, z)` to spherical `(ρ, θ, φ)`
///
/// - `ρ = sqrt(x² + y² + z²)`
/// - `θ = atan2(y, x)`
/// - `φ = acos(z / ρ)`
///
/// ```rust
/// use coordview::coordinates::spherical::cartesian_to_spherical;
///
/// let (rho, theta, phi) = cartesian_to_spherical(0.0, 0.0, 2.0);
/// assert_eq!((rho, theta, phi), (2.0, 0.0, 0.0));
///
/// let (rho, _, phi) = cartesian_to_spherical(0.0, 0.0, 0.0);
/// assert_eq!(rho, 0.0);
/// assert!(phi.is_nan());
/// ```
pub fn cartesian_to_spherical(x: f64, y: f64, z: f64) -> (f64, f64, f64) {
    let rho = (x * x + y * y + z * z).sqrt();
    let theta = y.atan2(x);
    let phi = (z / rho).acos();
    (rho, theta, phi)
}

/// Converts spherical `(ρ, θ, φ)` to Cartesian `(x, y, z)`
///
/// - `x = ρ·sin φ·cos θ`
/// - `y = ρ·sin φ·sin θ`
/// - `z = ρ·cos φ`
pub fn spherical_to_cartesian(rho: f64, theta: f64, phi: f64) -> (f64, f64, f64) {
    let sin_phi = phi.sin();
    (
        rho * sin_phi * theta.cos(),
        rho * sin_phi * theta.sin(),
        rho * phi.cos(),
    )
}

/// A point in spherical coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Spherical {
    /// Distance from the origin
    pub rho: f64,
    /// Azimuth in radians
    pub theta: f64,
    /// Polar angle from +z in radians
    pub phi: f64,
}

impl Spherical {
    pub fn new(rho: f64, theta: f64, phi: f64) -> Self {
        Spherical { rho, theta, phi }
    }

    pub fn from_tuple((rho, theta, phi): (f64, f64, f64)) -> Self {
        Spherical::new(rho, theta, phi)
    }

    pub fn from_cartesian(point: &Cartesian3) -> Self {
        point.to_spherical()
    }

    pub fn to_cartesian(&self) -> Cartesian3 {
        Cartesian3::from_tuple(spherical_to_cartesian(self.rho, self.theta, self.phi))
    }

    /// Azimuth in degrees
    pub fn theta_degrees(&self) -> f64 {
        self.theta * RAD2DEG
    }

    /// Polar angle in degrees
    pub fn phi_degrees(&self) -> f64 {
        self.phi * RAD2DEG
    }

    /// False when any component is NaN, which happens for the origin
    pub fn is_defined(&self) -> bool {
        !(self.rho.is_nan() || self.theta.is_nan() || self.phi.is_nan())
    }
}
