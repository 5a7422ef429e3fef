//! Coordview: single-point conversion between Cartesian, cylindrical and
//! spherical coordinates
//!
//! This crate converts one point into the cylindrical and spherical
//! representations, converts each back to Cartesian, and renders the input
//! together with both reconstructions as a 3D scatter panel.
//!
//! ```rust
//! use coordview::{compute, Cartesian3};
//!
//! let report = compute(Cartesian3::new(1.0, 1.0, 1.0));
//! assert_eq!(report.cylindrical_line(), "r = 1.414, θ = 45.00°, z = 1.000");
//! assert!(report.max_round_trip_error() < 1e-9);
//! ```

use thiserror::Error;

pub mod compute;
pub mod constants;
pub mod coordinates;
pub mod input;
pub mod plot;

// Re-export commonly used types
pub use compute::{compute, TransformReport};
pub use coordinates::{Cartesian3, Cylindrical, Spherical};
pub use input::{NumberField, PointInput};
pub use plot::Scatter3d;

/// Main error type for the coordview library
#[derive(Debug, Error)]
pub enum CoordError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Render error: {0}")]
    Render(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for coordview operations
pub type Result<T> = std::result::Result<T, CoordError>;
