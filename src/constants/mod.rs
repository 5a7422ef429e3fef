//! Constants module for conversions, inputs and the plot panel

use std::f64::consts::PI;

// Angles
/// Degrees to radians conversion factor
pub const DEG2RAD: f64 = PI / 180.0;
/// Radians to degrees conversion factor
pub const RAD2DEG: f64 = 180.0 / PI;

// Input fields
/// Initial value of each Cartesian input component
pub const DEFAULT_COMPONENT: f64 = 1.0;
/// Increment applied by one step of an input field
pub const COMPONENT_STEP: f64 = 0.1;
/// Decimal places shown for an input field
pub const INPUT_DECIMALS: usize = 2;

/// Largest absolute difference accepted between the input and a reconstruction
pub const ROUND_TRIP_TOLERANCE: f64 = 1e-9;

// Plot panel
/// Title drawn above the scatter panel
pub const PLOT_TITLE: &str = "Point Visualization in 3D Space";
/// Default camera elevation in degrees
pub const VIEW_ELEVATION_DEG: f64 = 30.0;
/// Default camera azimuth in degrees
pub const VIEW_AZIMUTH_DEG: f64 = -60.0;
/// Opacity of each scatter marker
pub const MARKER_ALPHA: f64 = 0.8;

/// Legend label of the input point
pub const INPUT_LABEL: &str = "Cartesian (input)";
/// Legend label of the cylindrical reconstruction
pub const CYLINDRICAL_LABEL: &str = "Cylindrical → Cartesian";
/// Legend label of the spherical reconstruction
pub const SPHERICAL_LABEL: &str = "Spherical → Cartesian";

/// Fill color of the input point
pub const INPUT_COLOR: &str = "blue";
/// Fill color of the cylindrical reconstruction
pub const CYLINDRICAL_COLOR: &str = "green";
/// Fill color of the spherical reconstruction
pub const SPHERICAL_COLOR: &str = "red";
