//! # 3D Scatter Panel
//!
//! A small scene model for the scatter panel: a title, axis labels, a grid
//! and a legend, and one point per named series. The scene is projected
//! with an orthographic [`Camera`] and rendered by one of two backends:
//!
//! - [`canvas`]: a character canvas for terminals
//! - [`figure`]: an SVG document
//!
//! Non-finite points (the spherical reconstruction of the origin) are kept
//! in the scene and listed in the legend, but never drawn.

pub mod canvas;
pub mod figure;

use nalgebra::{Matrix2x3, Vector2, Vector3};

use crate::constants::{DEG2RAD, PLOT_TITLE, VIEW_AZIMUTH_DEG, VIEW_ELEVATION_DEG};
use crate::coordinates::Cartesian3;

/// Fraction of the data span added on each side of an axis
const AXIS_PADDING: f64 = 0.1;

/// Half-width used for an axis whose data has no span
const FLAT_AXIS_HALF_WIDTH: f64 = 0.5;

/// Number of grid divisions along each axis
pub const GRID_DIVISIONS: usize = 4;

/// One labelled point in the scene
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub label: String,
    pub color: String,
    pub point: Cartesian3,
    pub alpha: f64,
}

impl Series {
    pub fn new(label: &str, color: &str, point: Cartesian3) -> Self {
        Series {
            label: label.to_string(),
            color: color.to_string(),
            point,
            alpha: 1.0,
        }
    }

    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    /// Whether the point can be placed on the axes
    pub fn is_drawable(&self) -> bool {
        self.point.is_finite()
    }
}

/// Orthographic camera described by elevation and azimuth
///
/// Follows the usual 3D plotting convention: the eye sits at azimuth
/// `azimuth_deg` in the xy-plane, raised `elevation_deg` above it, looking at
/// the origin with +z up on screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub elevation_deg: f64,
    pub azimuth_deg: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Camera {
            elevation_deg: VIEW_ELEVATION_DEG,
            azimuth_deg: VIEW_AZIMUTH_DEG,
        }
    }
}

impl Camera {
    pub fn new(elevation_deg: f64, azimuth_deg: f64) -> Self {
        Camera {
            elevation_deg,
            azimuth_deg,
        }
    }

    /// Rows are the screen right and screen up directions in world space
    fn basis(&self) -> Matrix2x3<f64> {
        let (sin_el, cos_el) = (self.elevation_deg * DEG2RAD).sin_cos();
        let (sin_az, cos_az) = (self.azimuth_deg * DEG2RAD).sin_cos();
        Matrix2x3::new(
            -sin_az,
            cos_az,
            0.0,
            -sin_el * cos_az,
            -sin_el * sin_az,
            cos_el,
        )
    }

    /// Projects a point to screen coordinates (x right, y up)
    pub fn project(&self, v: &Vector3<f64>) -> Vector2<f64> {
        self.basis() * v
    }
}

/// Per-axis data limits of the scene
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisLimits {
    pub min: [f64; 3],
    pub max: [f64; 3],
}

impl AxisLimits {
    /// Fits limits around the finite points, padded on each side
    ///
    /// With no finite points the limits fall back to `[-1, 1]` on every axis.
    pub fn from_points<'a>(points: impl IntoIterator<Item = &'a Cartesian3>) -> Self {
        let mut lo = [f64::INFINITY; 3];
        let mut hi = [f64::NEG_INFINITY; 3];
        for p in points.into_iter().filter(|p| p.is_finite()) {
            for (axis, value) in [p.x, p.y, p.z].into_iter().enumerate() {
                lo[axis] = lo[axis].min(value);
                hi[axis] = hi[axis].max(value);
            }
        }

        let mut limits = AxisLimits {
            min: [-1.0; 3],
            max: [1.0; 3],
        };
        for axis in 0..3 {
            if lo[axis] > hi[axis] {
                continue;
            }
            let span = hi[axis] - lo[axis];
            if span < 1e-12 {
                limits.min[axis] = lo[axis] - FLAT_AXIS_HALF_WIDTH;
                limits.max[axis] = hi[axis] + FLAT_AXIS_HALF_WIDTH;
            } else {
                limits.min[axis] = lo[axis] - span * AXIS_PADDING;
                limits.max[axis] = hi[axis] + span * AXIS_PADDING;
            }
        }
        limits
    }

    /// Maps a data point into the `[-1, 1]³` plot box
    pub fn normalize(&self, p: &Cartesian3) -> Vector3<f64> {
        let scale = |axis: usize, value: f64| {
            let (lo, hi) = (self.min[axis], self.max[axis]);
            2.0 * (value - lo) / (hi - lo) - 1.0
        };
        Vector3::new(scale(0, p.x), scale(1, p.y), scale(2, p.z))
    }

    /// Data value of grid division `step` (0..=GRID_DIVISIONS) on `axis`
    pub fn tick(&self, axis: usize, step: usize) -> f64 {
        let t = step as f64 / GRID_DIVISIONS as f64;
        self.min[axis] + t * (self.max[axis] - self.min[axis])
    }
}

/// 3D scatter scene
#[derive(Debug, Clone, PartialEq)]
pub struct Scatter3d {
    pub title: String,
    pub axis_labels: [String; 3],
    pub show_grid: bool,
    pub show_legend: bool,
    pub camera: Camera,
    /// Color the text plot markers with ANSI escapes
    pub ansi_color: bool,
    series: Vec<Series>,
}

impl Default for Scatter3d {
    fn default() -> Self {
        Self::new()
    }
}

impl Scatter3d {
    pub fn new() -> Self {
        Scatter3d {
            title: PLOT_TITLE.to_string(),
            axis_labels: ["X".to_string(), "Y".to_string(), "Z".to_string()],
            show_grid: true,
            show_legend: true,
            camera: Camera::default(),
            ansi_color: false,
            series: Vec::new(),
        }
    }

    pub fn with_series(mut self, series: Series) -> Self {
        self.series.push(series);
        self
    }

    pub fn with_camera(mut self, camera: Camera) -> Self {
        self.camera = camera;
        self
    }

    pub fn with_ansi_color(mut self, ansi_color: bool) -> Self {
        self.ansi_color = ansi_color;
        self
    }

    pub fn series(&self) -> &[Series] {
        &self.series
    }

    pub fn limits(&self) -> AxisLimits {
        AxisLimits::from_points(self.series.iter().map(|s| &s.point))
    }

    /// Projects a data point through the limits and the camera
    pub(crate) fn screen_point(&self, limits: &AxisLimits, p: &Cartesian3) -> Vector2<f64> {
        self.camera.project(&limits.normalize(p))
    }

    /// Projected corners of the plot box, used to fit the view
    pub(crate) fn box_corners(&self) -> Vec<Vector2<f64>> {
        let mut corners = Vec::with_capacity(8);
        for &x in &[-1.0, 1.0] {
            for &y in &[-1.0, 1.0] {
                for &z in &[-1.0, 1.0] {
                    corners.push(self.camera.project(&Vector3::new(x, y, z)));
                }
            }
        }
        corners
    }

    /// Segments of the grid drawn on the three back faces of the box, in
    /// normalized box coordinates
    pub(crate) fn grid_segments(&self) -> Vec<(Vector3<f64>, Vector3<f64>)> {
        let mut segments = Vec::new();
        if !self.show_grid {
            return segments;
        }
        let (x_back, y_back) = self.back_walls();
        for step in 0..=GRID_DIVISIONS {
            let t = -1.0 + 2.0 * step as f64 / GRID_DIVISIONS as f64;
            // floor (z = -1)
            segments.push((Vector3::new(t, -1.0, -1.0), Vector3::new(t, 1.0, -1.0)));
            segments.push((Vector3::new(-1.0, t, -1.0), Vector3::new(1.0, t, -1.0)));
            // wall at constant x
            segments.push((Vector3::new(x_back, t, -1.0), Vector3::new(x_back, t, 1.0)));
            segments.push((Vector3::new(x_back, -1.0, t), Vector3::new(x_back, 1.0, t)));
            // wall at constant y
            segments.push((Vector3::new(t, y_back, -1.0), Vector3::new(t, y_back, 1.0)));
            segments.push((Vector3::new(-1.0, y_back, t), Vector3::new(1.0, y_back, t)));
        }
        segments
    }

    /// Axis lines along the front-bottom edges of the box, in box coordinates
    pub(crate) fn axis_segments(&self) -> [(Vector3<f64>, Vector3<f64>); 3] {
        let (x_back, y_back) = self.back_walls();
        let (x_front, y_front) = (-x_back, -y_back);
        [
            (
                Vector3::new(-1.0, y_front, -1.0),
                Vector3::new(1.0, y_front, -1.0),
            ),
            (
                Vector3::new(x_front, -1.0, -1.0),
                Vector3::new(x_front, 1.0, -1.0),
            ),
            (
                Vector3::new(x_back, y_front, -1.0),
                Vector3::new(x_back, y_front, 1.0),
            ),
        ]
    }

    /// Box-coordinate x and y of the walls facing away from the camera
    fn back_walls(&self) -> (f64, f64) {
        let (sin_az, cos_az) = (self.camera.azimuth_deg * DEG2RAD).sin_cos();
        let x_back = if cos_az >= 0.0 { -1.0 } else { 1.0 };
        let y_back = if sin_az >= 0.0 { -1.0 } else { 1.0 };
        (x_back, y_back)
    }
}
