//! SVG rendering of a [`Scatter3d`]

use std::path::Path;

use log::debug;
use nalgebra::{Vector2, Vector3};
use svg::node::element::{Circle, Group, Line, Rectangle, Text};
use svg::Document;

use super::{AxisLimits, Scatter3d, GRID_DIVISIONS};
use crate::Result;

/// Figure edge length in pixels
pub const FIGURE_SIZE: f64 = 560.0;
/// Space kept free around the plot box for labels
const MARGIN: f64 = 70.0;
/// Vertical space reserved for the title
const TITLE_BAND: f64 = 40.0;
const MARKER_RADIUS: f64 = 4.5;

/// Pixel mapping of projected coordinates (y grows downward)
struct PixelMap {
    scale: f64,
    center: Vector2<f64>,
    origin: Vector2<f64>,
}

impl PixelMap {
    fn fit(corners: &[Vector2<f64>]) -> Self {
        let mut min = Vector2::new(f64::INFINITY, f64::INFINITY);
        let mut max = Vector2::new(f64::NEG_INFINITY, f64::NEG_INFINITY);
        for c in corners {
            min = min.inf(c);
            max = max.sup(c);
        }
        let span = max - min;
        let usable = FIGURE_SIZE - 2.0 * MARGIN;
        let scale = (usable / span.x).min((usable - TITLE_BAND) / span.y);
        PixelMap {
            scale,
            center: (min + max) / 2.0,
            origin: Vector2::new(FIGURE_SIZE / 2.0, (FIGURE_SIZE + TITLE_BAND) / 2.0),
        }
    }

    fn pixel(&self, p: &Vector2<f64>) -> (f64, f64) {
        (
            self.origin.x + (p.x - self.center.x) * self.scale,
            self.origin.y - (p.y - self.center.y) * self.scale,
        )
    }
}

fn segment(from: (f64, f64), to: (f64, f64), stroke: &str, width: f64) -> Line {
    Line::new()
        .set("x1", from.0)
        .set("y1", from.1)
        .set("x2", to.0)
        .set("y2", to.1)
        .set("stroke", stroke)
        .set("stroke-width", width)
}

fn label(content: &str, at: (f64, f64), size: f64, anchor: &str) -> Text {
    Text::new(content)
        .set("x", at.0)
        .set("y", at.1)
        .set("font-family", "sans-serif")
        .set("font-size", size)
        .set("text-anchor", anchor)
}

impl Scatter3d {
    /// Builds an SVG document of the scene
    pub fn render_svg(&self) -> Document {
        let limits = self.limits();
        let map = PixelMap::fit(&self.box_corners());
        let px = |v: &Vector3<f64>| map.pixel(&self.camera.project(v));

        let mut document = Document::new()
            .set("viewBox", (0.0, 0.0, FIGURE_SIZE, FIGURE_SIZE))
            .set("width", FIGURE_SIZE)
            .set("height", FIGURE_SIZE)
            .add(
                Rectangle::new()
                    .set("width", FIGURE_SIZE)
                    .set("height", FIGURE_SIZE)
                    .set("fill", "white"),
            )
            .add(label(
                &self.title,
                (FIGURE_SIZE / 2.0, TITLE_BAND * 0.75),
                16.0,
                "middle",
            ));

        let mut grid = Group::new().set("class", "grid");
        for (a, b) in self.grid_segments() {
            grid = grid.add(segment(px(&a), px(&b), "#d0d0d0", 0.8));
        }
        document = document.add(grid);

        document = document.add(self.axes_group(&limits, &px));

        let mut points = Group::new().set("class", "series");
        for series in self.series().iter().filter(|s| s.is_drawable()) {
            let (cx, cy) = map.pixel(&self.screen_point(&limits, &series.point));
            points = points.add(
                Circle::new()
                    .set("cx", cx)
                    .set("cy", cy)
                    .set("r", MARKER_RADIUS)
                    .set("fill", series.color.as_str())
                    .set("fill-opacity", series.alpha),
            );
        }
        document = document.add(points);

        if self.show_legend {
            document = document.add(self.legend_group());
        }
        document
    }

    /// Writes the SVG document to `path`
    pub fn save_svg<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        svg::save(path, &self.render_svg())?;
        debug!("saved scatter plot to {}", path.display());
        Ok(())
    }

    fn axes_group(
        &self,
        limits: &AxisLimits,
        px: &dyn Fn(&Vector3<f64>) -> (f64, f64),
    ) -> Group {
        let mut group = Group::new().set("class", "axes");
        for (axis, (a, b)) in self.axis_segments().iter().enumerate() {
            let (start, end) = (px(a), px(b));
            group = group.add(segment(start, end, "black", 1.2));

            // tick values at each grid division
            for step in 0..=GRID_DIVISIONS {
                let t = step as f64 / GRID_DIVISIONS as f64;
                let at = (
                    start.0 + t * (end.0 - start.0),
                    start.1 + t * (end.1 - start.1) + 14.0,
                );
                group = group.add(label(
                    &format!("{:.2}", limits.tick(axis, step)),
                    at,
                    9.0,
                    "middle",
                ));
            }

            // axis name beyond the far end
            let (dx, dy) = (end.0 - start.0, end.1 - start.1);
            let len = (dx * dx + dy * dy).sqrt().max(1.0);
            let at = (end.0 + 22.0 * dx / len, end.1 + 22.0 * dy / len);
            group = group.add(label(&self.axis_labels[axis], at, 13.0, "middle"));
        }
        group
    }

    fn legend_group(&self) -> Group {
        let mut group = Group::new().set("class", "legend");
        let (x, mut y) = (FIGURE_SIZE - 190.0, TITLE_BAND + 10.0);
        group = group.add(
            Rectangle::new()
                .set("x", x - 10.0)
                .set("y", y - 12.0)
                .set("width", 190.0)
                .set("height", 20.0 * self.series().len() as f64 + 6.0)
                .set("fill", "white")
                .set("fill-opacity", 0.8)
                .set("stroke", "#bbbbbb"),
        );
        for series in self.series() {
            group = group
                .add(
                    Circle::new()
                        .set("cx", x)
                        .set("cy", y)
                        .set("r", MARKER_RADIUS)
                        .set("fill", series.color.as_str())
                        .set("fill-opacity", series.alpha),
                )
                .add(label(&series.label, (x + 12.0, y + 4.0), 11.0, "start"));
            y += 20.0;
        }
        group
    }
}
