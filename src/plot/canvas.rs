//! Character-cell rendering of a [`Scatter3d`] for terminals
//!
//! Terminal cells are roughly twice as tall as they are wide, so vertical
//! screen distances are halved when mapping to rows.

use nalgebra::{Vector2, Vector3};

use super::{AxisLimits, Scatter3d};
use crate::{CoordError, Result};

/// Smallest canvas that still fits the box and axis labels
pub const MIN_WIDTH: usize = 24;
pub const MIN_HEIGHT: usize = 10;

/// Largest canvas accepted by [`Scatter3d::render_text`]
pub const MAX_WIDTH: usize = 1000;
pub const MAX_HEIGHT: usize = 400;

/// Width used when the terminal size cannot be detected
pub const FALLBACK_WIDTH: usize = 72;

const GRID_CHAR: char = '.';
/// Marker characters assigned to series in draw order
const MARKERS: [char; 3] = ['o', '+', 'x'];

/// Column count of the attached terminal, or [`FALLBACK_WIDTH`]
pub fn terminal_width() -> usize {
    term_size::dimensions()
        .map(|(w, _)| w)
        .unwrap_or(FALLBACK_WIDTH)
}

/// Canvas height that keeps the box roughly square for a given width
pub fn height_for_width(width: usize) -> usize {
    (width.saturating_mul(2) / 5).max(MIN_HEIGHT)
}

/// Screen positions are snapped to this grid before picking a cell, so
/// points that differ only by rounding noise share a cell
const CELL_SNAP: f64 = 1e6;

fn snap(v: f64) -> f64 {
    (v * CELL_SNAP).round() / CELL_SNAP
}

/// ANSI foreground code for a named series color
fn ansi_code(color: &str) -> Option<&'static str> {
    match color {
        "blue" => Some("34"),
        "green" => Some("32"),
        "red" => Some("31"),
        _ => None,
    }
}

fn paint(ch: char, code: Option<&str>) -> String {
    match code {
        Some(code) => format!("\x1b[{}m{}\x1b[0m", code, ch),
        None => ch.to_string(),
    }
}

/// Marker used for the series at `index`
pub fn marker_for(index: usize) -> char {
    MARKERS[index % MARKERS.len()]
}

/// Fixed-size grid of characters
#[derive(Debug, Clone)]
pub struct TextCanvas {
    width: usize,
    height: usize,
    cells: Vec<Vec<char>>,
    styles: Vec<Vec<Option<&'static str>>>,
}

impl TextCanvas {
    pub fn new(width: usize, height: usize) -> Self {
        TextCanvas {
            width,
            height,
            cells: vec![vec![' '; width]; height],
            styles: vec![vec![None; width]; height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn get(&self, col: usize, row: usize) -> Option<char> {
        self.cells.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Writes a character, ignoring positions off the canvas
    pub fn put(&mut self, col: i64, row: i64, ch: char) {
        self.put_styled(col, row, ch, None);
    }

    /// Writes a character with an optional ANSI color code
    pub fn put_styled(&mut self, col: i64, row: i64, ch: char, style: Option<&'static str>) {
        if col < 0 || row < 0 {
            return;
        }
        let (col, row) = (col as usize, row as usize);
        if row < self.height && col < self.width {
            self.cells[row][col] = ch;
            self.styles[row][col] = style;
        }
    }

    /// Writes a string left to right starting at `(col, row)`, clipped
    pub fn text(&mut self, col: i64, row: i64, s: &str) {
        for (i, ch) in s.chars().enumerate() {
            self.put(col + i as i64, row, ch);
        }
    }

    /// Draws a straight segment between two cells
    ///
    /// When `ch` is `None` the character is picked from the slope.
    pub fn line(&mut self, from: (i64, i64), to: (i64, i64), ch: Option<char>) {
        let (dx, dy) = (to.0 - from.0, to.1 - from.1);
        let ch = ch.unwrap_or_else(|| slope_char(dx, dy));
        let steps = dx.abs().max(dy.abs()).max(1);
        for i in 0..=steps {
            let t = i as f64 / steps as f64;
            let col = from.0 as f64 + t * dx as f64;
            let row = from.1 as f64 + t * dy as f64;
            self.put(col.round() as i64, row.round() as i64, ch);
        }
    }

    pub fn lines(&self) -> Vec<String> {
        self.cells
            .iter()
            .map(|row| row.iter().collect::<String>().trim_end().to_string())
            .collect()
    }

    /// Like [`TextCanvas::lines`], with styled cells wrapped in ANSI escapes
    pub fn styled_lines(&self) -> Vec<String> {
        self.cells
            .iter()
            .zip(&self.styles)
            .map(|(row, styles)| {
                let len = row.iter().rposition(|&c| c != ' ').map_or(0, |i| i + 1);
                row[..len]
                    .iter()
                    .zip(styles)
                    .map(|(&ch, &style)| paint(ch, style))
                    .collect()
            })
            .collect()
    }
}

impl std::fmt::Display for TextCanvas {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.lines().join("\n"))
    }
}

fn slope_char(dx: i64, dy: i64) -> char {
    if dx.abs() >= 2 * dy.abs() {
        '-'
    } else if dy.abs() >= 2 * dx.abs() {
        '|'
    } else if (dx > 0) == (dy > 0) {
        // rows grow downward
        '\\'
    } else {
        '/'
    }
}

/// Maps projected screen coordinates onto canvas cells
struct Viewport {
    scale: f64,
    min: Vector2<f64>,
    max_y: f64,
    offset: (f64, f64),
}

impl Viewport {
    /// Fits the projected box into `width × height` cells, leaving a border
    fn fit(corners: &[Vector2<f64>], width: usize, height: usize, border: usize) -> Self {
        let mut min = Vector2::new(f64::INFINITY, f64::INFINITY);
        let mut max = Vector2::new(f64::NEG_INFINITY, f64::NEG_INFINITY);
        for c in corners {
            min = min.inf(c);
            max = max.sup(c);
        }
        let span = max - min;
        let usable_w = (width - 2 * border - 1) as f64;
        let usable_h = (height - 2 * border - 1) as f64;
        let scale = (usable_w / span.x).min(2.0 * usable_h / span.y);
        let offset = (
            border as f64 + (usable_w - span.x * scale) / 2.0,
            border as f64 + (usable_h - span.y * scale / 2.0) / 2.0,
        );
        Viewport {
            scale,
            min,
            max_y: max.y,
            offset,
        }
    }

    fn cell(&self, p: &Vector2<f64>) -> (i64, i64) {
        let col = snap(self.offset.0 + (p.x - self.min.x) * self.scale);
        let row = snap(self.offset.1 + (self.max_y - p.y) * self.scale / 2.0);
        (col.round() as i64, row.round() as i64)
    }
}

impl Scatter3d {
    /// Renders the scene as text: title, plot area, legend and axis ranges
    ///
    /// `width × height` is the size of the plot area; the title, legend and
    /// axis range lines are added above and below it. Markers are colored
    /// with ANSI escapes when [`Scatter3d::ansi_color`] is set.
    pub fn render_text(&self, width: usize, height: usize) -> Result<String> {
        if width < MIN_WIDTH || height < MIN_HEIGHT {
            return Err(CoordError::Render(format!(
                "text canvas {}x{} is smaller than the minimum {}x{}",
                width, height, MIN_WIDTH, MIN_HEIGHT
            )));
        }
        if width > MAX_WIDTH || height > MAX_HEIGHT {
            return Err(CoordError::Render(format!(
                "text canvas {}x{} is larger than the maximum {}x{}",
                width, height, MAX_WIDTH, MAX_HEIGHT
            )));
        }

        let limits = self.limits();
        let canvas = self.draw_canvas(&limits, width, height);

        let mut out = Vec::new();
        let pad = width.saturating_sub(self.title.chars().count()) / 2;
        out.push(format!("{}{}", " ".repeat(pad), self.title));
        if self.ansi_color {
            out.extend(canvas.styled_lines());
        } else {
            out.extend(canvas.lines());
        }

        if self.show_legend {
            for (i, series) in self.series().iter().enumerate() {
                let note = if series.is_drawable() {
                    ""
                } else {
                    "  (not drawn: non-finite)"
                };
                let code = if self.ansi_color {
                    ansi_code(&series.color)
                } else {
                    None
                };
                out.push(format!(
                    "  {} {}{}",
                    paint(marker_for(i), code),
                    series.label,
                    note
                ));
            }
        }
        for (axis, label) in self.axis_labels.iter().enumerate() {
            out.push(format!(
                "  {}: [{:.2}, {:.2}]",
                label, limits.min[axis], limits.max[axis]
            ));
        }

        Ok(out.join("\n"))
    }

    fn draw_canvas(&self, limits: &AxisLimits, width: usize, height: usize) -> TextCanvas {
        let mut canvas = TextCanvas::new(width, height);
        let viewport = Viewport::fit(&self.box_corners(), width, height, 1);
        let cell = |v: &Vector3<f64>| viewport.cell(&self.camera.project(v));

        for (a, b) in self.grid_segments() {
            canvas.line(cell(&a), cell(&b), Some(GRID_CHAR));
        }

        for (axis, (a, b)) in self.axis_segments().iter().enumerate() {
            canvas.line(cell(a), cell(b), None);
            // label just past the positive end of each axis
            let (end_col, end_row) = cell(b);
            let (start_col, start_row) = cell(a);
            let dir_col = (end_col - start_col).signum();
            let dir_row = (end_row - start_row).signum();
            canvas.text(end_col + dir_col, end_row + dir_row, &self.axis_labels[axis]);
        }

        // Later series overwrite earlier ones where they coincide
        for (i, series) in self.series().iter().enumerate() {
            if !series.is_drawable() {
                continue;
            }
            let (col, row) = viewport.cell(&self.screen_point(limits, &series.point));
            canvas.put_styled(col, row, marker_for(i), ansi_code(&series.color));
        }

        canvas
    }
}
