//! Path geometry helpers.
//!
//! Pure math shared by the canvas store, the interaction controller and the
//! rendering layer: midpoint and tangent of straight and quadratic-curve
//! segments, Euclidean distance, and grid rounding. Coordinates are
//! Cartesian (Y grows upward); the screen-space flip lives in
//! [`crate::viewport::Viewport`].

use agvmap_core::constants::LINE_TYPE_STRAIGHT;

/// A point in canvas (world) or screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Creates a new point.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.2}, {:.2})", self.x, self.y)
    }
}

/// Returns the visual midpoint of a path segment.
///
/// Straight segments yield the arithmetic midpoint. Curved segments yield
/// the quadratic Bezier evaluated at `t = 0.5`:
///
/// ```text
/// B(0.5) = 0.25 * start + 0.5 * control + 0.25 * end
/// ```
///
/// A missing control point is treated as the origin, matching how absent
/// `cpx`/`cpy` fields behave in stored data.
pub fn calc_mid_point(start: Point, end: Point, line_type: i32, control: Option<Point>) -> Point {
    if line_type == LINE_TYPE_STRAIGHT {
        Point::new((start.x + end.x) / 2.0, (start.y + end.y) / 2.0)
    } else {
        let c = control.unwrap_or_default();
        Point::new(
            0.25 * start.x + 0.5 * c.x + 0.25 * end.x,
            0.25 * start.y + 0.5 * c.y + 0.25 * end.y,
        )
    }
}

/// Returns the direction-arrow angle of a path segment, in radians.
///
/// Straight segments use `atan2(end - start)`. Curved segments use the
/// Bezier tangent at `t = 0.5`:
///
/// ```text
/// B'(0.5) = (control - start) + (end - control) = end - start
/// ```
///
/// The cancellation is exact: the mid-curve tangent always points from
/// start to end no matter where the control point sits. Keep the expanded
/// form — the invariant must survive any future change to the evaluation
/// parameter.
pub fn calc_arrow_angle(start: Point, end: Point, line_type: i32, control: Option<Point>) -> f64 {
    if line_type == LINE_TYPE_STRAIGHT {
        (end.y - start.y).atan2(end.x - start.x)
    } else {
        let c = control.unwrap_or_default();
        let dx = (c.x - start.x) + (end.x - c.x);
        let dy = (c.y - start.y) + (end.y - c.y);
        dy.atan2(dx)
    }
}

/// Euclidean distance between two points.
pub fn calculate_distance(x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
    ((x2 - x1).powi(2) + (y2 - y1).powi(2)).sqrt()
}

/// Rounds a coordinate to the nearest multiple of the grid pitch.
pub fn snap_to_grid(value: f64, grid_size: f64) -> f64 {
    (value / grid_size).round() * grid_size
}
