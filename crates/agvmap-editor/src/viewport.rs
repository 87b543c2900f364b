//! Viewport and coordinate transformation for the canvas.
//!
//! Handles conversion between screen coordinates (origin top-left, Y down)
//! and canvas coordinates (Cartesian, Y up). Manages pan and zoom with a
//! symmetric clamp on the scale.

use serde::{Deserialize, Serialize};

use agvmap_core::constants::{SCALE_MAX, SCALE_MIN, ZOOM_STEP};

use crate::geometry::Point;

/// The pan/zoom transform mapping canvas coordinates to screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    /// Screen-pixel offset of the canvas origin, X.
    pub x: f64,
    /// Screen-pixel offset of the canvas origin, Y.
    pub y: f64,
    /// Zoom factor, always positive.
    pub scale: f64,
}

/// Partial viewport update; unset fields keep their current value.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ViewportPatch {
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub scale: Option<f64>,
}

impl Viewport {
    /// Creates the default viewport: origin offset zero, scale 1.
    pub fn new() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            scale: 1.0,
        }
    }

    /// Converts screen coordinates to canvas coordinates.
    ///
    /// The Y negation maps the Y-down screen space onto the Y-up canvas:
    ///
    /// ```text
    /// canvas_x =  (screen_x - x) / scale
    /// canvas_y = -(screen_y - y) / scale
    /// ```
    pub fn screen_to_canvas(&self, screen_x: f64, screen_y: f64) -> Point {
        Point::new(
            (screen_x - self.x) / self.scale,
            -(screen_y - self.y) / self.scale,
        )
    }

    /// Converts canvas coordinates to screen coordinates. Exact inverse of
    /// [`screen_to_canvas`](Self::screen_to_canvas).
    pub fn canvas_to_screen(&self, canvas_x: f64, canvas_y: f64) -> Point {
        Point::new(
            canvas_x * self.scale + self.x,
            -canvas_y * self.scale + self.y,
        )
    }

    /// Merges a partial update.
    pub fn apply(&mut self, patch: ViewportPatch) {
        if let Some(x) = patch.x {
            self.x = x;
        }
        if let Some(y) = patch.y {
            self.y = y;
        }
        if let Some(scale) = patch.scale {
            self.scale = scale;
        }
    }

    /// Sets the scale, clamped to the allowed range.
    pub fn set_scale(&mut self, scale: f64) {
        self.scale = scale.clamp(SCALE_MIN, SCALE_MAX);
    }

    /// Zooms in one step. A no-op at the upper bound.
    pub fn zoom_in(&mut self) {
        self.set_scale(self.scale * ZOOM_STEP);
    }

    /// Zooms out one step. A no-op at the lower bound.
    pub fn zoom_out(&mut self) {
        self.set_scale(self.scale / ZOOM_STEP);
    }

    /// Re-scales around a screen point so that the canvas position under it
    /// stays put. Used for wheel zoom at the pointer.
    pub fn zoom_at(&mut self, screen_point: Point, new_scale: f64) {
        let new_scale = new_scale.clamp(SCALE_MIN, SCALE_MAX);
        let anchor = self.screen_to_canvas(screen_point.x, screen_point.y);
        self.scale = new_scale;
        self.x = screen_point.x - anchor.x * new_scale;
        self.y = screen_point.y + anchor.y * new_scale;
    }

    /// Restores the default transform.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Suggested grid pitch for the current zoom. Coarser when zoomed out
    /// so the grid stays legible. Purely a rendering hint.
    pub fn grid_base_size(&self) -> f64 {
        if self.scale < 0.75 {
            40.0
        } else if self.scale < 1.5 {
            20.0
        } else {
            10.0
        }
    }

    /// Suggested ruler tick interval for the current zoom.
    pub fn ruler_interval(&self) -> f64 {
        if self.scale < 0.5 {
            200.0
        } else if self.scale < 1.0 {
            100.0
        } else if self.scale < 2.0 {
            50.0
        } else {
            25.0
        }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Viewport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Scale: {:.2}x | Offset: ({:.1}, {:.1})",
            self.scale, self.x, self.y
        )
    }
}
