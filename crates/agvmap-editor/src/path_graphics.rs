//! Path-edge graphic defaults.
//!
//! Stroke style is assembled from a base default plus two partial
//! overrides, applied in a fixed order: base, then the `line_type`
//! contribution (dash pattern for curves), then the `lane_dir` contribution
//! (color and arrow visibility). Unknown codes contribute nothing — the
//! base survives untouched.

use agvmap_core::constants::{
    LANE_DIR_ONE_WAY, LANE_DIR_TWO_WAY, LINE_TYPE_CURVE, LINE_TYPE_STRAIGHT,
};

use crate::model::PathGraphics;

/// Stroke color of one-way lanes (green).
pub const STROKE_ONE_WAY: &str = "#10b981";

/// Stroke color of bidirectional lanes, also the base color (blue).
pub const STROKE_TWO_WAY: &str = "#3b82f6";

/// Base style before any override is applied.
pub fn base_path_graphics() -> PathGraphics {
    PathGraphics {
        stroke_color: STROKE_TWO_WAY.to_string(),
        stroke_width: 2.0,
        show_arrow: false,
        dash: None,
    }
}

/// Returns the graphic defaults for a `(line_type, lane_dir)` pair.
pub fn path_graphic_defaults(line_type: i32, lane_dir: i32) -> PathGraphics {
    let mut graphics = base_path_graphics();

    match line_type {
        LINE_TYPE_STRAIGHT => {
            graphics.stroke_width = 2.0;
            graphics.dash = None;
        }
        LINE_TYPE_CURVE => {
            graphics.stroke_width = 2.0;
            // Dashed so curves read differently from straight segments
            graphics.dash = Some(vec![5.0, 5.0]);
        }
        _ => {}
    }

    match lane_dir {
        LANE_DIR_ONE_WAY => {
            graphics.stroke_color = STROKE_ONE_WAY.to_string();
            graphics.show_arrow = true;
        }
        LANE_DIR_TWO_WAY => {
            graphics.stroke_color = STROKE_TWO_WAY.to_string();
            graphics.show_arrow = false;
        }
        _ => {}
    }

    graphics
}
