//! Path-edge records: persisted business data and the enriched runtime form.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Persisted path-edge record.
///
/// `type` is a fixed discriminator (11) identifying path records in mixed
/// exports. `start_node`/`end_node` reference node business numbers.
/// `distance` is derived from the endpoint positions and recomputed by the
/// canvas store; it is never hand-edited. `cpx`/`cpy` exist only for curved
/// segments (`line_type = 1`) and stay off the wire otherwise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PathData {
    #[serde(rename = "type")]
    pub type_code: i32,
    pub start_node: i64,
    pub end_node: i64,
    /// 0 = straight, 1 = quadratic curve.
    pub line_type: i32,
    /// Straight-line endpoint distance, even for curved segments.
    pub distance: f64,
    /// 0 = one-way, 1 = bidirectional.
    pub lane_dir: i32,
    pub speed: f64,
    pub positive_course: f64,
    pub negative_course: f64,
    pub car_body_positive_course: f64,
    pub car_body_negative_course: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cpx: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cpy: Option<f64>,
}

/// Runtime-only graphic attributes of a path edge, derived from
/// `(line_type, lane_dir)` via the path graphics registry.
#[derive(Debug, Clone, PartialEq)]
pub struct PathGraphics {
    /// Hex stroke color, e.g. "#3b82f6".
    pub stroke_color: String,
    pub stroke_width: f64,
    pub show_arrow: bool,
    /// Dash pattern, set for curved segments.
    pub dash: Option<Vec<f64>>,
}

/// Live path edge as held by the canvas store.
#[derive(Debug, Clone, PartialEq)]
pub struct CanvasPathLine {
    /// Opaque runtime identifier; never persisted.
    pub id: Uuid,
    pub data: PathData,
    pub graphics: PathGraphics,
}

/// Caller-supplied fields for a new path edge.
///
/// Everything of [`PathData`] except the fixed discriminator and the
/// derived `distance`, which the transform layer fills in.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PathParams {
    pub start_node: i64,
    pub end_node: i64,
    pub line_type: i32,
    pub lane_dir: i32,
    pub speed: f64,
    pub positive_course: f64,
    pub negative_course: f64,
    pub car_body_positive_course: f64,
    pub car_body_negative_course: f64,
    pub cpx: Option<f64>,
    pub cpy: Option<f64>,
}
