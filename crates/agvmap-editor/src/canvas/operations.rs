//! Canvas operations: path-edge management, viewport and grid control, the
//! freehand drawing state machine, and import/export.

use uuid::Uuid;

use agvmap_core::constants::GRID_SIZES;
use agvmap_core::{CanvasError, Error, Result};

use crate::geometry::{snap_to_grid, Point};
use crate::model::{CanvasPathLine, NodeData, PathData, PathParams};
use crate::node_transform::{export_nodes, import_nodes};
use crate::path_transform::{create_path, export_paths, import_paths};
use crate::viewport::{Viewport, ViewportPatch};

use super::types::{FreehandPath, GridConfig, PathDraft, PathStyle, RulerConfig, ToolType};
use super::{CanvasStore, Selection};

/// Partial path-edge update; unset fields keep their current value.
/// `distance` is derived state and deliberately not patchable.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PathLineUpdate {
    pub line_type: Option<i32>,
    pub lane_dir: Option<i32>,
    pub speed: Option<f64>,
    pub positive_course: Option<f64>,
    pub negative_course: Option<f64>,
    pub car_body_positive_course: Option<f64>,
    pub car_body_negative_course: Option<f64>,
    /// `Some(None)` clears the control point, `Some(Some(v))` sets it.
    pub cpx: Option<Option<f64>>,
    pub cpy: Option<Option<f64>>,
    pub stroke_color: Option<String>,
    pub stroke_width: Option<f64>,
    pub show_arrow: Option<bool>,
    pub dash: Option<Option<Vec<f64>>>,
}

impl CanvasStore {
    // --- Path-edge management --------------------------------------------

    /// Appends an already-built path edge.
    pub fn add_path_line(&mut self, path: CanvasPathLine) {
        self.path_lines.push(path);
    }

    /// Creates a path edge from business parameters, resolving the endpoint
    /// numbers against the live nodes. Fails with
    /// [`CanvasError::MissingEndpoint`] when either endpoint is absent;
    /// otherwise computes the distance from the resolved coordinates,
    /// appends the edge and returns a copy.
    pub fn add_path_from_data(&mut self, params: PathParams) -> Result<CanvasPathLine> {
        let start = self
            .node_by_number(params.start_node)
            .map(|n| (n.data.x, n.data.y));
        let end = self
            .node_by_number(params.end_node)
            .map(|n| (n.data.x, n.data.y));
        let ((start_x, start_y), (end_x, end_y)) = match (start, end) {
            (Some(s), Some(e)) => (s, e),
            _ => {
                return Err(Error::Canvas(CanvasError::MissingEndpoint {
                    start: params.start_node,
                    end: params.end_node,
                }))
            }
        };

        let path = create_path(params, start_x, start_y, end_x, end_y);
        self.path_lines.push(path.clone());
        Ok(path)
    }

    /// Merges a partial update into a path edge. Unknown ids are a silent
    /// no-op.
    pub fn update_path_line(&mut self, id: Uuid, update: PathLineUpdate) {
        let Some(path) = self.path_lines.iter_mut().find(|p| p.id == id) else {
            return;
        };

        let data = &mut path.data;
        if let Some(v) = update.line_type {
            data.line_type = v;
        }
        if let Some(v) = update.lane_dir {
            data.lane_dir = v;
        }
        if let Some(v) = update.speed {
            data.speed = v;
        }
        if let Some(v) = update.positive_course {
            data.positive_course = v;
        }
        if let Some(v) = update.negative_course {
            data.negative_course = v;
        }
        if let Some(v) = update.car_body_positive_course {
            data.car_body_positive_course = v;
        }
        if let Some(v) = update.car_body_negative_course {
            data.car_body_negative_course = v;
        }
        if let Some(v) = update.cpx {
            data.cpx = v;
        }
        if let Some(v) = update.cpy {
            data.cpy = v;
        }

        let graphics = &mut path.graphics;
        if let Some(v) = update.stroke_color {
            graphics.stroke_color = v;
        }
        if let Some(v) = update.stroke_width {
            graphics.stroke_width = v;
        }
        if let Some(v) = update.show_arrow {
            graphics.show_arrow = v;
        }
        if let Some(v) = update.dash {
            graphics.dash = v;
        }
    }

    /// Removes a path edge; clears the selection if it pointed at the
    /// removed edge. Unknown ids are a silent no-op.
    pub fn delete_path_line(&mut self, id: Uuid) {
        let before = self.path_lines.len();
        self.path_lines.retain(|p| p.id != id);
        if self.path_lines.len() < before && self.selection.path_id() == Some(id) {
            self.selection = Selection::None;
        }
    }

    /// Removes every path edge and any path selection.
    pub fn clear_all_path_lines(&mut self) {
        self.path_lines.clear();
        if matches!(self.selection, Selection::Path(_)) {
            self.selection = Selection::None;
        }
    }

    // --- Viewport --------------------------------------------------------

    /// Current viewport.
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Merges a partial viewport update.
    pub fn set_viewport(&mut self, patch: ViewportPatch) {
        self.viewport.apply(patch);
    }

    /// Zooms in one step, clamped.
    pub fn zoom_in(&mut self) {
        self.viewport.zoom_in();
    }

    /// Zooms out one step, clamped.
    pub fn zoom_out(&mut self) {
        self.viewport.zoom_out();
    }

    /// Restores the default viewport.
    pub fn reset_viewport(&mut self) {
        self.viewport.reset();
    }

    /// Suggested grid pitch for the current zoom; recomputed on demand,
    /// never stored.
    pub fn grid_base_size(&self) -> f64 {
        self.viewport.grid_base_size()
    }

    /// Suggested ruler tick interval for the current zoom.
    pub fn ruler_interval(&self) -> f64 {
        self.viewport.ruler_interval()
    }

    // --- Grid and ruler --------------------------------------------------

    /// Grid configuration.
    pub fn grid(&self) -> GridConfig {
        self.grid
    }

    /// Ruler configuration.
    pub fn ruler(&self) -> RulerConfig {
        self.ruler
    }

    /// Shows or hides the grid overlay.
    pub fn set_grid_visible(&mut self, show: bool) {
        self.grid.show = show;
    }

    /// Enables or disables grid snapping.
    pub fn set_snap_to_grid(&mut self, snap: bool) {
        self.grid.snap_to_grid = snap;
    }

    /// Sets the grid pitch. Values outside the allowed set are ignored.
    pub fn set_grid_size(&mut self, size: f64) {
        if GRID_SIZES.contains(&size) {
            self.grid.size = size;
        } else {
            tracing::warn!("ignoring unsupported grid size {size}");
        }
    }

    /// Shows or hides the ruler overlay.
    pub fn set_ruler_visible(&mut self, show: bool) {
        self.ruler.show = show;
    }

    /// Snaps a canvas point to the grid. Identity while snapping is
    /// disabled.
    pub fn snap_to_grid_point(&self, x: f64, y: f64) -> Point {
        if !self.grid.snap_to_grid {
            return Point::new(x, y);
        }
        Point::new(
            snap_to_grid(x, self.grid.size),
            snap_to_grid(y, self.grid.size),
        )
    }

    // --- Tool ------------------------------------------------------------

    /// Active tool.
    pub fn tool(&self) -> ToolType {
        self.tool
    }

    /// Switches the active tool. Leaving path mode cancels any in-progress
    /// freehand draw.
    pub fn set_tool(&mut self, tool: ToolType) {
        self.tool = tool;
        if tool != ToolType::Path {
            self.cancel_path();
        }
    }

    // --- Freehand drawing state machine ----------------------------------

    /// Whether a freehand draw is in progress.
    pub fn is_drawing_path(&self) -> bool {
        self.draft.is_drawing()
    }

    /// Points collected by the in-progress draw; empty when idle.
    pub fn current_path_points(&self) -> &[f64] {
        self.draft.points()
    }

    /// Enters drawing state with an empty point buffer.
    pub fn start_path(&mut self) {
        self.draft = PathDraft::Drawing(Vec::new());
    }

    /// Appends a point to the in-progress draw. Ignored while idle.
    pub fn add_path_point(&mut self, x: f64, y: f64) {
        if let PathDraft::Drawing(points) = &mut self.draft {
            points.push(x);
            points.push(y);
        }
    }

    /// Ends the draw. A polyline is created only when at least two points
    /// were collected; shorter buffers are discarded silently. Always
    /// returns to idle.
    pub fn finish_path(&mut self) {
        if let PathDraft::Drawing(points) = std::mem::take(&mut self.draft) {
            if points.len() >= 4 {
                self.freehand_paths.push(FreehandPath {
                    id: Uuid::new_v4(),
                    points,
                    style: PathStyle::default(),
                });
            }
        }
    }

    /// Discards the in-progress draw unconditionally.
    pub fn cancel_path(&mut self) {
        self.draft = PathDraft::Idle;
    }

    // --- Import / export -------------------------------------------------

    /// Replaces the node list with imported business records and clears the
    /// selection.
    pub fn load_nodes(&mut self, data: Vec<NodeData>) {
        self.nodes = import_nodes(data);
        self.clear_selection();
    }

    /// Replaces the path-edge list with imported business records and
    /// clears the selection.
    pub fn load_path_lines(&mut self, data: Vec<PathData>) {
        self.path_lines = import_paths(data);
        self.clear_selection();
    }

    /// Business-only projection of the current node list.
    pub fn get_export_data(&self) -> Vec<NodeData> {
        export_nodes(&self.nodes)
    }

    /// Business-only projection of the current path-edge list.
    pub fn get_export_paths(&self) -> Vec<PathData> {
        export_paths(&self.path_lines)
    }
}
