//! The canvas store: the central mutable graph state of the editor.
//!
//! Owns the node and path-edge lists, the selection, the active tool, the
//! viewport, and the grid/ruler configuration. All mutation goes through
//! the operations defined here and in [`operations`]; the store enforces
//! the referential invariants (cascade deletes, incident-distance
//! recomputation, selection pruning) on every call.

mod operations;
mod types;

pub use operations::PathLineUpdate;
pub use types::{
    FreehandPath, GridConfig, PathDraft, PathStyle, RulerConfig, SelectedObject, Selection,
    ToolType,
};

use uuid::Uuid;

use agvmap_core::constants::CANVAS_EXTENT;

use crate::model::{CanvasNode, CanvasPathLine, NodeNumber};
use crate::node_transform::{create_node, NodeInit};
use crate::viewport::Viewport;

/// Partial node update; unset fields keep their current value. `distance`
/// recomputation for incident edges is triggered by `x`/`y` changes.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NodeUpdate {
    pub node: Option<NodeNumber>,
    pub type_code: Option<i32>,
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub left_station: Option<i64>,
    pub right_station: Option<String>,
    pub node_attr: Option<String>,
    pub node_type: Option<String>,
    pub navigation_mode: Option<i32>,
    pub avoidable: Option<u8>,
    pub enable: Option<bool>,
    pub speed: Option<f64>,
    pub dir: Option<f64>,
    pub floor: Option<NodeNumber>,
    pub region_name: Option<String>,
    pub station_name: Option<String>,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub rotation: Option<f64>,
    pub label: Option<String>,
}

impl NodeUpdate {
    /// Position-only update, the common case while dragging.
    pub fn position(x: f64, y: f64) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
            ..Self::default()
        }
    }
}

/// Live editable graph state.
#[derive(Debug, Clone)]
pub struct CanvasStore {
    canvas_width: f64,
    canvas_height: f64,
    viewport: Viewport,
    grid: GridConfig,
    ruler: RulerConfig,
    nodes: Vec<CanvasNode>,
    path_lines: Vec<CanvasPathLine>,
    freehand_paths: Vec<FreehandPath>,
    selection: Selection,
    tool: ToolType,
    draft: PathDraft,
}

impl CanvasStore {
    /// Creates an empty canvas with the default viewport and grid.
    pub fn new() -> Self {
        Self {
            canvas_width: CANVAS_EXTENT,
            canvas_height: CANVAS_EXTENT,
            viewport: Viewport::new(),
            grid: GridConfig::default(),
            ruler: RulerConfig::default(),
            nodes: Vec::new(),
            path_lines: Vec::new(),
            freehand_paths: Vec::new(),
            selection: Selection::None,
            tool: ToolType::Select,
            draft: PathDraft::Idle,
        }
    }

    /// Logical canvas width.
    pub fn canvas_width(&self) -> f64 {
        self.canvas_width
    }

    /// Logical canvas height.
    pub fn canvas_height(&self) -> f64 {
        self.canvas_height
    }

    /// Live nodes, in insertion order.
    pub fn nodes(&self) -> &[CanvasNode] {
        &self.nodes
    }

    /// Live path edges, in insertion order.
    pub fn path_lines(&self) -> &[CanvasPathLine] {
        &self.path_lines
    }

    /// Freehand polylines from the legacy drawing mode.
    pub fn freehand_paths(&self) -> &[FreehandPath] {
        &self.freehand_paths
    }

    /// Current selection.
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Looks up a node by runtime id.
    pub fn node(&self, id: Uuid) -> Option<&CanvasNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// Looks up a node by business number.
    pub fn node_by_number(&self, number: i64) -> Option<&CanvasNode> {
        self.nodes.iter().find(|n| n.data.node.matches(number))
    }

    /// Looks up a path edge by runtime id.
    pub fn path_line(&self, id: Uuid) -> Option<&CanvasPathLine> {
        self.path_lines.iter().find(|p| p.id == id)
    }

    // --- Node management -------------------------------------------------

    /// Appends an already-built node. No uniqueness check is performed;
    /// callers that need a fresh number go through
    /// [`add_node_from_data`](Self::add_node_from_data).
    pub fn add_node(&mut self, node: CanvasNode) {
        self.nodes.push(node);
    }

    /// Creates a node from the given init (defaults, overrides, graphics,
    /// generated number), appends it and returns a copy.
    pub fn add_node_from_data(&mut self, init: NodeInit) -> CanvasNode {
        let node = create_node(init, &self.nodes);
        self.nodes.push(node.clone());
        node
    }

    /// Merges a partial update into a node. Silently does nothing when the
    /// id is unknown (stale UI references are expected). When the position
    /// changed, recomputes `distance` on every edge incident to the node's
    /// business number.
    pub fn update_node(&mut self, id: Uuid, update: NodeUpdate) {
        let Some(node) = self.nodes.iter_mut().find(|n| n.id == id) else {
            return;
        };

        let moved = update.x.is_some() || update.y.is_some();

        let data = &mut node.data;
        if let Some(v) = update.node {
            data.node = v;
        }
        if let Some(v) = update.type_code {
            data.type_code = v;
        }
        if let Some(v) = update.x {
            data.x = v;
        }
        if let Some(v) = update.y {
            data.y = v;
        }
        if let Some(v) = update.left_station {
            data.left_station = v;
        }
        if let Some(v) = update.right_station {
            data.right_station = v;
        }
        if let Some(v) = update.node_attr {
            data.node_attr = v;
        }
        if let Some(v) = update.node_type {
            data.node_type = v;
        }
        if let Some(v) = update.navigation_mode {
            data.navigation_mode = v;
        }
        if let Some(v) = update.avoidable {
            data.avoidable = v;
        }
        if let Some(v) = update.enable {
            data.enable = v;
        }
        if let Some(v) = update.speed {
            data.speed = v;
        }
        if let Some(v) = update.dir {
            data.dir = v;
        }
        if let Some(v) = update.floor {
            data.floor = v;
        }
        if let Some(v) = update.region_name {
            data.region_name = v;
        }
        if let Some(v) = update.station_name {
            data.station_name = v;
        }

        let graphics = &mut node.graphics;
        if let Some(v) = update.width {
            graphics.width = v;
        }
        if let Some(v) = update.height {
            graphics.height = v;
        }
        if let Some(v) = update.rotation {
            graphics.rotation = v;
        }
        if let Some(v) = update.label {
            graphics.label = v;
        }

        if moved {
            if let Some(number) = node.number() {
                self.refresh_incident_distances(number);
            }
        }
    }

    /// Removes a node, every path edge referencing its business number on
    /// either end, and its entry in the node selection. Unknown ids are a
    /// silent no-op.
    pub fn delete_node(&mut self, id: Uuid) {
        let Some(index) = self.nodes.iter().position(|n| n.id == id) else {
            return;
        };
        let removed = self.nodes.remove(index);

        if let Some(number) = removed.data.node.as_int() {
            self.remove_edges_of(number);
        }

        if let Selection::Nodes(ids) = &mut self.selection {
            ids.retain(|sid| *sid != id);
            if ids.is_empty() {
                self.selection = Selection::None;
            }
        }
    }

    /// Deletes every node in the current node selection, cascades included.
    pub fn delete_selected_nodes(&mut self) {
        let ids: Vec<Uuid> = self.selection.node_ids().to_vec();
        for id in ids {
            self.delete_node(id);
        }
        if matches!(self.selection, Selection::Nodes(_)) {
            self.selection = Selection::None;
        }
    }

    // --- Selection -------------------------------------------------------

    /// Selects a node. Single select replaces the whole selection;
    /// multi-select toggles membership. Either way any path selection is
    /// cleared — the two kinds are mutually exclusive.
    pub fn select_node(&mut self, id: Uuid, multi: bool) {
        if multi {
            let mut ids = match std::mem::take(&mut self.selection) {
                Selection::Nodes(ids) => ids,
                _ => Vec::new(),
            };
            if let Some(index) = ids.iter().position(|sid| *sid == id) {
                ids.remove(index);
            } else {
                ids.push(id);
            }
            self.selection = if ids.is_empty() {
                Selection::None
            } else {
                Selection::Nodes(ids)
            };
        } else {
            self.selection = Selection::Nodes(vec![id]);
        }
    }

    /// Selects a path edge, clearing any node selection.
    pub fn select_path(&mut self, id: Uuid) {
        self.selection = Selection::Path(id);
    }

    /// Resets to no selection.
    pub fn clear_selection(&mut self) {
        self.selection = Selection::None;
    }

    /// Resolves the current selection against the live lists. Stale ids
    /// are skipped; an entirely stale selection yields `None`.
    pub fn selected_object(&self) -> Option<SelectedObject<'_>> {
        match &self.selection {
            Selection::None => None,
            Selection::Nodes(ids) => {
                let nodes: Vec<&CanvasNode> =
                    ids.iter().filter_map(|id| self.node(*id)).collect();
                if nodes.is_empty() {
                    None
                } else {
                    Some(SelectedObject::Nodes(nodes))
                }
            }
            Selection::Path(id) => self.path_line(*id).map(SelectedObject::Path),
        }
    }

    // --- Invariant maintenance -------------------------------------------

    /// Recomputes `distance` for every edge incident to the given business
    /// number. Edges whose other endpoint is missing are left untouched.
    fn refresh_incident_distances(&mut self, number: i64) {
        let positions: Vec<(i64, f64, f64)> = self
            .nodes
            .iter()
            .filter_map(|n| n.number().map(|num| (num, n.data.x, n.data.y)))
            .collect();
        let lookup = |num: i64| positions.iter().find(|(n, _, _)| *n == num);

        for path in &mut self.path_lines {
            if path.data.start_node != number && path.data.end_node != number {
                continue;
            }
            if let (Some((_, sx, sy)), Some((_, ex, ey))) =
                (lookup(path.data.start_node), lookup(path.data.end_node))
            {
                path.data.distance =
                    crate::geometry::calculate_distance(*sx, *sy, *ex, *ey);
            }
        }
    }

    /// Drops every edge referencing the given business number and clears a
    /// path selection that pointed at one of them.
    fn remove_edges_of(&mut self, number: i64) {
        let before = self.path_lines.len();
        self.path_lines
            .retain(|p| p.data.start_node != number && p.data.end_node != number);
        let removed = before - self.path_lines.len();
        if removed > 0 {
            tracing::debug!("cascade removed {removed} path(s) of node {number}");
            if let Some(sel) = self.selection.path_id() {
                if self.path_line(sel).is_none() {
                    self.selection = Selection::None;
                }
            }
        }
    }
}

impl Default for CanvasStore {
    fn default() -> Self {
        Self::new()
    }
}
