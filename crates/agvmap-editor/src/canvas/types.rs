//! Canvas type definitions: selection, tools, grid, and the freehand
//! polyline kept from the older drawing mode.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use agvmap_core::constants::{DEFAULT_GRID_SIZE, DEFAULT_SNAP_THRESHOLD};

use crate::model::{CanvasNode, CanvasPathLine};

/// Active editing tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ToolType {
    #[default]
    Select,
    Path,
    Area,
    Pan,
}

/// Grid configuration. Only drives the snap function and the grid overlay;
/// it never changes stored geometry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridConfig {
    pub show: bool,
    /// Grid pitch in canvas units; one of the allowed sizes.
    pub size: f64,
    pub snap_to_grid: bool,
    pub snap_threshold: f64,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            show: true,
            size: DEFAULT_GRID_SIZE,
            snap_to_grid: false,
            snap_threshold: DEFAULT_SNAP_THRESHOLD,
        }
    }
}

/// Ruler overlay configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RulerConfig {
    pub show: bool,
    /// Ruler band width/height in pixels.
    pub size: f64,
    /// Tick interval in canvas units.
    pub interval: f64,
}

impl Default for RulerConfig {
    fn default() -> Self {
        Self {
            show: false,
            size: 30.0,
            interval: 100.0,
        }
    }
}

/// Current selection. Node and path selection are mutually exclusive by
/// construction; the node list keeps insertion order (= selection order).
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Selection {
    #[default]
    None,
    Nodes(Vec<Uuid>),
    Path(Uuid),
}

impl Selection {
    /// Selected node ids, in selection order.
    pub fn node_ids(&self) -> &[Uuid] {
        match self {
            Selection::Nodes(ids) => ids,
            _ => &[],
        }
    }

    /// Selected path id, if a path is selected.
    pub fn path_id(&self) -> Option<Uuid> {
        match self {
            Selection::Path(id) => Some(*id),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Selection::None)
    }
}

/// Resolved view of the current selection.
#[derive(Debug, Clone, PartialEq)]
pub enum SelectedObject<'a> {
    Nodes(Vec<&'a CanvasNode>),
    Path(&'a CanvasPathLine),
}

/// Stroke style of a freehand polyline.
#[derive(Debug, Clone, PartialEq)]
pub struct PathStyle {
    pub stroke: String,
    pub stroke_width: f64,
    pub dash: Option<Vec<f64>>,
    pub arrow: bool,
}

impl Default for PathStyle {
    fn default() -> Self {
        Self {
            stroke: "#0066cc".to_string(),
            stroke_width: 2.0,
            dash: None,
            arrow: true,
        }
    }
}

/// Freehand multi-point polyline from the older drawing mode.
///
/// Distinct from the two-endpoint [`CanvasPathLine`] model; kept for
/// compatibility with maps drawn before typed path edges existed.
#[derive(Debug, Clone, PartialEq)]
pub struct FreehandPath {
    pub id: Uuid,
    /// Flat coordinate buffer: `[x1, y1, x2, y2, ...]`, Cartesian.
    pub points: Vec<f64>,
    pub style: PathStyle,
}

/// Freehand drawing state machine. `finish` and `cancel` both return to
/// `Idle`; there is no suspended state.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum PathDraft {
    #[default]
    Idle,
    /// Drawing in progress, with the flat point buffer collected so far.
    Drawing(Vec<f64>),
}

impl PathDraft {
    pub fn is_drawing(&self) -> bool {
        matches!(self, PathDraft::Drawing(_))
    }

    /// Points collected so far; empty when idle.
    pub fn points(&self) -> &[f64] {
        match self {
            PathDraft::Drawing(points) => points,
            PathDraft::Idle => &[],
        }
    }
}
