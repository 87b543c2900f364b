//! Shared constants for the map editor.
//!
//! Zoom bounds, grid pitches, default map dimensions and the wire-format
//! discriminators used by the persisted records.

/// Minimum viewport scale. Zooming out stops here.
pub const SCALE_MIN: f64 = 0.1;

/// Maximum viewport scale. Zooming in stops here.
pub const SCALE_MAX: f64 = 5.0;

/// Multiplier applied by the toolbar zoom-in/zoom-out buttons.
pub const ZOOM_STEP: f64 = 1.2;

/// Multiplier applied per mouse-wheel notch (finer than the buttons).
pub const WHEEL_ZOOM_STEP: f64 = 1.1;

/// Grid pitches the editor accepts, in canvas units.
pub const GRID_SIZES: [f64; 3] = [10.0, 20.0, 40.0];

/// Default grid pitch.
pub const DEFAULT_GRID_SIZE: f64 = 20.0;

/// Default snap threshold, in canvas units.
pub const DEFAULT_SNAP_THRESHOLD: f64 = 5.0;

/// Logical canvas extent in both dimensions.
pub const CANVAS_EXTENT: f64 = 100_000.0;

/// Default dimensions of a newly created main map.
pub const DEFAULT_MAIN_MAP_SIZE: (f64, f64) = (1600.0, 1200.0);

/// Default dimensions of a newly created sub map.
pub const DEFAULT_SUB_MAP_SIZE: (f64, f64) = (800.0, 600.0);

/// Pixels the pointer must travel before a press counts as a drag.
pub const DRAG_THRESHOLD: f64 = 5.0;

/// Canvas-unit offset applied to duplicated nodes.
pub const DUPLICATE_OFFSET: f64 = 20.0;

/// Fixed `type` discriminator identifying a path record on the wire.
pub const PATH_RECORD_TYPE: i32 = 11;

/// `lineType` code for a straight segment.
pub const LINE_TYPE_STRAIGHT: i32 = 0;

/// `lineType` code for a quadratic-curve segment.
pub const LINE_TYPE_CURVE: i32 = 1;

/// `laneDir` code for a one-way lane.
pub const LANE_DIR_ONE_WAY: i32 = 0;

/// `laneDir` code for a bidirectional lane.
pub const LANE_DIR_TWO_WAY: i32 = 1;

/// Envelope code signalling a successful backend response.
pub const API_CODE_OK: i32 = 200;

/// Default travel speed stamped on newly created nodes.
pub const DEFAULT_NODE_SPEED: f64 = 1000.0;
