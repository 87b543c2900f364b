//! # AGVMap Editor
//!
//! Canvas state and coordinate/geometry engine for an interactive 2D
//! facility map editor used by AGV fleets. Users place typed nodes on an
//! infinite canvas, connect them with directional path segments (straight
//! or quadratic curve), and exchange the resulting graph with a backend as
//! business-only records.
//!
//! ## Core Components
//!
//! - **Geometry**: screen/canvas transforms (Y-up world over Y-down
//!   screen), segment midpoints and tangents, distance, grid snapping
//! - **Transform layer**: lossless conversion between persisted business
//!   records and enriched runtime records
//! - **Graphic defaults**: type-code registries for node and path styling
//! - **Canvas store**: the live graph — nodes, path edges, selection,
//!   viewport, grid, and the freehand drawing state machine
//! - **Map store**: a two-level registry of named maps, each owning a
//!   business-only snapshot of the canvas
//! - **Interaction controller**: pointer/wheel/keyboard input mapped onto
//!   store mutations
//!
//! ## Architecture
//!
//! ```text
//! MapStore (named map documents)
//!   └── CanvasStore (live graph of the active map)
//!         ├── Viewport (pan/zoom transform)
//!         ├── Selection (nodes xor path)
//!         └── PathDraft (freehand drawing state machine)
//!
//! InteractionController (input -> store mutations)
//! MapService (backend persistence, implemented by the host)
//! ```
//!
//! The core is single-threaded and event-driven; every operation is
//! synchronous and atomic with respect to the others. Rendering, HTTP, and
//! widgets live in the host application.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use agvmap_editor::{CanvasStore, NodeInit};
//!
//! let mut canvas = CanvasStore::new();
//! let node = canvas.add_node_from_data(NodeInit::new(3, 100.0, 200.0));
//! assert_eq!(node.graphics.label, "charging station");
//! ```

pub mod api;
pub mod canvas;
pub mod geometry;
pub mod interaction;
pub mod map_store;
pub mod model;
pub mod node_graphics;
pub mod node_transform;
pub mod path_graphics;
pub mod path_transform;
pub mod serialization;
pub mod settings;
pub mod validation;
pub mod viewport;

pub use api::{ApiResponse, MapDetail, MapService, MapSummary};
pub use canvas::{
    CanvasStore, FreehandPath, GridConfig, NodeUpdate, PathDraft, PathLineUpdate, PathStyle,
    RulerConfig, SelectedObject, Selection, ToolType,
};
pub use geometry::{calc_arrow_angle, calc_mid_point, calculate_distance, snap_to_grid, Point};
pub use interaction::{
    HitTarget, InteractionController, Key, KeyInput, MouseButton, MoveInput, PointerInput,
    WheelInput,
};
pub use map_store::MapStore;
pub use model::{
    CanvasNode, CanvasPathLine, MapItem, MapKind, NodeData, NodeGraphics, NodeNumber, PathData,
    PathGraphics, PathParams,
};
pub use node_graphics::{node_color, node_graphic_defaults, node_icon, node_label, NodeColor};
pub use node_transform::{
    create_node, export_node, export_nodes, generate_unique_node_number, import_node,
    import_nodes, NodeInit,
};
pub use path_graphics::path_graphic_defaults;
pub use path_transform::{create_path, export_path, export_paths, import_path, import_paths};
pub use serialization::{DocumentMetadata, MapDocument};
pub use settings::{EditorSettings, SettingsError};
pub use validation::{validate_path_form, PathForm, PathFormErrors};
pub use viewport::{Viewport, ViewportPatch};
