//! Data model: persisted business records and enriched runtime records.
//!
//! Business records (`NodeData`, `PathData`, `MapItem`) carry exactly the
//! fields the backend stores. Runtime records (`CanvasNode`,
//! `CanvasPathLine`) wrap a business record together with an opaque id and
//! the graphic attributes the renderer needs; they are never persisted.

mod map;
mod node;
mod path_line;

pub use map::{MapItem, MapKind};
pub use node::{CanvasNode, NodeData, NodeGraphics, NodeNumber};
pub use path_line::{CanvasPathLine, PathData, PathGraphics, PathParams};
