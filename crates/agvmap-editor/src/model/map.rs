//! Map registry records.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{NodeData, PathData};

/// Position of a map in the two-level hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MapKind {
    Main,
    Sub,
}

/// A named map document.
///
/// `node_list`/`line_list` are business-only snapshots; the canvas store
/// round-trips them through the import/export transforms on every map
/// switch. `main_map_name` on a sub map is a display label, not an
/// ownership pointer — ownership is the `sub_maps` list of the main map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapItem {
    pub id: Uuid,
    pub name: String,
    pub kind: MapKind,
    pub map_width: f64,
    pub map_length: f64,
    pub node_list: Vec<NodeData>,
    pub line_list: Vec<PathData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub main_map_name: Option<String>,
    /// Owned sub maps; populated only on main maps.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sub_maps: Vec<MapItem>,
}

impl MapItem {
    /// Creates an empty map of the given kind and dimensions.
    pub fn new(name: impl Into<String>, kind: MapKind, width: f64, length: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            kind,
            map_width: width,
            map_length: length,
            node_list: Vec::new(),
            line_list: Vec::new(),
            main_map_name: None,
            sub_maps: Vec::new(),
        }
    }

    /// Whether this is a main (top-level) map.
    pub fn is_main(&self) -> bool {
        self.kind == MapKind::Main
    }
}
