//! Map registry: a two-level hierarchy of named map documents.
//!
//! The registry owns the serialized (business-only) snapshots; the canvas
//! store holds the live data of whichever map is active. The canvas store
//! is threaded in explicitly wherever an operation moves data between the
//! two — there is no global store access.

use std::collections::HashSet;

use uuid::Uuid;

use agvmap_core::constants::{DEFAULT_MAIN_MAP_SIZE, DEFAULT_SUB_MAP_SIZE};

use crate::canvas::CanvasStore;
use crate::model::{MapItem, MapKind};

/// Registry of main maps and their owned sub maps.
#[derive(Debug, Clone, Default)]
pub struct MapStore {
    maps: Vec<MapItem>,
    active_map_id: Option<Uuid>,
    /// Maps whose sub-map list is expanded in the sidebar tree.
    expanded: HashSet<Uuid>,
}

impl MapStore {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Top-level maps, in creation order.
    pub fn maps(&self) -> &[MapItem] {
        &self.maps
    }

    /// Id of the active map, if any.
    pub fn active_map_id(&self) -> Option<Uuid> {
        self.active_map_id
    }

    /// The active map, if any.
    pub fn active_map(&self) -> Option<&MapItem> {
        self.active_map_id.and_then(|id| self.find_map_by_id(id))
    }

    /// Searches top-level maps and one nested level of sub maps — the
    /// hierarchy is at most two levels deep.
    pub fn find_map_by_id(&self, id: Uuid) -> Option<&MapItem> {
        for map in &self.maps {
            if map.id == id {
                return Some(map);
            }
            if let Some(sub) = map.sub_maps.iter().find(|s| s.id == id) {
                return Some(sub);
            }
        }
        None
    }

    /// Main map owning the given sub-map id.
    pub fn find_parent_map(&self, sub_map_id: Uuid) -> Option<&MapItem> {
        self.maps
            .iter()
            .find(|m| m.sub_maps.iter().any(|s| s.id == sub_map_id))
    }

    /// Creates a main map with the default dimensions. Unnamed maps get
    /// "New Map N" with N the running top-level count. The very first map
    /// becomes active and its (empty) data is loaded into the canvas.
    pub fn add_main_map(&mut self, canvas: &mut CanvasStore, name: Option<&str>) -> MapItem {
        let name = match name {
            Some(n) => n.to_string(),
            None => format!("New Map {}", self.maps.len() + 1),
        };
        let (width, length) = DEFAULT_MAIN_MAP_SIZE;
        let map = MapItem::new(name, MapKind::Main, width, length);
        tracing::debug!(map = %map.name, "added main map");
        self.maps.push(map.clone());

        if self.maps.len() == 1 {
            self.active_map_id = Some(map.id);
            Self::load_map_to_canvas(&map, canvas);
        }

        map
    }

    /// Creates a sub map under the given main map. Returns `None` without
    /// side effects when the parent does not resolve. The parent is
    /// expanded in the sidebar; the new sub map is never auto-activated.
    pub fn add_sub_map(&mut self, parent_id: Uuid, name: Option<&str>) -> Option<MapItem> {
        let parent = self.maps.iter_mut().find(|m| m.id == parent_id)?;

        let name = match name {
            Some(n) => n.to_string(),
            None => format!("Sub Map {}", parent.sub_maps.len() + 1),
        };
        let (width, length) = DEFAULT_SUB_MAP_SIZE;
        let mut sub = MapItem::new(name, MapKind::Sub, width, length);
        sub.main_map_name = Some(parent.name.clone());
        parent.sub_maps.push(sub.clone());

        self.expanded.insert(parent_id);
        Some(sub)
    }

    /// Renames a map. Renaming a main map refreshes the parent-name label
    /// recorded on each of its sub maps; the sub maps themselves keep their
    /// names. Unknown ids are a silent no-op.
    pub fn rename_map(&mut self, id: Uuid, name: &str) {
        for map in &mut self.maps {
            if map.id == id {
                map.name = name.to_string();
                if map.kind == MapKind::Main {
                    for sub in &mut map.sub_maps {
                        sub.main_map_name = Some(name.to_string());
                    }
                }
                return;
            }
            if let Some(sub) = map.sub_maps.iter_mut().find(|s| s.id == id) {
                sub.name = name.to_string();
                return;
            }
        }
    }

    /// Switches the active map: saves the canvas into the currently active
    /// map, then loads the target. A no-op when the target is already
    /// active or does not resolve. The save-then-load pair runs inside this
    /// single call, so callers never observe a state where neither map
    /// holds the live data.
    pub fn switch_map(&mut self, canvas: &mut CanvasStore, target_id: Uuid) {
        if Some(target_id) == self.active_map_id {
            return;
        }
        // The target cannot be the active map here, so its snapshot is not
        // touched by the save below.
        let Some(target) = self.find_map_by_id(target_id).cloned() else {
            return;
        };

        self.save_current_map_data(canvas);

        self.active_map_id = Some(target_id);
        tracing::debug!(map = %target.name, "switched active map");
        Self::load_map_to_canvas(&target, canvas);
    }

    /// Serializes the canvas into the active map's snapshot lists. A no-op
    /// when nothing is active.
    pub fn save_current_map_data(&mut self, canvas: &CanvasStore) {
        let Some(active_id) = self.active_map_id else {
            return;
        };
        let nodes = canvas.get_export_data();
        let lines = canvas.get_export_paths();
        if let Some(map) = self.find_map_by_id_mut(active_id) {
            map.node_list = nodes;
            map.line_list = lines;
        }
    }

    /// Replaces the canvas contents with a map's snapshot, clearing the
    /// selection.
    pub fn load_map_to_canvas(map: &MapItem, canvas: &mut CanvasStore) {
        canvas.clear_selection();
        canvas.load_nodes(map.node_list.clone());
        canvas.load_path_lines(map.line_list.clone());
    }

    /// Deletes a map. Sub maps are removed from their parent; main maps are
    /// removed with every owned sub map. When the deleted map was active,
    /// the first remaining top-level map is activated (and loaded), or the
    /// canvas is cleared when none remain. Unknown ids are a silent no-op.
    pub fn delete_map(&mut self, canvas: &mut CanvasStore, id: Uuid) {
        if self.find_parent_map(id).is_some() {
            for map in &mut self.maps {
                map.sub_maps.retain(|s| s.id != id);
            }
        } else {
            self.maps.retain(|m| m.id != id);
        }

        if self.active_map_id == Some(id) {
            if let Some(first) = self.maps.first() {
                let first = first.clone();
                self.active_map_id = Some(first.id);
                Self::load_map_to_canvas(&first, canvas);
            } else {
                self.active_map_id = None;
                canvas.load_nodes(Vec::new());
                canvas.load_path_lines(Vec::new());
            }
        }
    }

    /// Expands or collapses a map's sub-map list in the sidebar.
    pub fn toggle_expand(&mut self, id: Uuid) {
        if !self.expanded.remove(&id) {
            self.expanded.insert(id);
        }
    }

    /// Whether a map's sub-map list is expanded.
    pub fn is_expanded(&self, id: Uuid) -> bool {
        self.expanded.contains(&id)
    }

    /// Creates one default main map, but only when the registry is empty.
    pub fn init_default_map(&mut self, canvas: &mut CanvasStore) {
        if self.maps.is_empty() {
            self.add_main_map(canvas, Some("Default Map"));
        }
    }

    fn find_map_by_id_mut(&mut self, id: Uuid) -> Option<&mut MapItem> {
        for map in &mut self.maps {
            if map.id == id {
                return Some(map);
            }
            if let Some(sub) = map.sub_maps.iter_mut().find(|s| s.id == id) {
                return Some(sub);
            }
        }
        None
    }
}
