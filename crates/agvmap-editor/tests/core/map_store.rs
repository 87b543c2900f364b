use uuid::Uuid;

use agvmap_editor::{CanvasStore, MapKind, MapStore, NodeInit};

fn stores() -> (MapStore, CanvasStore) {
    (MapStore::new(), CanvasStore::new())
}

#[test]
fn test_initial_state() {
    let store = MapStore::new();
    assert!(store.maps().is_empty());
    assert!(store.active_map_id().is_none());
    assert!(store.active_map().is_none());
}

#[test]
fn test_add_main_map() {
    let (mut maps, mut canvas) = stores();
    let map = maps.add_main_map(&mut canvas, Some("Plant A"));
    assert_eq!(map.name, "Plant A");
    assert_eq!(map.kind, MapKind::Main);
    assert_eq!(map.map_width, 1600.0);
    assert_eq!(map.map_length, 1200.0);
    assert!(map.node_list.is_empty());
    assert_eq!(maps.maps().len(), 1);
}

#[test]
fn test_first_map_auto_activates() {
    let (mut maps, mut canvas) = stores();
    let first = maps.add_main_map(&mut canvas, None);
    assert_eq!(maps.active_map_id(), Some(first.id));

    let second = maps.add_main_map(&mut canvas, None);
    assert_ne!(maps.active_map_id(), Some(second.id));
}

#[test]
fn test_auto_naming_increments() {
    let (mut maps, mut canvas) = stores();
    let a = maps.add_main_map(&mut canvas, None);
    let b = maps.add_main_map(&mut canvas, None);
    assert_eq!(a.name, "New Map 1");
    assert_eq!(b.name, "New Map 2");
}

#[test]
fn test_add_sub_map() {
    let (mut maps, mut canvas) = stores();
    let parent = maps.add_main_map(&mut canvas, Some("Main"));
    let sub = maps.add_sub_map(parent.id, Some("Zone 1")).unwrap();

    assert_eq!(sub.kind, MapKind::Sub);
    assert_eq!(sub.map_width, 800.0);
    assert_eq!(sub.map_length, 600.0);
    assert_eq!(sub.main_map_name.as_deref(), Some("Main"));

    let parent = maps.find_map_by_id(parent.id).unwrap();
    assert_eq!(parent.sub_maps.len(), 1);
    assert_eq!(parent.sub_maps[0].id, sub.id);

    // Parent is expanded, sub map is not activated
    assert!(maps.is_expanded(parent.id));
    assert_ne!(maps.active_map_id(), Some(sub.id));
}

#[test]
fn test_add_sub_map_unknown_parent() {
    let (mut maps, _canvas) = stores();
    assert!(maps.add_sub_map(Uuid::new_v4(), Some("orphan")).is_none());
}

#[test]
fn test_find_map_by_id_two_levels() {
    let (mut maps, mut canvas) = stores();
    let main = maps.add_main_map(&mut canvas, None);
    let sub = maps.add_sub_map(main.id, None).unwrap();

    assert_eq!(maps.find_map_by_id(main.id).unwrap().id, main.id);
    assert_eq!(maps.find_map_by_id(sub.id).unwrap().id, sub.id);
    assert!(maps.find_map_by_id(Uuid::new_v4()).is_none());
}

#[test]
fn test_find_parent_map() {
    let (mut maps, mut canvas) = stores();
    let main = maps.add_main_map(&mut canvas, None);
    let sub = maps.add_sub_map(main.id, None).unwrap();

    assert_eq!(maps.find_parent_map(sub.id).unwrap().id, main.id);
    assert!(maps.find_parent_map(main.id).is_none());
    assert!(maps.find_parent_map(Uuid::new_v4()).is_none());
}

#[test]
fn test_rename_main_map_propagates_label() {
    let (mut maps, mut canvas) = stores();
    let main = maps.add_main_map(&mut canvas, Some("Old"));
    let sub = maps.add_sub_map(main.id, Some("Zone")).unwrap();

    maps.rename_map(main.id, "New");
    assert_eq!(maps.find_map_by_id(main.id).unwrap().name, "New");
    let sub = maps.find_map_by_id(sub.id).unwrap();
    // The sub map keeps its own name; only its parent label changes
    assert_eq!(sub.name, "Zone");
    assert_eq!(sub.main_map_name.as_deref(), Some("New"));
}

#[test]
fn test_rename_unknown_id_is_noop() {
    let (mut maps, mut canvas) = stores();
    maps.add_main_map(&mut canvas, Some("Keep"));
    maps.rename_map(Uuid::new_v4(), "Other");
    assert_eq!(maps.maps()[0].name, "Keep");
}

#[test]
fn test_switch_map_saves_and_restores() {
    let (mut maps, mut canvas) = stores();
    let a = maps.add_main_map(&mut canvas, Some("A"));
    let b = maps.add_main_map(&mut canvas, Some("B"));

    // One node on map A
    canvas.add_node_from_data(NodeInit::new(1, 10.0, 20.0));
    assert_eq!(canvas.nodes().len(), 1);

    maps.switch_map(&mut canvas, b.id);
    assert_eq!(maps.active_map_id(), Some(b.id));
    assert!(canvas.nodes().is_empty());

    maps.switch_map(&mut canvas, a.id);
    assert_eq!(canvas.nodes().len(), 1);
    assert_eq!(canvas.nodes()[0].data.x, 10.0);
    assert_eq!(canvas.nodes()[0].data.y, 20.0);
}

#[test]
fn test_switch_to_active_map_is_noop() {
    let (mut maps, mut canvas) = stores();
    let a = maps.add_main_map(&mut canvas, None);
    canvas.add_node_from_data(NodeInit::new(1, 0.0, 0.0));

    // Switching to the already-active map must not reload (and wipe) the
    // unsaved canvas
    maps.switch_map(&mut canvas, a.id);
    assert_eq!(canvas.nodes().len(), 1);
}

#[test]
fn test_switch_to_unknown_map_is_noop() {
    let (mut maps, mut canvas) = stores();
    let a = maps.add_main_map(&mut canvas, None);
    canvas.add_node_from_data(NodeInit::new(1, 0.0, 0.0));

    maps.switch_map(&mut canvas, Uuid::new_v4());
    assert_eq!(maps.active_map_id(), Some(a.id));
    assert_eq!(canvas.nodes().len(), 1);
}

#[test]
fn test_switch_clears_selection() {
    let (mut maps, mut canvas) = stores();
    maps.add_main_map(&mut canvas, None);
    let b = maps.add_main_map(&mut canvas, None);

    let node = canvas.add_node_from_data(NodeInit::new(1, 0.0, 0.0));
    canvas.select_node(node.id, false);

    maps.switch_map(&mut canvas, b.id);
    assert!(canvas.selection().is_empty());
}

#[test]
fn test_delete_sub_map() {
    let (mut maps, mut canvas) = stores();
    let main = maps.add_main_map(&mut canvas, None);
    let sub = maps.add_sub_map(main.id, None).unwrap();

    maps.delete_map(&mut canvas, sub.id);
    assert!(maps.find_map_by_id(sub.id).is_none());
    assert_eq!(maps.find_map_by_id(main.id).unwrap().sub_maps.len(), 0);
}

#[test]
fn test_delete_active_map_activates_first_remaining() {
    let (mut maps, mut canvas) = stores();
    let a = maps.add_main_map(&mut canvas, Some("A"));
    let b = maps.add_main_map(&mut canvas, Some("B"));

    canvas.add_node_from_data(NodeInit::new(1, 0.0, 0.0));
    maps.delete_map(&mut canvas, a.id);

    assert_eq!(maps.active_map_id(), Some(b.id));
    // Map B was empty, so the canvas now is too
    assert!(canvas.nodes().is_empty());
}

#[test]
fn test_delete_last_map_clears_canvas() {
    let (mut maps, mut canvas) = stores();
    let a = maps.add_main_map(&mut canvas, None);
    canvas.add_node_from_data(NodeInit::new(1, 0.0, 0.0));
    canvas.add_path_line(crate::helpers::canvas_path_line(1, 1));

    maps.delete_map(&mut canvas, a.id);
    assert!(maps.maps().is_empty());
    assert!(maps.active_map_id().is_none());
    assert!(canvas.nodes().is_empty());
    assert!(canvas.path_lines().is_empty());
}

#[test]
fn test_delete_inactive_map_keeps_canvas() {
    let (mut maps, mut canvas) = stores();
    let a = maps.add_main_map(&mut canvas, None);
    let b = maps.add_main_map(&mut canvas, None);
    canvas.add_node_from_data(NodeInit::new(1, 0.0, 0.0));

    maps.delete_map(&mut canvas, b.id);
    assert_eq!(maps.active_map_id(), Some(a.id));
    assert_eq!(canvas.nodes().len(), 1);
}

#[test]
fn test_toggle_expand() {
    let (mut maps, mut canvas) = stores();
    let main = maps.add_main_map(&mut canvas, None);

    assert!(!maps.is_expanded(main.id));
    maps.toggle_expand(main.id);
    assert!(maps.is_expanded(main.id));
    maps.toggle_expand(main.id);
    assert!(!maps.is_expanded(main.id));
}

#[test]
fn test_init_default_map() {
    let (mut maps, mut canvas) = stores();
    maps.init_default_map(&mut canvas);
    assert_eq!(maps.maps().len(), 1);
    assert_eq!(maps.maps()[0].name, "Default Map");

    // Idempotent when maps already exist
    maps.init_default_map(&mut canvas);
    assert_eq!(maps.maps().len(), 1);
}

#[test]
fn test_active_map_lookup() {
    let (mut maps, mut canvas) = stores();
    assert!(maps.active_map().is_none());

    let main = maps.add_main_map(&mut canvas, None);
    assert_eq!(maps.active_map().unwrap().id, main.id);

    let sub = maps.add_sub_map(main.id, None).unwrap();
    maps.switch_map(&mut canvas, sub.id);
    assert_eq!(maps.active_map().unwrap().id, sub.id);
}
