use agvmap_editor::{
    CanvasStore, HitTarget, InteractionController, Key, KeyInput, MouseButton, MoveInput,
    NodeInit, PointerInput, Point, WheelInput,
};

fn pointer(x: f64, y: f64, ctrl: bool, target: HitTarget) -> PointerInput {
    PointerInput {
        position: Some(Point::new(x, y)),
        button: MouseButton::Left,
        ctrl,
        shift: false,
        target,
    }
}

fn key(key: Key, ctrl: bool) -> KeyInput {
    KeyInput {
        key,
        ctrl,
        from_text_input: false,
    }
}

#[test]
fn test_wheel_zooms_in_and_out() {
    let mut canvas = CanvasStore::new();
    let mut controller = InteractionController::new();

    controller.handle_wheel(
        &mut canvas,
        &WheelInput {
            position: Some(Point::new(100.0, 100.0)),
            delta_y: -120.0,
        },
    );
    assert!((canvas.viewport().scale - 1.1).abs() < 1e-12);

    controller.handle_wheel(
        &mut canvas,
        &WheelInput {
            position: Some(Point::new(100.0, 100.0)),
            delta_y: 120.0,
        },
    );
    assert!((canvas.viewport().scale - 1.0).abs() < 1e-12);
}

#[test]
fn test_wheel_keeps_pointer_position_fixed() {
    let mut canvas = CanvasStore::new();
    let mut controller = InteractionController::new();
    let pointer_pos = Point::new(320.0, 240.0);

    let before = canvas
        .viewport()
        .screen_to_canvas(pointer_pos.x, pointer_pos.y);
    controller.handle_wheel(
        &mut canvas,
        &WheelInput {
            position: Some(pointer_pos),
            delta_y: -1.0,
        },
    );
    let after = canvas
        .viewport()
        .screen_to_canvas(pointer_pos.x, pointer_pos.y);

    assert!((before.x - after.x).abs() < 1e-9);
    assert!((before.y - after.y).abs() < 1e-9);
}

#[test]
fn test_wheel_respects_scale_bounds() {
    let mut canvas = CanvasStore::new();
    let mut controller = InteractionController::new();

    for _ in 0..100 {
        controller.handle_wheel(
            &mut canvas,
            &WheelInput {
                position: Some(Point::new(0.0, 0.0)),
                delta_y: -1.0,
            },
        );
    }
    assert!(canvas.viewport().scale <= 5.0);

    for _ in 0..200 {
        controller.handle_wheel(
            &mut canvas,
            &WheelInput {
                position: Some(Point::new(0.0, 0.0)),
                delta_y: 1.0,
            },
        );
    }
    assert!(canvas.viewport().scale >= 0.1);
}

#[test]
fn test_wheel_without_position_is_noop() {
    let mut canvas = CanvasStore::new();
    let mut controller = InteractionController::new();
    controller.handle_wheel(
        &mut canvas,
        &WheelInput {
            position: None,
            delta_y: -1.0,
        },
    );
    assert_eq!(canvas.viewport().scale, 1.0);
}

#[test]
fn test_ctrl_drag_pans_after_threshold() {
    let mut canvas = CanvasStore::new();
    let mut controller = InteractionController::new();

    controller.handle_mouse_down(&pointer(100.0, 100.0, true, HitTarget::Background));
    assert!(controller.is_panning());
    assert!(!controller.has_moved());

    // Below the 5-px threshold: no pan yet
    controller.handle_mouse_move(
        &mut canvas,
        &MoveInput {
            position: Some(Point::new(103.0, 100.0)),
        },
    );
    assert!(!controller.has_moved());
    assert_eq!(canvas.viewport().x, 0.0);

    // Past the threshold: the viewport follows the pointer
    controller.handle_mouse_move(
        &mut canvas,
        &MoveInput {
            position: Some(Point::new(120.0, 110.0)),
        },
    );
    assert!(controller.has_moved());
    assert_eq!(canvas.viewport().x, 17.0);
    assert_eq!(canvas.viewport().y, 10.0);

    controller.handle_mouse_up();
    assert!(!controller.is_panning());
    assert!(!controller.has_moved());
}

#[test]
fn test_press_without_ctrl_does_not_pan() {
    let mut canvas = CanvasStore::new();
    let mut controller = InteractionController::new();

    controller.handle_mouse_down(&pointer(100.0, 100.0, false, HitTarget::Background));
    assert!(!controller.is_panning());

    controller.handle_mouse_move(
        &mut canvas,
        &MoveInput {
            position: Some(Point::new(200.0, 200.0)),
        },
    );
    assert_eq!(canvas.viewport().x, 0.0);
}

#[test]
fn test_mouse_move_tracks_canvas_position() {
    let mut canvas = CanvasStore::new();
    let mut controller = InteractionController::new();

    controller.handle_mouse_move(
        &mut canvas,
        &MoveInput {
            position: Some(Point::new(50.0, 80.0)),
        },
    );
    // Default viewport: canvas x = screen x, canvas y = -screen y
    assert_eq!(controller.mouse_position(), Point::new(50.0, -80.0));
}

#[test]
fn test_background_click_clears_selection() {
    let mut canvas = CanvasStore::new();
    let mut controller = InteractionController::new();
    let node = canvas.add_node_from_data(NodeInit::new(1, 0.0, 0.0));
    canvas.select_node(node.id, false);

    controller.handle_click(&mut canvas, &pointer(0.0, 0.0, false, HitTarget::Background));
    assert!(canvas.selection().is_empty());
}

#[test]
fn test_node_click_selects_and_ctrl_click_toggles() {
    let mut canvas = CanvasStore::new();
    let mut controller = InteractionController::new();
    let a = canvas.add_node_from_data(NodeInit::new(1, 0.0, 0.0));
    let b = canvas.add_node_from_data(NodeInit::new(1, 10.0, 0.0));

    controller.handle_click(&mut canvas, &pointer(0.0, 0.0, false, HitTarget::Node(a.id)));
    assert_eq!(canvas.selection().node_ids(), &[a.id]);

    controller.handle_click(&mut canvas, &pointer(0.0, 0.0, true, HitTarget::Node(b.id)));
    assert_eq!(canvas.selection().node_ids(), &[a.id, b.id]);

    controller.handle_click(&mut canvas, &pointer(0.0, 0.0, true, HitTarget::Node(a.id)));
    assert_eq!(canvas.selection().node_ids(), &[b.id]);
}

#[test]
fn test_click_after_drag_is_swallowed() {
    let mut canvas = CanvasStore::new();
    let mut controller = InteractionController::new();
    let node = canvas.add_node_from_data(NodeInit::new(1, 0.0, 0.0));
    canvas.select_node(node.id, false);

    controller.handle_mouse_down(&pointer(0.0, 0.0, true, HitTarget::Background));
    controller.handle_mouse_move(
        &mut canvas,
        &MoveInput {
            position: Some(Point::new(50.0, 50.0)),
        },
    );
    // Click arrives before mouse-up; the selection must survive
    controller.handle_click(&mut canvas, &pointer(50.0, 50.0, true, HitTarget::Background));
    assert_eq!(canvas.selection().node_ids(), &[node.id]);
}

#[test]
fn test_delete_key_removes_selected_nodes() {
    let mut canvas = CanvasStore::new();
    let mut controller = InteractionController::new();
    let node = canvas.add_node_from_data(NodeInit::new(1, 0.0, 0.0));
    canvas.select_node(node.id, false);

    controller.handle_key_down(&mut canvas, &key(Key::Delete, false));
    assert!(canvas.nodes().is_empty());
}

#[test]
fn test_backspace_removes_selected_path() {
    let mut canvas = CanvasStore::new();
    let mut controller = InteractionController::new();
    canvas.add_path_line(crate::helpers::canvas_path_line(1, 2));
    let id = canvas.path_lines()[0].id;
    canvas.select_path(id);

    controller.handle_key_down(&mut canvas, &key(Key::Backspace, false));
    assert!(canvas.path_lines().is_empty());
}

#[test]
fn test_shortcuts_ignored_in_text_inputs() {
    let mut canvas = CanvasStore::new();
    let mut controller = InteractionController::new();
    let node = canvas.add_node_from_data(NodeInit::new(1, 0.0, 0.0));
    canvas.select_node(node.id, false);

    controller.handle_key_down(
        &mut canvas,
        &KeyInput {
            key: Key::Delete,
            ctrl: false,
            from_text_input: true,
        },
    );
    assert_eq!(canvas.nodes().len(), 1);
}

#[test]
fn test_ctrl_d_duplicates_selection() {
    let mut canvas = CanvasStore::new();
    let mut controller = InteractionController::new();
    let node = canvas.add_node_from_data(NodeInit {
        speed: Some(640.0),
        region_name: Some("zone-a".to_string()),
        ..NodeInit::new(3, 100.0, 200.0)
    });
    canvas.select_node(node.id, false);

    controller.handle_key_down(&mut canvas, &key(Key::Char('d'), true));

    assert_eq!(canvas.nodes().len(), 2);
    let copy = &canvas.nodes()[1];
    assert_eq!(copy.data.x, 120.0);
    assert_eq!(copy.data.y, 220.0);
    // Business fields carry over, the number does not
    assert_eq!(copy.data.speed, 640.0);
    assert_eq!(copy.data.region_name, "zone-a");
    assert_eq!(copy.number(), Some(2));
    assert_ne!(copy.id, node.id);
    // The copy replaces the selection
    assert_eq!(canvas.selection().node_ids(), &[copy.id]);
}

#[test]
fn test_plain_d_does_not_duplicate() {
    let mut canvas = CanvasStore::new();
    let mut controller = InteractionController::new();
    let node = canvas.add_node_from_data(NodeInit::new(1, 0.0, 0.0));
    canvas.select_node(node.id, false);

    controller.handle_key_down(&mut canvas, &key(Key::Char('d'), false));
    assert_eq!(canvas.nodes().len(), 1);
}

#[test]
fn test_arrow_keys_nudge_selection() {
    let mut canvas = CanvasStore::new();
    let mut controller = InteractionController::new();
    let node = canvas.add_node_from_data(NodeInit::new(1, 10.0, 10.0));
    canvas.select_node(node.id, false);

    controller.handle_key_down(&mut canvas, &key(Key::ArrowUp, false));
    assert_eq!(canvas.nodes()[0].data.y, 11.0);
    controller.handle_key_down(&mut canvas, &key(Key::ArrowLeft, false));
    assert_eq!(canvas.nodes()[0].data.x, 9.0);
}

#[test]
fn test_nudge_uses_grid_pitch_when_snapping() {
    let mut canvas = CanvasStore::new();
    let mut controller = InteractionController::new();
    canvas.set_snap_to_grid(true);
    let node = canvas.add_node_from_data(NodeInit::new(1, 20.0, 20.0));
    canvas.select_node(node.id, false);

    controller.handle_key_down(&mut canvas, &key(Key::ArrowRight, false));
    assert_eq!(canvas.nodes()[0].data.x, 40.0);
}

#[test]
fn test_nudge_updates_incident_distances() {
    let mut canvas = CanvasStore::new();
    let mut controller = InteractionController::new();
    canvas.add_node(crate::helpers::canvas_node(1, 0.0, 0.0));
    canvas.add_node(crate::helpers::canvas_node(2, 3.0, 4.0));
    let n1 = canvas.nodes()[0].id;
    canvas.add_path_line(crate::helpers::canvas_path_line(1, 2));
    canvas.select_node(n1, false);

    // Node 1 moves to (0, 1): distance becomes sqrt(9 + 9) = 4.2426...
    controller.handle_key_down(&mut canvas, &key(Key::ArrowUp, false));
    let expected = (9.0f64 + 9.0).sqrt();
    assert!((canvas.path_lines()[0].data.distance - expected).abs() < 1e-9);
}
