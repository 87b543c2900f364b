use agvmap_editor::{node_color, node_graphic_defaults, node_icon, node_label, path_graphic_defaults};

const KNOWN_TYPES: [i32; 8] = [1, 2, 3, 4, 5, 6, 7, 12];

#[test]
fn test_known_node_types_have_specific_defaults() {
    assert_eq!(node_graphic_defaults(3).width, 60.0);
    assert_eq!(node_graphic_defaults(3).label, "charging station");
    assert_eq!(node_graphic_defaults(5).width, 40.0);
    assert_eq!(node_graphic_defaults(7).width, 30.0);
    assert_eq!(node_graphic_defaults(7).label, "waypoint");
    for type_code in KNOWN_TYPES {
        let g = node_graphic_defaults(type_code);
        assert!(g.width > 0.0);
        assert!(g.height > 0.0);
        assert_eq!(g.rotation, 0.0);
        assert!(!g.label.is_empty());
    }
}

#[test]
fn test_unknown_node_type_falls_back() {
    let g = node_graphic_defaults(999);
    assert_eq!(g.width, 50.0);
    assert_eq!(g.height, 50.0);
    assert_eq!(g.rotation, 0.0);
    assert_eq!(g.label, "unknown node");
}

#[test]
fn test_catalog_only_type_gets_generic_size_with_catalog_label() {
    // The elevator has no size-table entry but is in the element catalog
    let g = node_graphic_defaults(8);
    assert_eq!(g.width, 50.0);
    assert_eq!(g.label, "elevator");
}

#[test]
fn test_node_label_lookup_chain() {
    assert_eq!(node_label(3), "charging station");
    assert_eq!(node_label(8), "elevator");
    assert_eq!(node_label(999), "unknown node");
}

#[test]
fn test_node_colors_unique_and_fallback() {
    let mut fills: Vec<&str> = KNOWN_TYPES.iter().map(|t| node_color(*t).fill).collect();
    fills.sort();
    fills.dedup();
    assert_eq!(fills.len(), KNOWN_TYPES.len());

    // Unknown types share the type-1 blue
    assert_eq!(node_color(0), node_color(1));
    assert_eq!(node_color(999).fill, "#3B82F6");

    for type_code in KNOWN_TYPES {
        let c = node_color(type_code);
        assert_ne!(c.fill, c.stroke);
    }
}

#[test]
fn test_node_icons() {
    for type_code in KNOWN_TYPES {
        assert_ne!(node_icon(type_code), '?');
    }
    assert_eq!(node_icon(0), '?');
    assert_eq!(node_icon(11), '?');
}

#[test]
fn test_path_defaults_straight_one_way() {
    let g = path_graphic_defaults(0, 0);
    assert_eq!(g.stroke_color, "#10b981");
    assert_eq!(g.stroke_width, 2.0);
    assert!(g.show_arrow);
    assert!(g.dash.is_none());
}

#[test]
fn test_path_defaults_curved_two_way() {
    let g = path_graphic_defaults(1, 1);
    assert_eq!(g.stroke_color, "#3b82f6");
    assert!(!g.show_arrow);
    assert_eq!(g.dash, Some(vec![5.0, 5.0]));
}

#[test]
fn test_path_defaults_curved_one_way() {
    let g = path_graphic_defaults(1, 0);
    assert_eq!(g.stroke_color, "#10b981");
    assert!(g.show_arrow);
    assert_eq!(g.dash, Some(vec![5.0, 5.0]));
}

#[test]
fn test_path_defaults_unknown_codes_keep_base() {
    let g = path_graphic_defaults(9, 9);
    assert_eq!(g.stroke_color, "#3b82f6");
    assert_eq!(g.stroke_width, 2.0);
    assert!(!g.show_arrow);
    assert!(g.dash.is_none());
}
