//! Node graphic defaults.
//!
//! Maps an element type code to the rendering defaults a freshly imported
//! or created node starts with, plus the accent colors and icon glyphs the
//! rendering layer uses. All lookups fall back to a documented default for
//! unknown codes.

use crate::model::NodeGraphics;

/// Element catalog: type code to display name.
///
/// Mirrors the palette element list. Covers a few codes (elevator, parking
/// area) that have no entry in the size table; those get the generic size
/// with the catalog label.
pub const ELEMENT_CATALOG: &[(i32, &str)] = &[
    (1, "workstation"),
    (2, "manual workstation"),
    (3, "charging station"),
    (4, "robot arm"),
    (5, "gate"),
    (6, "dock"),
    (7, "waypoint"),
    (8, "elevator"),
    (9, "parking area"),
    (12, "shelf"),
];

fn catalog_name(type_code: i32) -> Option<&'static str> {
    ELEMENT_CATALOG
        .iter()
        .find(|(code, _)| *code == type_code)
        .map(|(_, name)| *name)
}

fn sized_defaults(type_code: i32) -> Option<NodeGraphics> {
    let (width, height, label) = match type_code {
        1 => (50.0, 50.0, "workstation"),
        2 => (50.0, 50.0, "manual workstation"),
        3 => (60.0, 60.0, "charging station"),
        4 => (55.0, 55.0, "robot arm"),
        5 => (40.0, 40.0, "gate"),
        6 => (50.0, 50.0, "dock"),
        7 => (30.0, 30.0, "waypoint"),
        12 => (50.0, 50.0, "shelf"),
        _ => return None,
    };
    Some(NodeGraphics {
        width,
        height,
        rotation: 0.0,
        label: label.to_string(),
    })
}

/// Generic graphic defaults used when a type code is unknown.
pub fn fallback_graphics() -> NodeGraphics {
    NodeGraphics {
        width: 50.0,
        height: 50.0,
        rotation: 0.0,
        label: "unknown node".to_string(),
    }
}

/// Returns the graphic defaults for a node type code.
///
/// Lookup order: the size table, then the element catalog (generic size,
/// catalog label), then the generic fallback.
pub fn node_graphic_defaults(type_code: i32) -> NodeGraphics {
    if let Some(graphics) = sized_defaults(type_code) {
        return graphics;
    }
    if let Some(name) = catalog_name(type_code) {
        return NodeGraphics {
            label: name.to_string(),
            ..fallback_graphics()
        };
    }
    tracing::debug!("no graphic defaults for node type {type_code}, using fallback");
    fallback_graphics()
}

/// Display name for a node type code.
pub fn node_label(type_code: i32) -> String {
    catalog_name(type_code)
        .map(str::to_string)
        .or_else(|| sized_defaults(type_code).map(|g| g.label))
        .unwrap_or_else(|| "unknown node".to_string())
}

/// Accent colors of a node: fill, stroke, and the dark-theme variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeColor {
    pub fill: &'static str,
    pub stroke: &'static str,
    pub dark: &'static str,
}

/// Returns the accent colors for a node type code.
///
/// Unknown codes share the type-1 blue.
pub fn node_color(type_code: i32) -> NodeColor {
    match type_code {
        2 => NodeColor {
            fill: "#8B5CF6",
            stroke: "#7C3AED",
            dark: "#6D28D9",
        },
        3 => NodeColor {
            fill: "#10B981",
            stroke: "#059669",
            dark: "#047857",
        },
        4 => NodeColor {
            fill: "#F59E0B",
            stroke: "#D97706",
            dark: "#B45309",
        },
        5 => NodeColor {
            fill: "#EF4444",
            stroke: "#DC2626",
            dark: "#B91C1C",
        },
        6 => NodeColor {
            fill: "#06B6D4",
            stroke: "#0891B2",
            dark: "#0E7490",
        },
        7 => NodeColor {
            fill: "#6B7280",
            stroke: "#4B5563",
            dark: "#374151",
        },
        12 => NodeColor {
            fill: "#EC4899",
            stroke: "#DB2777",
            dark: "#BE185D",
        },
        _ => NodeColor {
            fill: "#3B82F6",
            stroke: "#2563EB",
            dark: "#1E40AF",
        },
    }
}

/// One-character icon glyph shown inside the node shape. Unknown codes get
/// a question mark.
pub fn node_icon(type_code: i32) -> char {
    match type_code {
        1 => 'W',
        2 => 'M',
        3 => 'C',
        4 => 'R',
        5 => 'G',
        6 => 'D',
        7 => 'P',
        8 => 'E',
        9 => 'A',
        12 => 'S',
        _ => '?',
    }
}
