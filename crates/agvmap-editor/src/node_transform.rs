//! Node import/export normalization.
//!
//! Converts between persisted business records and the enriched runtime
//! form, and builds new nodes with documented field precedence: business
//! defaults first, caller overrides second, type-derived graphics last.

use uuid::Uuid;

use agvmap_core::constants::DEFAULT_NODE_SPEED;

use crate::model::{CanvasNode, NodeData, NodeNumber};
use crate::node_graphics::node_graphic_defaults;

/// Converts a persisted record into the runtime form: a fresh opaque id
/// plus graphic defaults looked up from the type code.
pub fn import_node(data: NodeData) -> CanvasNode {
    let graphics = node_graphic_defaults(data.type_code);
    CanvasNode {
        id: Uuid::new_v4(),
        data,
        graphics,
    }
}

/// Batch form of [`import_node`].
pub fn import_nodes(data: Vec<NodeData>) -> Vec<CanvasNode> {
    data.into_iter().map(import_node).collect()
}

/// Projects a runtime node back to its persisted business record, dropping
/// the id and graphics. `export_node(&import_node(d)) == d` for every
/// business field.
pub fn export_node(node: &CanvasNode) -> NodeData {
    node.data.clone()
}

/// Batch form of [`export_node`].
pub fn export_nodes(nodes: &[CanvasNode]) -> Vec<NodeData> {
    nodes.iter().map(export_node).collect()
}

/// Returns the next free business number: one past the largest numeric
/// `node` value in the list. Unparsable numbers count as 0, so a list of
/// only unparsable numbers yields 1, as does an empty list.
pub fn generate_unique_node_number(nodes: &[CanvasNode]) -> i64 {
    nodes
        .iter()
        .map(|n| n.number().unwrap_or(0))
        .max()
        .unwrap_or(0)
        + 1
}

/// Caller-supplied fields for a new node.
///
/// `type_code`, `x` and `y` are required; every other business field is an
/// optional override of the defaults.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NodeInit {
    pub type_code: i32,
    pub x: f64,
    pub y: f64,
    pub node: Option<NodeNumber>,
    pub left_station: Option<i64>,
    pub right_station: Option<String>,
    pub node_attr: Option<String>,
    pub node_type: Option<String>,
    pub navigation_mode: Option<i32>,
    pub avoidable: Option<u8>,
    pub enable: Option<bool>,
    pub speed: Option<f64>,
    pub dir: Option<f64>,
    pub floor: Option<NodeNumber>,
    pub region_name: Option<String>,
    pub station_name: Option<String>,
}

impl NodeInit {
    /// Minimal init with just the required fields.
    pub fn new(type_code: i32, x: f64, y: f64) -> Self {
        Self {
            type_code,
            x,
            y,
            ..Self::default()
        }
    }

    /// Init that carries over every business field of an existing node
    /// except its number, for duplication.
    pub fn from_existing(data: &NodeData, x: f64, y: f64) -> Self {
        Self {
            type_code: data.type_code,
            x,
            y,
            node: None,
            left_station: Some(data.left_station),
            right_station: Some(data.right_station.clone()),
            node_attr: Some(data.node_attr.clone()),
            node_type: Some(data.node_type.clone()),
            navigation_mode: Some(data.navigation_mode),
            avoidable: Some(data.avoidable),
            enable: Some(data.enable),
            speed: Some(data.speed),
            dir: Some(data.dir),
            floor: Some(data.floor.clone()),
            region_name: Some(data.region_name.clone()),
            station_name: Some(data.station_name.clone()),
        }
    }
}

/// Builds a complete runtime node.
///
/// Precedence, lowest to highest: business defaults (including a generated
/// unique number), caller overrides from `init`, type-derived graphics, a
/// fresh id.
pub fn create_node(init: NodeInit, existing: &[CanvasNode]) -> CanvasNode {
    let data = NodeData {
        node: init
            .node
            .unwrap_or_else(|| NodeNumber::Int(generate_unique_node_number(existing))),
        type_code: init.type_code,
        x: init.x,
        y: init.y,
        left_station: init.left_station.unwrap_or(0),
        right_station: init.right_station.unwrap_or_default(),
        node_attr: init.node_attr.unwrap_or_else(|| "COMMON".to_string()),
        node_type: init.node_type.unwrap_or_else(|| "PATH".to_string()),
        navigation_mode: init.navigation_mode.unwrap_or(0),
        avoidable: init.avoidable.unwrap_or(1),
        enable: init.enable.unwrap_or(false),
        speed: init.speed.unwrap_or(DEFAULT_NODE_SPEED),
        dir: init.dir.unwrap_or(0.0),
        floor: init.floor.unwrap_or(NodeNumber::Int(1)),
        region_name: init.region_name.unwrap_or_default(),
        station_name: init.station_name.unwrap_or_default(),
    };
    import_node(data)
}
