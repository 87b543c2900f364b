//! Node records: persisted business data and the enriched runtime form.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Business identifier that may arrive as an integer or a numeric string.
///
/// Legacy map exports carry node numbers both ways; the editor keeps
/// whatever form it received and parses on demand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NodeNumber {
    Int(i64),
    Text(String),
}

impl NodeNumber {
    /// Numeric value, if the identifier parses as an integer.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            NodeNumber::Int(n) => Some(*n),
            NodeNumber::Text(s) => s.trim().parse().ok(),
        }
    }

    /// Whether this identifier refers to the given business number.
    pub fn matches(&self, number: i64) -> bool {
        self.as_int() == Some(number)
    }
}

impl From<i64> for NodeNumber {
    fn from(n: i64) -> Self {
        NodeNumber::Int(n)
    }
}

impl From<&str> for NodeNumber {
    fn from(s: &str) -> Self {
        NodeNumber::Text(s.to_string())
    }
}

impl std::fmt::Display for NodeNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NodeNumber::Int(n) => write!(f, "{n}"),
            NodeNumber::Text(s) => write!(f, "{s}"),
        }
    }
}

/// Persisted node record.
///
/// Exactly the shape the backend stores and returns; no runtime or graphic
/// fields. Coordinates are Cartesian with Y growing upward.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeData {
    /// Business number, unique within a map. Path edges reference this
    /// field, never the runtime id.
    pub node: NodeNumber,
    /// Element type code (workstation, charging station, ...).
    #[serde(rename = "type")]
    pub type_code: i32,
    pub x: f64,
    pub y: f64,
    pub left_station: i64,
    pub right_station: String,
    /// Node attribute tag, e.g. "COMMON".
    pub node_attr: String,
    /// Node role, e.g. "LOAD" or "PATH".
    pub node_type: String,
    pub navigation_mode: i32,
    /// 1 when other vehicles may route around this node, else 0.
    pub avoidable: u8,
    /// Charging-point enable flag.
    pub enable: bool,
    pub speed: f64,
    /// Pose direction, degrees.
    pub dir: f64,
    pub floor: NodeNumber,
    pub region_name: String,
    pub station_name: String,
}

/// Runtime-only graphic attributes of a node.
///
/// Derived from the type code via the graphic-defaults registry at import
/// time; overridable afterwards; never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeGraphics {
    pub width: f64,
    pub height: f64,
    /// Clockwise rotation, degrees.
    pub rotation: f64,
    pub label: String,
}

/// Live node as held by the canvas store: business record plus runtime id
/// and graphics.
#[derive(Debug, Clone, PartialEq)]
pub struct CanvasNode {
    /// Opaque runtime identifier, unique within the live node set. Used for
    /// in-memory addressing only; path edges reference `data.node` instead.
    pub id: Uuid,
    pub data: NodeData,
    pub graphics: NodeGraphics,
}

impl CanvasNode {
    /// Business number as an integer, when it parses.
    pub fn number(&self) -> Option<i64> {
        self.data.node.as_int()
    }
}
