use crate::capability::CapabilityTag;
use serde::{Deserialize, Serialize};

/// A 2D canvas coordinate. Real-valued, unbounded, and not required to be
/// unique across nodes.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// The role a node plays in its workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeKind {
    /// The entry point of a workflow. Compilation produces exactly one, for
    /// the first step of a template.
    Trigger,
    Action,
    /// Reserved for branching edits; never produced by compilation.
    Condition,
}

/// The user-facing payload of a node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeData {
    /// Display label; for compiled nodes this is the step description verbatim.
    pub label: String,
    pub capability: CapabilityTag,
    /// Free-form configuration, opaque to the core. Always a JSON object.
    #[serde(default = "empty_config")]
    pub config: serde_json::Value,
}

fn empty_config() -> serde_json::Value {
    serde_json::Value::Object(serde_json::Map::new())
}

impl NodeData {
    pub fn new(label: impl Into<String>, capability: CapabilityTag) -> Self {
        Self {
            label: label.into(),
            capability,
            config: empty_config(),
        }
    }
}

/// A single step in a workflow graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Unique within its owning graph.
    pub id: String,
    pub position: Position,
    pub kind: NodeKind,
    pub data: NodeData,
}

impl Node {
    pub fn new(id: impl Into<String>, kind: NodeKind, position: Position, data: NodeData) -> Self {
        Self {
            id: id.into(),
            position,
            kind,
            data,
        }
    }
}
