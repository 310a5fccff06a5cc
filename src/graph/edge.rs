use serde::{Deserialize, Serialize};

/// A directed connection between two nodes, indicating execution order.
///
/// Both endpoints must name nodes present in the same graph, and an edge
/// never connects a node to itself. Parallel edges between the same pair of
/// nodes are allowed as long as their ids differ.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    /// Unique within its owning graph.
    pub id: String,
    pub source: String,
    pub target: String,
}

impl Edge {
    pub fn new(
        id: impl Into<String>,
        source: impl Into<String>,
        target: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            source: source.into(),
            target: target.into(),
        }
    }
}
