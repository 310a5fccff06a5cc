use super::{Edge, Node, Position};
use crate::error::GraphError;
use ahash::AHashMap;

/// The node/edge structure of one editable workflow.
///
/// A `GraphModel` exclusively owns its nodes and edges; all mutation goes
/// through `&mut self` operations, each of which validates completely before
/// touching any state. A failed operation therefore leaves the model exactly
/// as it was — callers never observe a partially-applied change.
///
/// Iteration (`nodes()`, `edges()`, `neighbors()`) follows insertion order.
#[derive(Debug, Clone, Default)]
pub struct GraphModel {
    nodes: AHashMap<String, Node>,
    node_order: Vec<String>,
    edges: AHashMap<String, Edge>,
    edge_order: Vec<String>,
    next_node_id: u64,
    next_edge_id: u64,
}

impl GraphModel {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a node. Fails with [`GraphError::DuplicateId`] if a node with the
    /// same id is already present.
    pub fn add_node(&mut self, node: Node) -> Result<(), GraphError> {
        if self.nodes.contains_key(&node.id) {
            return Err(GraphError::DuplicateId {
                id: node.id.clone(),
            });
        }
        self.node_order.push(node.id.clone());
        self.nodes.insert(node.id.clone(), node);
        Ok(())
    }

    /// Removes a node and every edge referencing it, so no dangling edge
    /// survives. Removing an absent id is a no-op, not an error.
    ///
    /// Returns `true` if a node was actually removed.
    pub fn remove_node(&mut self, id: &str) -> bool {
        if self.nodes.remove(id).is_none() {
            return false;
        }
        self.node_order.retain(|nid| nid != id);
        self.edge_order.retain(|eid| {
            let keep = self
                .edges
                .get(eid)
                .is_some_and(|e| e.source != id && e.target != id);
            if !keep {
                self.edges.remove(eid);
            }
            keep
        });
        true
    }

    /// Adds an edge between two present nodes.
    ///
    /// Fails with [`GraphError::DuplicateId`] if the edge id is taken,
    /// [`GraphError::SelfLoop`] if source and target are the same node, or
    /// [`GraphError::DanglingEndpoint`] if either endpoint is absent.
    /// Parallel edges between the same pair under distinct ids are permitted.
    pub fn add_edge(&mut self, edge: Edge) -> Result<(), GraphError> {
        if self.edges.contains_key(&edge.id) {
            return Err(GraphError::DuplicateId {
                id: edge.id.clone(),
            });
        }
        if edge.source == edge.target {
            return Err(GraphError::SelfLoop {
                edge_id: edge.id.clone(),
                node_id: edge.source.clone(),
            });
        }
        for endpoint in [&edge.source, &edge.target] {
            if !self.nodes.contains_key(endpoint) {
                return Err(GraphError::DanglingEndpoint {
                    edge_id: edge.id.clone(),
                    node_id: endpoint.clone(),
                });
            }
        }
        self.edge_order.push(edge.id.clone());
        self.edges.insert(edge.id.clone(), edge);
        Ok(())
    }

    /// Removes an edge. Removing an absent id is a no-op, not an error.
    ///
    /// Returns `true` if an edge was actually removed.
    pub fn remove_edge(&mut self, id: &str) -> bool {
        if self.edges.remove(id).is_none() {
            return false;
        }
        self.edge_order.retain(|eid| eid != id);
        true
    }

    /// Replaces a node's position. Identity, payload, and edges are
    /// unaffected. Fails with [`GraphError::NotFound`] if the id is absent.
    pub fn move_node(&mut self, id: &str, position: Position) -> Result<(), GraphError> {
        let node = self.nodes.get_mut(id).ok_or_else(|| GraphError::NotFound {
            id: id.to_string(),
        })?;
        node.position = position;
        Ok(())
    }

    /// Shallow-merges a JSON object `patch` into a node's configuration
    /// payload. A non-object patch replaces the payload wholesale. Fails with
    /// [`GraphError::NotFound`] if the id is absent.
    pub fn update_node_data(
        &mut self,
        id: &str,
        patch: serde_json::Value,
    ) -> Result<(), GraphError> {
        let node = self.nodes.get_mut(id).ok_or_else(|| GraphError::NotFound {
            id: id.to_string(),
        })?;
        match (node.data.config.as_object_mut(), patch) {
            (Some(config), serde_json::Value::Object(patch)) => {
                for (key, value) in patch {
                    config.insert(key, value);
                }
            }
            (_, patch) => node.data.config = patch,
        }
        Ok(())
    }

    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.get(id)
    }

    pub fn edge(&self, id: &str) -> Option<&Edge> {
        self.edges.get(id)
    }

    pub fn contains_node(&self, id: &str) -> bool {
        self.nodes.contains_key(id)
    }

    /// Nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.node_order.iter().filter_map(|id| self.nodes.get(id))
    }

    /// Edges in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.edge_order.iter().filter_map(|id| self.edges.get(id))
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Ids of nodes reachable from `id` over one outgoing edge, in edge
    /// insertion order. Lazy and restartable; yields nothing for an absent id.
    pub fn neighbors<'a>(&'a self, id: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.edges().filter_map(move |edge| {
            (edge.source == id).then_some(edge.target.as_str())
        })
    }

    /// Allocates a node id unused in this graph. Ids are monotonic (`n0`,
    /// `n1`, …); ids already taken by caller-supplied nodes are skipped.
    pub fn fresh_node_id(&mut self) -> String {
        loop {
            let id = format!("n{}", self.next_node_id);
            self.next_node_id += 1;
            if !self.nodes.contains_key(&id) {
                return id;
            }
        }
    }

    /// Allocates an edge id unused in this graph (`e0`, `e1`, …).
    pub fn fresh_edge_id(&mut self) -> String {
        loop {
            let id = format!("e{}", self.next_edge_id);
            self.next_edge_id += 1;
            if !self.edges.contains_key(&id) {
                return id;
            }
        }
    }

    /// Inserts a node whose id is known to be fresh. Compilation uses this
    /// after `fresh_node_id`, where the duplicate check cannot fire.
    pub(crate) fn insert_node_unchecked(&mut self, node: Node) {
        debug_assert!(!self.nodes.contains_key(&node.id));
        self.node_order.push(node.id.clone());
        self.nodes.insert(node.id.clone(), node);
    }

    /// Inserts an edge whose id is fresh and whose endpoints are known to be
    /// present and distinct.
    pub(crate) fn insert_edge_unchecked(&mut self, edge: Edge) {
        debug_assert!(!self.edges.contains_key(&edge.id));
        debug_assert!(edge.source != edge.target);
        debug_assert!(self.nodes.contains_key(&edge.source));
        debug_assert!(self.nodes.contains_key(&edge.target));
        self.edge_order.push(edge.id.clone());
        self.edges.insert(edge.id.clone(), edge);
    }
}
