//! The live editing session mediating user operations against one graph.

use crate::capability::CapabilityRegistry;
use crate::compiler::compile;
use crate::error::GraphError;
use crate::graph::{Edge, GraphModel, Node, NodeData, NodeKind, Position};
use crate::template::Template;

/// The current single-selection state of a session.
///
/// At most one node or edge is selected at any time; selecting a new element
/// always replaces the prior selection. Selection is a transient view over
/// the graph, not part of it — subscribers are not notified when it changes.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    Idle,
    Node(String),
    Edge(String),
}

impl Selection {
    pub fn is_idle(&self) -> bool {
        matches!(self, Selection::Idle)
    }

    pub fn node_id(&self) -> Option<&str> {
        match self {
            Selection::Node(id) => Some(id),
            _ => None,
        }
    }

    pub fn edge_id(&self) -> Option<&str> {
        match self {
            Selection::Edge(id) => Some(id),
            _ => None,
        }
    }
}

type ChangeListener = Box<dyn FnMut(&GraphModel)>;

/// The live controller for one open editor surface.
///
/// A session exclusively owns one [`GraphModel`] and applies a linear
/// sequence of user-driven operations against it. Every mutating operation
/// is atomic: it either leaves the model in a new consistent state and fires
/// one change notification, or fails with a [`GraphError`] and the model is
/// untouched and no notification fires.
///
/// Sessions are single-threaded by construction; each belongs to exactly one
/// editor surface and is discarded when that surface closes.
pub struct EditingSession {
    model: GraphModel,
    registry: CapabilityRegistry,
    selection: Selection,
    listeners: Vec<ChangeListener>,
}

impl EditingSession {
    /// Wraps an existing model.
    pub fn new(model: GraphModel, registry: CapabilityRegistry) -> Self {
        Self {
            model,
            registry,
            selection: Selection::Idle,
            listeners: Vec::new(),
        }
    }

    /// Compiles a template and opens a session over the result.
    pub fn from_template(template: &Template, registry: CapabilityRegistry) -> Self {
        let model = compile(template, &registry);
        Self::new(model, registry)
    }

    /// Subscribes to change notifications. The listener is invoked
    /// synchronously with the resulting model after every successful
    /// mutating operation.
    pub fn on_change(&mut self, listener: impl FnMut(&GraphModel) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Adds a node with a freshly allocated id at the given position. The
    /// label is classified through the session's capability registry; nodes
    /// added by hand are always [`NodeKind::Action`]s.
    ///
    /// Returns the new node's id.
    pub fn add_node(&mut self, label: &str, position: Position) -> String {
        let id = self.model.fresh_node_id();
        let data = NodeData::new(label, self.registry.classify(label));
        self.model
            .insert_node_unchecked(Node::new(id.clone(), NodeKind::Action, position, data));
        self.notify();
        id
    }

    /// Removes a node and every edge touching it. Removing an absent id is a
    /// no-op and fires no notification. If the removed node — or an edge
    /// swept away by the cascade — was selected, the selection resets to
    /// [`Selection::Idle`].
    ///
    /// Returns `true` if a node was actually removed.
    pub fn remove_node(&mut self, id: &str) -> bool {
        if !self.model.remove_node(id) {
            return false;
        }
        let selection_gone = match &self.selection {
            Selection::Node(selected) => selected == id,
            Selection::Edge(selected) => self.model.edge(selected).is_none(),
            Selection::Idle => false,
        };
        if selection_gone {
            self.selection = Selection::Idle;
        }
        self.notify();
        true
    }

    /// Moves a node to a new position.
    pub fn move_node(&mut self, id: &str, position: Position) -> Result<(), GraphError> {
        self.model.move_node(id, position)?;
        self.notify();
        Ok(())
    }

    /// Connects two nodes with a freshly allocated edge id, returning the
    /// new edge's id. Fails like [`GraphModel::add_edge`].
    pub fn connect(&mut self, source: &str, target: &str) -> Result<String, GraphError> {
        let id = self.model.fresh_edge_id();
        self.model.add_edge(Edge::new(id.clone(), source, target))?;
        self.notify();
        Ok(id)
    }

    /// Removes an edge. Fails with [`GraphError::NotFound`] if the id names
    /// no edge. Disconnecting the selected edge resets the selection.
    pub fn disconnect(&mut self, edge_id: &str) -> Result<(), GraphError> {
        if !self.model.remove_edge(edge_id) {
            return Err(GraphError::NotFound {
                id: edge_id.to_string(),
            });
        }
        if self.selection.edge_id() == Some(edge_id) {
            self.selection = Selection::Idle;
        }
        self.notify();
        Ok(())
    }

    /// Merges a configuration patch into a node's payload.
    pub fn update_node_data(
        &mut self,
        id: &str,
        patch: serde_json::Value,
    ) -> Result<(), GraphError> {
        self.model.update_node_data(id, patch)?;
        self.notify();
        Ok(())
    }

    /// Selects a node, replacing any prior selection. Fails with
    /// [`GraphError::NotFound`] if the id names no node.
    pub fn select_node(&mut self, id: &str) -> Result<(), GraphError> {
        if !self.model.contains_node(id) {
            return Err(GraphError::NotFound { id: id.to_string() });
        }
        self.selection = Selection::Node(id.to_string());
        Ok(())
    }

    /// Selects an edge, replacing any prior selection. Fails with
    /// [`GraphError::NotFound`] if the id names no edge.
    pub fn select_edge(&mut self, id: &str) -> Result<(), GraphError> {
        if self.model.edge(id).is_none() {
            return Err(GraphError::NotFound { id: id.to_string() });
        }
        self.selection = Selection::Edge(id.to_string());
        Ok(())
    }

    /// Clears the selection.
    pub fn deselect(&mut self) {
        self.selection = Selection::Idle;
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn selected_node(&self) -> Option<&Node> {
        self.selection.node_id().and_then(|id| self.model.node(id))
    }

    pub fn selected_edge(&self) -> Option<&Edge> {
        self.selection.edge_id().and_then(|id| self.model.edge(id))
    }

    /// The wrapped model, for the presentation layer to draw from.
    pub fn model(&self) -> &GraphModel {
        &self.model
    }

    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.model.nodes()
    }

    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.model.edges()
    }

    pub fn registry(&self) -> &CapabilityRegistry {
        &self.registry
    }

    fn notify(&mut self) {
        for listener in self.listeners.iter_mut() {
            listener(&self.model);
        }
    }
}
