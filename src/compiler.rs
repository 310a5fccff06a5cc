//! Template-to-graph compilation: expanding a step list into an editable graph.

use crate::capability::CapabilityRegistry;
use crate::graph::{Edge, GraphModel, Node, NodeData, NodeKind, Position};
use crate::template::Template;
use itertools::Itertools;

/// Vertical distance between consecutive compiled nodes on the canvas.
pub const LANE_SPACING: f64 = 160.0;

/// Expands a template's step list into an initial [`GraphModel`].
///
/// Deterministic and total: any well-formed template compiles, including one
/// with no steps (which yields an empty graph). For the step at 0-based index
/// `i`, the compiler synthesizes a node with a freshly allocated id, kind
/// [`NodeKind::Trigger`] for `i == 0` and [`NodeKind::Action`] otherwise, the
/// step text as its label, its capability classified through `registry`, and
/// position `(0, i * LANE_SPACING)` — a single vertical lane. Consecutive
/// steps are then chained with one edge per pair, strictly linearly;
/// branching only ever enters a graph through later editing-session
/// operations.
///
/// Compiling the same template twice yields graphs identical up to node and
/// edge identity.
pub fn compile(template: &Template, registry: &CapabilityRegistry) -> GraphModel {
    let mut model = GraphModel::new();

    let mut ids = Vec::with_capacity(template.steps.len());
    for (index, step) in template.steps.iter().enumerate() {
        let id = model.fresh_node_id();
        let kind = if index == 0 {
            NodeKind::Trigger
        } else {
            NodeKind::Action
        };
        let position = Position::new(0.0, index as f64 * LANE_SPACING);
        let data = NodeData::new(step.clone(), registry.classify(step));
        // Fresh ids cannot collide, so the checked path is unnecessary here.
        model.insert_node_unchecked(Node::new(id.clone(), kind, position, data));
        ids.push(id);
    }

    for (source, target) in ids.iter().tuple_windows() {
        let id = model.fresh_edge_id();
        model.insert_edge_unchecked(Edge::new(id, source.clone(), target.clone()));
    }

    model
}
