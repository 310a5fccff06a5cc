//! Tests for GraphModel invariants: id uniqueness, edge validity, cascades.
mod common;
use common::*;
use flowcanvas::prelude::*;

fn action(id: &str) -> Node {
    Node::new(
        id,
        NodeKind::Action,
        Position::default(),
        NodeData::new("Send Mail", CapabilityTag::Mail),
    )
}

#[test]
fn test_add_node_rejects_duplicate_id() {
    let mut model = GraphModel::new();
    model.add_node(action("a")).expect("first insert");

    let err = model.add_node(action("a")).unwrap_err();
    assert_eq!(err, GraphError::DuplicateId { id: "a".to_string() });
    assert_eq!(model.node_count(), 1);
}

#[test]
fn test_remove_node_is_noop_for_absent_id() {
    let mut model = GraphModel::new();
    model.add_node(action("a")).expect("insert");

    assert!(!model.remove_node("ghost"));
    assert_eq!(model.node_count(), 1);
}

#[test]
fn test_remove_node_cascades_edges() {
    let mut model = compile_simple();
    let ids = node_ids(&model);
    // The middle node touches both edges of the chain.
    assert!(model.remove_node(&ids[1]));

    assert_eq!(model.node_count(), 2);
    assert_eq!(model.edge_count(), 0);
    assert!(
        model
            .edges()
            .all(|e| e.source != ids[1] && e.target != ids[1])
    );
}

#[test]
fn test_add_edge_rejects_self_loop() {
    let mut model = GraphModel::new();
    model.add_node(action("a")).expect("insert");

    let err = model.add_edge(Edge::new("e", "a", "a")).unwrap_err();
    assert_eq!(
        err,
        GraphError::SelfLoop {
            edge_id: "e".to_string(),
            node_id: "a".to_string(),
        }
    );
    assert_eq!(model.edge_count(), 0);
}

#[test]
fn test_add_edge_rejects_dangling_endpoints() {
    let mut model = GraphModel::new();
    model.add_node(action("a")).expect("insert");

    let err = model.add_edge(Edge::new("e", "a", "ghost")).unwrap_err();
    assert_eq!(
        err,
        GraphError::DanglingEndpoint {
            edge_id: "e".to_string(),
            node_id: "ghost".to_string(),
        }
    );

    let err = model.add_edge(Edge::new("e", "ghost", "a")).unwrap_err();
    assert_eq!(
        err,
        GraphError::DanglingEndpoint {
            edge_id: "e".to_string(),
            node_id: "ghost".to_string(),
        }
    );
    assert_eq!(model.edge_count(), 0);
}

#[test]
fn test_add_edge_rejects_duplicate_id() {
    let mut model = GraphModel::new();
    model.add_node(action("a")).expect("insert");
    model.add_node(action_b()).expect("insert");
    model.add_edge(Edge::new("e", "a", "b")).expect("first edge");

    let err = model.add_edge(Edge::new("e", "b", "a")).unwrap_err();
    assert_eq!(err, GraphError::DuplicateId { id: "e".to_string() });
    assert_eq!(model.edge_count(), 1);
}

fn action_b() -> Node {
    action_with_id("b")
}

fn action_with_id(id: &str) -> Node {
    Node::new(
        id,
        NodeKind::Action,
        Position::default(),
        NodeData::new("Save to Database", CapabilityTag::Database),
    )
}

#[test]
fn test_parallel_edges_with_distinct_ids_are_permitted() {
    let mut model = GraphModel::new();
    model.add_node(action("a")).expect("insert");
    model.add_node(action_b()).expect("insert");

    model.add_edge(Edge::new("e1", "a", "b")).expect("first");
    model.add_edge(Edge::new("e2", "a", "b")).expect("parallel");
    assert_eq!(model.edge_count(), 2);
    assert_eq!(model.neighbors("a").collect::<Vec<_>>(), vec!["b", "b"]);
}

#[test]
fn test_move_node_replaces_position_only() {
    let mut model = compile_simple();
    let ids = node_ids(&model);
    let before = model.node(&ids[0]).expect("node").clone();

    model
        .move_node(&ids[0], Position::new(240.0, -32.5))
        .expect("move");

    let after = model.node(&ids[0]).expect("node");
    assert_eq!(after.position, Position::new(240.0, -32.5));
    assert_eq!(after.id, before.id);
    assert_eq!(after.kind, before.kind);
    assert_eq!(after.data, before.data);
    assert_eq!(model.edge_count(), 2);
}

#[test]
fn test_move_node_absent_id_is_not_found_and_leaves_counts() {
    let mut model = compile_simple();

    let err = model.move_node("ghost", Position::new(1.0, 1.0)).unwrap_err();
    assert_eq!(err, GraphError::NotFound { id: "ghost".to_string() });
    assert_eq!(model.node_count(), 3);
    assert_eq!(model.edge_count(), 2);
}

#[test]
fn test_update_node_data_shallow_merges() {
    let mut model = compile_simple();
    let ids = node_ids(&model);

    model
        .update_node_data(&ids[0], serde_json::json!({"retries": 3}))
        .expect("patch");
    model
        .update_node_data(&ids[0], serde_json::json!({"retries": 5, "timeout_ms": 750}))
        .expect("patch");

    let config = &model.node(&ids[0]).expect("node").data.config;
    assert_eq!(config["retries"], 5);
    assert_eq!(config["timeout_ms"], 750);
}

#[test]
fn test_update_node_data_absent_id_is_not_found() {
    let mut model = GraphModel::new();
    let err = model
        .update_node_data("ghost", serde_json::json!({}))
        .unwrap_err();
    assert_eq!(err, GraphError::NotFound { id: "ghost".to_string() });
}

#[test]
fn test_neighbors_follow_edge_insertion_order() {
    let mut model = GraphModel::new();
    for id in ["a", "b", "c", "d"] {
        model.add_node(action_with_id(id)).expect("insert");
    }
    model.add_edge(Edge::new("e1", "a", "c")).expect("edge");
    model.add_edge(Edge::new("e2", "a", "b")).expect("edge");
    model.add_edge(Edge::new("e3", "b", "d")).expect("edge");

    assert_eq!(model.neighbors("a").collect::<Vec<_>>(), vec!["c", "b"]);
    // Restartable: a second traversal yields the same sequence.
    assert_eq!(model.neighbors("a").collect::<Vec<_>>(), vec!["c", "b"]);
    assert_eq!(model.neighbors("d").count(), 0);
    assert_eq!(model.neighbors("ghost").count(), 0);
}

#[test]
fn test_fresh_ids_skip_taken_ids() {
    let mut model = GraphModel::new();
    model.add_node(action_with_id("n0")).expect("insert");

    let fresh = model.fresh_node_id();
    assert_ne!(fresh, "n0");
    assert!(!model.contains_node(&fresh));
}

#[test]
fn test_fresh_ids_are_not_reissued_after_removal() {
    let mut model = GraphModel::new();
    let first = model.fresh_node_id();
    model.add_node(action_with_id(&first)).expect("insert");
    model.remove_node(&first);

    let second = model.fresh_node_id();
    assert_ne!(first, second);
}

#[test]
fn test_error_display() {
    let err = GraphError::DanglingEndpoint {
        edge_id: "e9".to_string(),
        node_id: "n9".to_string(),
    };
    assert!(err.to_string().contains("e9"));
    assert!(err.to_string().contains("n9"));

    let err = GraphError::SelfLoop {
        edge_id: "e1".to_string(),
        node_id: "n1".to_string(),
    };
    assert!(err.to_string().contains("itself"));
}
