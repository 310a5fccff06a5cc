//! Common test utilities for building templates and compiled graphs.
use flowcanvas::prelude::*;

/// Creates the three-step template from the product walkthrough:
/// webhook trigger, mail action, database action.
#[allow(dead_code)]
pub fn create_simple_template() -> Template {
    Template::new(
        "t1",
        "Order Alerts",
        "Mail the team and persist a record when an order arrives.",
        "Sales",
        CapabilityTag::Webhook,
        vec![
            "Webhook received".to_string(),
            "Send Mail".to_string(),
            "Save to Database".to_string(),
        ],
    )
}

/// Creates a template whose steps is empty. Compiling it must yield an empty
/// graph, not an error.
#[allow(dead_code)]
pub fn create_empty_template() -> Template {
    Template::new(
        "t-empty",
        "Blank Canvas",
        "Start from scratch.",
        "General",
        CapabilityTag::ArrowRight,
        vec![],
    )
}

/// Compiles the simple template with a default registry.
#[allow(dead_code)]
pub fn compile_simple() -> GraphModel {
    compile(&create_simple_template(), &CapabilityRegistry::new())
}

/// Opens an editing session over the compiled simple template.
#[allow(dead_code)]
pub fn open_simple_session() -> EditingSession {
    EditingSession::from_template(&create_simple_template(), CapabilityRegistry::new())
}

/// Node ids of a model in insertion order.
#[allow(dead_code)]
pub fn node_ids(model: &GraphModel) -> Vec<String> {
    model.nodes().map(|n| n.id.clone()).collect()
}

/// Edge ids of a model in insertion order.
#[allow(dead_code)]
pub fn edge_ids(model: &GraphModel) -> Vec<String> {
    model.edges().map(|e| e.id.clone()).collect()
}
