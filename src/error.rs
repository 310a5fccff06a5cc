use thiserror::Error;

/// Errors that a graph mutation can report.
///
/// Every variant is locally recoverable: a failed operation leaves the graph
/// exactly as it was, and the caller decides how to surface the failure.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("an element with id '{id}' already exists in this graph")]
    DuplicateId { id: String },

    #[error("edge '{edge_id}' references node '{node_id}', which is not present in this graph")]
    DanglingEndpoint { edge_id: String, node_id: String },

    #[error("edge '{edge_id}' would connect node '{node_id}' to itself")]
    SelfLoop { edge_id: String, node_id: String },

    #[error("no node or edge with id '{id}' exists in this graph")]
    NotFound { id: String },
}

/// Errors that can occur when converting a custom catalog format into
/// [`Template`](crate::template::Template) values.
#[derive(Error, Debug, Clone)]
pub enum TemplateImportError {
    #[error("Invalid template data: {0}")]
    ValidationError(String),
}
