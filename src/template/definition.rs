use crate::capability::CapabilityTag;
use serde::{Deserialize, Serialize};

/// An immutable catalog entry describing a named, ordered sequence of
/// workflow steps.
///
/// Templates arrive from the collaborator layer already validated; the core
/// never mutates one. Step order is semantically meaningful — it is the
/// execution order the compiler chains nodes in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Template {
    /// Unique within a catalog.
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: String,
    pub icon: CapabilityTag,
    pub steps: Vec<String>,
}

impl Template {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        category: impl Into<String>,
        icon: CapabilityTag,
        steps: Vec<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            category: category.into(),
            icon,
            steps,
        }
    }
}
