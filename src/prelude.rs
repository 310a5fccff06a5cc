//! Prelude module for convenient imports
//!
//! Re-exports the most commonly used types from the flowcanvas crate so that
//! consumers can get the whole editing surface with a single `use`.
//!
//! # Example
//!
//! ```rust
//! use flowcanvas::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let store = starter_catalog();
//! let template = store.get("webhook-relay").ok_or("missing template")?;
//!
//! let registry = CapabilityRegistry::new();
//! let model = compile(template, &registry);
//! assert_eq!(model.node_count(), template.steps.len());
//! # Ok(())
//! # }
//! ```

// Classification
pub use crate::capability::{CapabilityRegistry, CapabilityTag, EdgeStyle};

// Templates and the catalog
pub use crate::template::{IntoTemplates, Template, TemplateStore, starter_catalog};

// Graph structure
pub use crate::graph::{Edge, GraphModel, Node, NodeData, NodeKind, Position};

// Compilation and editing
pub use crate::compiler::{LANE_SPACING, compile};
pub use crate::session::{EditingSession, Selection};

// Error types
pub use crate::error::{GraphError, TemplateImportError};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
