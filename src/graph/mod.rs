//! The editable workflow graph: nodes, edges, and the owning model.

pub mod edge;
pub mod model;
pub mod node;

pub use edge::*;
pub use model::*;
pub use node::*;
