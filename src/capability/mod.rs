//! Step classification: mapping free-form step descriptions to capability tags.

pub mod registry;
pub mod style;
pub mod tag;

pub use registry::*;
pub use style::*;
pub use tag::*;
