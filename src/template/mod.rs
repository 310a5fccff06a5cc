//! Template catalog: starter workflow definitions and their store.

pub mod catalog;
pub mod conversion;
pub mod definition;
pub mod store;

pub use catalog::*;
pub use conversion::*;
pub use definition::*;
pub use store::*;
