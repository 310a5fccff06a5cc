//! # Flowcanvas - Workflow Graph Model and Template Engine
//!
//! **Flowcanvas** is the core of a visual automation-workflow editor: the
//! data structures and rules that turn a declarative template (name,
//! category, ordered steps, icon tag) into an editable directed graph of
//! nodes and connections, and that keep that graph consistent while a user
//! edits it. Everything presentation-shaped — canvas drawing, dialogs,
//! navigation — lives outside this crate and only consumes its read
//! accessors.
//!
//! ## Core Workflow
//!
//! 1. **Catalog**: the surrounding application populates a [`template::TemplateStore`]
//!    (or starts from [`template::starter_catalog`]) with already-validated
//!    [`template::Template`] values. Custom catalog formats plug in through
//!    the [`template::IntoTemplates`] trait.
//! 2. **Compile**: [`compiler::compile`] deterministically expands a
//!    template's step list into a [`graph::GraphModel`] — one node per step,
//!    laid out along a vertical lane and chained strictly linearly. The first
//!    step becomes the workflow's trigger; classification of each step into a
//!    [`capability::CapabilityTag`] goes through the
//!    [`capability::CapabilityRegistry`].
//! 3. **Edit**: a [`session::EditingSession`] wraps the compiled model and
//!    applies user operations (add, remove, move, connect, disconnect,
//!    select) atomically, notifying subscribers after each successful
//!    mutation.
//!
//! ## Quick Start
//!
//! ```rust
//! use flowcanvas::prelude::*;
//!
//! fn main() -> Result<()> {
//!     // 1. Look a starter template up in the catalog.
//!     let store = starter_catalog();
//!     let template = store.get("welcome-email").ok_or("unknown template")?;
//!
//!     // 2. Compile it and open an editing session over the result.
//!     let mut session = EditingSession::from_template(template, CapabilityRegistry::new());
//!     session.on_change(|model| {
//!         println!("canvas now holds {} nodes", model.node_count());
//!     });
//!
//!     // 3. Edit: append a follow-up step and wire it in.
//!     let tail = session
//!         .nodes()
//!         .last()
//!         .map(|node| node.id.clone())
//!         .ok_or("template compiled to an empty graph")?;
//!     let follow_up = session.add_node("Send Mail follow-up", Position::new(0.0, 480.0));
//!     session.connect(&tail, &follow_up)?;
//!
//!     session.select_node(&follow_up)?;
//!     assert_eq!(session.selection().node_id(), Some(follow_up.as_str()));
//!     Ok(())
//! }
//! ```

pub mod capability;
pub mod compiler;
pub mod error;
pub mod graph;
pub mod prelude;
pub mod session;
pub mod template;
