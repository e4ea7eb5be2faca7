//! # memberdoc
//!
//! Renders the property sections of a type's documentation page as HTML:
//! the summary table, the "inherited from" link lists, the per-property
//! detail sections and the deprecated-property index entries.
//!
//! Properties are accessor methods following a naming convention
//! (`getColor`, `isEnabled`, or JavaFX-style `colorProperty`) and are
//! documented under their derived name (`color`, `enabled`).

pub mod config;
pub mod links;
pub mod markup;
pub mod model;
pub mod renderer;
pub mod resources;
pub mod utils;
pub mod writer;

#[cfg(test)]
mod tests;

pub use config::*;
pub use links::*;
pub use markup::*;
pub use model::*;
pub use renderer::*;
pub use resources::*;
pub use utils::*;
pub use writer::*;
