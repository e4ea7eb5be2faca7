pub mod content;
pub mod html;
pub mod names;
pub mod table;
pub mod tree;

pub use content::*;
pub use names::*;
pub use table::*;
pub use tree::*;
