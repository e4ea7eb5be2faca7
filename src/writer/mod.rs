pub mod builder;
pub mod helpers;
pub mod property;
pub mod member_writer;

pub use builder::*;
pub use helpers::*;
pub use property::*;
pub use member_writer::*;
