//! Caption composition: the pure text pipeline and its helpers.

mod clean;
pub mod compose;
pub mod extension;
pub mod html;
mod matcher;

pub use compose::compose;
pub use html::escape;
