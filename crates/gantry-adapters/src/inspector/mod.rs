//! Project inspection adapters.

pub mod local;

pub use local::GoProjectInspector;
