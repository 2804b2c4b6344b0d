//! Infrastructure adapters for Gantry.
//!
//! This crate implements the ports defined in `gantry_core::application::ports`.
//! It contains all external dependencies and I/O operations. The one port
//! not implemented here is `ChangeApprover` — its production implementation
//! is terminal-bound and lives in the CLI crate.

pub mod builtin_components;
pub mod builtin_layouts;
pub mod filesystem;
pub mod inspector;
pub mod layout_store;
pub mod renderer;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use inspector::GoProjectInspector;
pub use layout_store::InMemoryLayoutStore;
pub use renderer::SimpleRenderer;
