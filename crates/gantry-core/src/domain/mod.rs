//! Core domain layer for Gantry.
//!
//! This module contains pure business logic with ZERO external dependencies.
//! All I/O, prompting, and rendering concerns are handled via ports (traits)
//! defined in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **Immutable entities**: All domain objects are Clone + PartialEq
//! - **Table-driven heuristics**: idiom indicators and middleware tiers are
//!   immutable module-level constant tables, not mutable global state

pub mod changeset;
pub mod common;
pub mod component;
pub mod error;
pub mod idiom;
pub mod insertion;
pub mod layout;
pub mod middleware;
pub mod project_structure;

// Re-exports for convenience
pub use changeset::{ChangeSet, FileRevision};
pub use common::{Permissions, RelativePath};
pub use component::{ComponentKind, ComponentTemplate};
pub use error::{DomainError, ErrorCategory};
pub use idiom::{IDIOM_REGISTRY, IdiomDef, IdiomFamily, RouterIdiom, detect_idiom};
pub use insertion::{InsertionError, wire_into_source};
pub use layout::{
    DirectorySpec, FileSpec, Layout, LayoutContent, LayoutId, LayoutMetadata, LayoutNode,
    LayoutSource, LayoutTree, RenderContext,
};
pub use middleware::{
    MIDDLEWARE_REGISTRY, MiddlewareDef, MiddlewareKind, MiddlewarePosition, is_wired,
};
pub use project_structure::{DirectoryToCreate, FileToWrite, FsEntry, ProjectStructure};
