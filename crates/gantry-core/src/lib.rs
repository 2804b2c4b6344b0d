//! Gantry Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Gantry
//! project scaffolding and code-generation tool, following hexagonal
//! (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           gantry-cli (CLI)              │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │ (ScaffoldService, WireService,          │
//! │  ComponentService)                      │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │ (Driven: Filesystem, LayoutStore,       │
//! │  Renderer, Inspector, ChangeApprover)   │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    gantry-adapters (Infrastructure)     │
//! │  (LocalFilesystem, InMemoryLayoutStore, │
//! │   SimpleRenderer, GoProjectInspector)   │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │       Domain Layer (Pure Logic)         │
//! │ (RouterIdiom, MiddlewareKind, Layout,   │
//! │  insertion resolver, change sets)       │
//! │        No External Dependencies         │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```text
//! use gantry_core::application::{WireRequest, WireService};
//!
//! // Build the service with injected adapters, then wire a middleware
//! // into an existing project:
//! let service = WireService::new(filesystem, approver);
//! let request = WireRequest::new("recovery", "/path/to/project", "example.com/app");
//! service.wire(&request.dry_run(true))?;
//! ```

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Re-export application layer (orchestration logic)
pub mod application;

// Re-export error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ComponentService, ScaffoldService, WireError, WireOutcome, WireRequest, WireService,
        ports::{ChangeApprover, Filesystem, LayoutStore, ProjectInspector, TemplateRenderer},
    };
    pub use crate::domain::{
        ChangeSet, FileRevision, Layout, LayoutId, LayoutMetadata, MiddlewareKind,
        MiddlewarePosition, RenderContext, RouterIdiom,
    };
    pub use crate::error::{GantryError, GantryResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
