//! Application layer for Gantry.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (ScaffoldService, WireService,
//!   ComponentService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types, including the public
//!   wiring taxonomy
//!
//! The application layer coordinates the domain layer but contains no
//! business logic itself. All business rules live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{
    ComponentService, LayoutInfo, ScaffoldService, WireOutcome, WireReport, WireRequest,
    WireService,
};

// Re-export port traits (for adapter implementation)
pub use ports::{ChangeApprover, Filesystem, LayoutStore, ProjectInspector, TemplateRenderer};

pub use error::{ApplicationError, WireError};
