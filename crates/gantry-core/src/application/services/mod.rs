//! Application services - one per use case.

pub mod component_service;
pub mod scaffold_service;
pub mod wire_service;

pub use component_service::ComponentService;
pub use scaffold_service::{LayoutInfo, ScaffoldService};
pub use wire_service::{WireOutcome, WireReport, WireRequest, WireService};
