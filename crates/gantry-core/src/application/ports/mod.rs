//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `gantry-adapters` crate provides the filesystem, store, renderer,
//! and inspector implementations; the CLI crate provides the terminal
//! [`ChangeApprover`].

use std::path::{Path, PathBuf};

use crate::domain::{FileRevision, Layout, LayoutId, ProjectStructure, RenderContext};
use crate::error::GantryResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `gantry_adapters::filesystem::LocalFilesystem` (production)
/// - `gantry_adapters::filesystem::MemoryFilesystem` (testing)
///
/// ## Design Notes
///
/// - `write_file` refuses to clobber unless `overwrite` is set; creating
///   parent directories is the caller's job (services decide structure)
/// - Permissions are capability-based, not Unix-specific
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> GantryResult<()>;

    /// Write content to a file. Fails with `FileExists` when the path exists
    /// and `overwrite` is false.
    fn write_file(&self, path: &Path, content: &str, overwrite: bool) -> GantryResult<()>;

    /// Read a file to a string.
    fn read_to_string(&self, path: &Path) -> GantryResult<String>;

    /// Set file permissions.
    fn set_permissions(&self, path: &Path, executable: bool) -> GantryResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Remove a directory and all contents.
    fn remove_dir_all(&self, path: &Path) -> GantryResult<()>;
}

/// Port for layout storage and retrieval.
///
/// Implemented by:
/// - `gantry_adapters::layout_store::InMemoryLayoutStore` (built-in layouts)
pub trait LayoutStore: Send + Sync {
    /// Get a layout by name.
    fn get(&self, id: &LayoutId) -> GantryResult<Layout>;

    /// List all available layouts.
    fn list(&self) -> GantryResult<Vec<Layout>>;

    /// Insert or update a layout.
    fn insert(&self, layout: Layout) -> GantryResult<()>;
}

/// Port for template rendering.
///
/// Implemented by:
/// - `gantry_adapters::renderer::SimpleRenderer` (variable substitution)
pub trait TemplateRenderer: Send + Sync {
    /// Render a layout into a project structure rooted at `output_root`.
    ///
    /// Both file contents and file paths may carry `{{VAR}}` placeholders.
    fn render_layout(
        &self,
        layout: &Layout,
        context: &RenderContext,
        output_root: &Path,
    ) -> GantryResult<ProjectStructure>;

    /// Render a single snippet template to text.
    fn render_snippet(&self, template: &str, context: &RenderContext) -> GantryResult<String>;
}

/// Port for inspecting an existing project.
///
/// Implemented by:
/// - `gantry_adapters::inspector::GoProjectInspector`
pub trait ProjectInspector: Send + Sync {
    /// The Go module name, read from `go.mod` (falling back to the project
    /// marker file, then to the project name).
    fn module_name(&self, root: &Path) -> String;

    /// The project name (directory name fallback).
    fn project_name(&self, root: &Path) -> String;

    /// The layout the project was generated from, when recorded.
    fn layout_name(&self, root: &Path) -> Option<String>;
}

/// Port for presenting a pending change and obtaining consent.
///
/// The wiring orchestrator depends on this capability instead of a terminal
/// so the core logic can be tested headlessly with always-accept /
/// always-reject stubs; the CLI supplies a terminal-backed implementation.
///
/// `confirm` blocks on operator input with no timeout; it must not be
/// reached from non-interactive contexts without the dry-run / `--yes`
/// escape hatches.
#[cfg_attr(test, mockall::automock)]
pub trait ChangeApprover: Send + Sync {
    /// Show the proposed revision (added-lines preview) to the operator.
    fn present(&self, revision: &FileRevision, description: &str) -> GantryResult<()>;

    /// Ask a yes/no question and block for the answer.
    fn confirm(&self, prompt: &str) -> GantryResult<bool>;
}

/// Owned candidate list used by the entry-file scanner; exposed for tests
/// and for the CLI's "checked these paths" messaging.
pub fn entry_file_candidates(root: &Path, project_name: &str) -> Vec<PathBuf> {
    vec![
        root.join("main.go"),
        root.join("cmd").join(project_name).join("main.go"),
        root.join("cmd").join("main.go"),
    ]
}
