//! Scaffold Service - project creation orchestrator.
//!
//! This service coordinates the scaffolding workflow:
//! 1. Resolve the named layout
//! 2. Render the layout with the project's context
//! 3. Write to the filesystem (with best-effort rollback on failure)
//!
//! It implements the driving port (incoming) and uses driven ports
//! (outgoing). No analysis happens here — layouts are inert declarative
//! trees.

use std::path::Path;

use tracing::{info, instrument, warn};

use crate::{
    application::{
        ApplicationError,
        ports::{Filesystem, LayoutStore, TemplateRenderer},
    },
    domain::{FsEntry, Layout, LayoutId, ProjectStructure, RenderContext},
    error::{GantryError, GantryResult},
};

/// Information about a layout for display purposes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutInfo {
    pub name: String,
    pub display_name: String,
    pub description: String,
    pub router: Option<String>,
    pub tags: Vec<String>,
}

impl From<&Layout> for LayoutInfo {
    fn from(layout: &Layout) -> Self {
        Self {
            name: layout.id.to_string(),
            display_name: layout.metadata.display_name.clone(),
            description: layout.metadata.description.clone(),
            router: layout.metadata.router.map(|r| r.to_string()),
            tags: layout.metadata.tags.clone(),
        }
    }
}

/// Main scaffolding service.
pub struct ScaffoldService {
    store: Box<dyn LayoutStore>,
    renderer: Box<dyn TemplateRenderer>,
    filesystem: Box<dyn Filesystem>,
}

impl ScaffoldService {
    /// Create a new scaffold service with the given adapters.
    pub fn new(
        store: Box<dyn LayoutStore>,
        renderer: Box<dyn TemplateRenderer>,
        filesystem: Box<dyn Filesystem>,
    ) -> Self {
        Self {
            store,
            renderer,
            filesystem,
        }
    }

    /// Scaffold a new project.
    ///
    /// This is the main use case - creates a project directory from a named
    /// layout. Returns the written structure for reporting.
    #[instrument(
        skip_all,
        fields(
            layout = %layout_id,
            project = %project_name,
            output_path = %output_path.display()
        )
    )]
    pub fn scaffold(
        &self,
        layout_id: &LayoutId,
        project_name: &str,
        module_name: &str,
        output_path: &Path,
        force: bool,
    ) -> GantryResult<ProjectStructure> {
        info!("Scaffolding '{project_name}' from layout '{layout_id}'");

        // 1. Resolve and validate the layout
        let layout = self.store.get(layout_id)?;
        layout.validate().map_err(GantryError::Domain)?;

        // 2. Create render context
        let context = RenderContext::new(project_name).with_module(module_name);

        // 3. Render layout
        let structure = self
            .renderer
            .render_layout(&layout, &context, output_path)?;
        info!(entries = structure.entry_count(), "Layout rendered");

        // 4. Write to filesystem
        self.write_structure(&structure, force)?;

        info!("Scaffold completed successfully");
        Ok(structure)
    }

    /// List all available layouts.
    pub fn list_layouts(&self) -> GantryResult<Vec<LayoutInfo>> {
        let mut layouts = self.store.list()?;
        layouts.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(layouts.iter().map(LayoutInfo::from).collect())
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    /// Write project structure to filesystem with rollback on failure.
    fn write_structure(&self, structure: &ProjectStructure, force: bool) -> GantryResult<()> {
        if self.filesystem.exists(structure.root()) && !force {
            return Err(ApplicationError::ProjectExists {
                path: structure.root().to_path_buf(),
            }
            .into());
        }

        match self.write_all(structure) {
            Ok(()) => {
                info!("Successfully wrote all files");
                Ok(())
            }
            Err(e) => {
                warn!("Write failed, attempting rollback");
                self.rollback(structure.root());
                Err(e)
            }
        }
    }

    /// Write all entries in the structure.
    fn write_all(&self, structure: &ProjectStructure) -> GantryResult<()> {
        // Create root
        self.filesystem.create_dir_all(structure.root())?;

        // Write entries
        for entry in structure.entries() {
            match entry {
                FsEntry::Directory(dir) => {
                    let path = structure.root().join(&dir.path);
                    self.filesystem.create_dir_all(&path)?;
                }
                FsEntry::File(file) => {
                    let path = structure.root().join(&file.path);

                    // Ensure parent exists
                    if let Some(parent) = path.parent() {
                        self.filesystem.create_dir_all(parent)?;
                    }

                    self.filesystem.write_file(&path, &file.content, true)?;

                    if file.permissions.executable_flag() {
                        self.filesystem.set_permissions(&path, true)?;
                    }
                }
            }
        }

        Ok(())
    }

    /// Best-effort rollback on failure.
    fn rollback(&self, root: &Path) {
        if let Err(e) = self.filesystem.remove_dir_all(root) {
            warn!(
                error = %e,
                path = %root.display(),
                "Rollback failed"
            );
        } else {
            info!("Rollback successful");
        }
    }
}
