//! Component Service - inert-text boilerplate injection.
//!
//! Renders a single component template (handler, model, middleware
//! implementation, database wiring) and writes it into an existing project.
//! Thin by design: all the interesting analysis belongs to the wiring
//! subsystem, not here.

use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument};

use crate::{
    application::ports::{Filesystem, TemplateRenderer},
    domain::{ComponentTemplate, RenderContext},
    error::GantryResult,
};

/// Component injection service.
pub struct ComponentService {
    renderer: Box<dyn TemplateRenderer>,
    filesystem: Box<dyn Filesystem>,
}

impl ComponentService {
    /// Create a new component service with the given adapters.
    pub fn new(renderer: Box<dyn TemplateRenderer>, filesystem: Box<dyn Filesystem>) -> Self {
        Self {
            renderer,
            filesystem,
        }
    }

    /// Render `template` and write it under `root`.
    ///
    /// Refuses to overwrite an existing file unless `force` is set.
    /// Returns the path written.
    #[instrument(skip_all, fields(kind = %template.kind))]
    pub fn add(
        &self,
        root: &Path,
        template: &ComponentTemplate,
        context: &RenderContext,
        force: bool,
    ) -> GantryResult<PathBuf> {
        let relative = self.renderer.render_snippet(template.path_template, context)?;
        let path = root.join(relative);
        let content = self.renderer.render_snippet(template.content, context)?;

        if let Some(parent) = path.parent() {
            self.filesystem.create_dir_all(parent)?;
        }
        self.filesystem.write_file(&path, &content, force)?;

        info!(path = %path.display(), "component written");
        Ok(path)
    }

    /// Like [`Self::add`], but a no-op when the target already exists.
    ///
    /// Used after a wiring commit: the registration references the
    /// implementation file, which must exist but must not be clobbered if
    /// the user already customized it.
    pub fn ensure(
        &self,
        root: &Path,
        template: &ComponentTemplate,
        context: &RenderContext,
    ) -> GantryResult<Option<PathBuf>> {
        let relative = self.renderer.render_snippet(template.path_template, context)?;
        let path = root.join(relative);
        if self.filesystem.exists(&path) {
            debug!(path = %path.display(), "component already present, keeping");
            return Ok(None);
        }

        let content = self.renderer.render_snippet(template.content, context)?;
        if let Some(parent) = path.parent() {
            self.filesystem.create_dir_all(parent)?;
        }
        self.filesystem.write_file(&path, &content, false)?;

        info!(path = %path.display(), "component written");
        Ok(Some(path))
    }
}
