//! Simple variable substitution renderer.

use std::path::Path;

use chrono::Datelike;
use tracing::instrument;

use gantry_core::{
    application::ports::TemplateRenderer,
    domain::{Layout, LayoutContent, LayoutNode, ProjectStructure, RenderContext},
    error::GantryResult,
};

/// Simple renderer using basic `{{VAR}}` substitution.
///
/// File *paths* are rendered too (layouts place entry files under
/// `cmd/{{PROJECT_NAME}}/`), and a `YEAR` variable is stamped into the
/// context for copyright lines.
pub struct SimpleRenderer;

impl SimpleRenderer {
    /// Create a new simple renderer.
    pub fn new() -> Self {
        Self
    }

    fn context_with_year(context: &RenderContext) -> RenderContext {
        context
            .clone()
            .with_variable("YEAR", chrono::Utc::now().year().to_string())
    }
}

impl Default for SimpleRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateRenderer for SimpleRenderer {
    #[instrument(skip_all, fields(layout = %layout.id))]
    fn render_layout(
        &self,
        layout: &Layout,
        context: &RenderContext,
        output_root: &Path,
    ) -> GantryResult<ProjectStructure> {
        layout.validate().map_err(gantry_core::error::GantryError::Domain)?;

        let ctx = Self::context_with_year(context);
        let mut structure = ProjectStructure::new(output_root);

        for node in &layout.tree.nodes {
            match node {
                LayoutNode::File(spec) => {
                    let path = ctx.render(spec.path.as_str());
                    let content = match &spec.content {
                        LayoutContent::Literal(source) => source.as_str().to_string(),
                        LayoutContent::Parameterized(source) => ctx.render(source.as_str()),
                    };
                    structure.add_file(path, content, spec.permissions);
                }
                LayoutNode::Directory(spec) => {
                    structure.add_directory(ctx.render(spec.path.as_str()), spec.permissions);
                }
            }
        }

        structure
            .validate()
            .map_err(gantry_core::error::GantryError::Domain)?;

        Ok(structure)
    }

    fn render_snippet(&self, template: &str, context: &RenderContext) -> GantryResult<String> {
        Ok(Self::context_with_year(context).render(template))
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
