//! Go project inspector.
//!
//! Answers three questions about an existing project directory: what is the
//! module called, what is the project called, and which layout generated it.
//! Sources, in order of trust:
//!
//! 1. `go.mod` — the `module` directive (module name only)
//! 2. `gantry.toml` — the project marker written at scaffold time
//! 3. Fallbacks — the directory name, and `example.com/<name>` for modules
//!
//! Inspection never fails: a missing or malformed file just drops through
//! to the next source.

use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use gantry_core::application::ports::ProjectInspector;

/// Default module host used when nothing better is known.
const FALLBACK_MODULE_HOST: &str = "example.com";

/// Production inspector reading `go.mod` and `gantry.toml`.
#[derive(Debug, Clone, Copy, Default)]
pub struct GoProjectInspector;

impl GoProjectInspector {
    pub fn new() -> Self {
        Self
    }

    fn marker(&self, root: &Path) -> Option<MarkerProject> {
        let raw = std::fs::read_to_string(root.join("gantry.toml")).ok()?;
        match toml::from_str::<MarkerFile>(&raw) {
            Ok(marker) => marker.project,
            Err(e) => {
                debug!(error = %e, "ignoring malformed gantry.toml");
                None
            }
        }
    }

    fn go_mod_module(&self, root: &Path) -> Option<String> {
        let raw = std::fs::read_to_string(root.join("go.mod")).ok()?;
        raw.lines().find_map(|line| {
            line.trim()
                .strip_prefix("module ")
                .map(|m| m.trim().to_string())
                .filter(|m| !m.is_empty())
        })
    }

    fn dir_name(&self, root: &Path) -> Option<String> {
        root.file_name()
            .and_then(|n| n.to_str())
            .map(str::to_string)
    }
}

impl ProjectInspector for GoProjectInspector {
    fn module_name(&self, root: &Path) -> String {
        if let Some(module) = self.go_mod_module(root) {
            return module;
        }
        if let Some(module) = self.marker(root).and_then(|p| p.module) {
            return module;
        }
        let name = self.project_name(root);
        format!("{FALLBACK_MODULE_HOST}/{name}")
    }

    fn project_name(&self, root: &Path) -> String {
        self.marker(root)
            .and_then(|p| p.name)
            .or_else(|| self.dir_name(root))
            .unwrap_or_else(|| "app".to_string())
    }

    fn layout_name(&self, root: &Path) -> Option<String> {
        self.marker(root).and_then(|p| p.layout)
    }
}

// ── marker file schema ───────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct MarkerFile {
    project: Option<MarkerProject>,
}

#[derive(Debug, Deserialize)]
struct MarkerProject {
    name: Option<String>,
    module: Option<String>,
    layout: Option<String>,
}

// ── tests ─────────────────────────────────────────────────────────────────────
