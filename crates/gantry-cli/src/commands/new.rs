//! Implementation of the `gantry new` command.
//!
//! Responsibility: translate CLI arguments into a layout + render context,
//! call the core scaffold service, and display results. No business logic
//! lives here.

use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument};

use gantry_adapters::{InMemoryLayoutStore, LocalFilesystem, SimpleRenderer};
use gantry_core::{application::ScaffoldService, domain::LayoutId};

use crate::{
    cli::{NewArgs, global::GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the `gantry new` command.
///
/// Dispatch sequence:
/// 1. Parse and validate the project name / output path
/// 2. Resolve layout and module from args + config
/// 3. Confirm with user unless `--yes` or `--quiet`
/// 4. Early-exit if `--dry-run`
/// 5. Execute scaffolding via `ScaffoldService`
/// 6. Print next-steps guidance
#[instrument(skip_all, fields(project = %args.name))]
pub fn execute(
    args: NewArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    // 1. Resolve project path
    let (project_name, project_path) = resolve_project_path(&args.name)?;
    validate_project_name(&project_name)?;

    // 2. Resolve layout + module (flag wins over config default)
    let layout_name = args
        .layout
        .as_deref()
        .unwrap_or(&config.defaults.layout)
        .to_string();
    let layout_id: LayoutId = layout_name
        .parse()
        .map_err(|e: gantry_core::domain::DomainError| CliError::Core(e.into()))?;
    let module_name = args
        .module
        .clone()
        .unwrap_or_else(|| format!("{}/{}", config.defaults.module_prefix, project_name));

    debug!(layout = %layout_id, module = %module_name, "target resolved");

    // 3. Show configuration and confirm
    if !global.quiet && !args.yes && !args.dry_run {
        show_configuration(&layout_name, &module_name, &project_name, &project_path, &output)?;
        if !confirm()? {
            return Err(CliError::Cancelled);
        }
    }

    // 4. Check for existing directory
    if project_path.exists() {
        if !args.force {
            return Err(CliError::ProjectExists { path: project_path });
        }
        output.warning(&format!(
            "Overwriting existing directory {}",
            project_path.display()
        ))?;
    }

    // 5. Dry run: describe but do not write.
    if args.dry_run {
        output.info(&format!(
            "Dry run: would create '{}' at {}",
            project_name,
            project_path.display(),
        ))?;
        output.info(&format!("  Layout: {layout_name}"))?;
        output.info(&format!("  Module: {module_name}"))?;
        return Ok(());
    }

    // 6. Create adapters and scaffold
    let store = Box::new(InMemoryLayoutStore::with_builtin().map_err(CliError::Core)?);
    let renderer = Box::new(SimpleRenderer::new());
    let filesystem = Box::new(LocalFilesystem::new());
    let service = ScaffoldService::new(store, renderer, filesystem);

    output.header(&format!("Creating '{project_name}'..."))?;
    info!(project = %project_name, path = %project_path.display(), "Scaffold started");

    let structure = service
        .scaffold(
            &layout_id,
            &project_name,
            &module_name,
            &project_path,
            args.force,
        )
        .map_err(CliError::Core)?;

    info!(project = %project_name, files = structure.files().count(), "Scaffold completed");

    // 7. Success + next steps
    output.success(&format!(
        "Project '{}' created ({} files)",
        project_name,
        structure.files().count()
    ))?;

    if !global.quiet {
        output.print("")?;
        output.print("Next steps:")?;
        output.print(&format!("  cd {project_name}"))?;
        output.print("  go mod tidy")?;
        output.print("  gantry add middleware recovery")?;
    }

    Ok(())
}

// ── Path resolution ───────────────────────────────────────────────────────────

/// Split a name-or-path argument into the project name (final component)
/// and the full path of the directory to create.
pub fn resolve_project_path(name: &str) -> CliResult<(String, PathBuf)> {
    let path = Path::new(name);

    let project_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| CliError::InvalidProjectName {
            name: name.into(),
            reason: "cannot extract valid project name".into(),
        })?
        .to_string();

    Ok((project_name, path.to_path_buf()))
}

fn validate_project_name(name: &str) -> CliResult<()> {
    if name.is_empty() {
        return Err(CliError::InvalidProjectName {
            name: name.into(),
            reason: "name cannot be empty".into(),
        });
    }
    if name.starts_with('.') {
        return Err(CliError::InvalidProjectName {
            name: name.into(),
            reason: "name cannot start with '.'".into(),
        });
    }
    if !name
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(CliError::InvalidProjectName {
            name: name.into(),
            reason: "only letters, digits, hyphens, and underscores are allowed".into(),
        });
    }
    Ok(())
}

// ── UI helpers ────────────────────────────────────────────────────────────────

fn show_configuration(
    layout: &str,
    module: &str,
    name: &str,
    path: &Path,
    out: &OutputManager,
) -> CliResult<()> {
    out.header("Configuration")?;
    out.print(&format!("  Project:  {name}"))?;
    out.print(&format!("  Layout:   {layout}"))?;
    out.print(&format!("  Module:   {module}"))?;
    out.print(&format!("  Location: {}", path.display()))?;
    out.print("")?;
    Ok(())
}

fn confirm() -> CliResult<bool> {
    use std::io::{self, Write};

    print!("Continue? [Y/n] ");
    io::stdout().flush().map_err(|e| CliError::IoError {
        message: "failed to flush stdout".into(),
        source: e,
    })?;

    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .map_err(|e| CliError::IoError {
            message: "failed to read confirmation input".into(),
            source: e,
        })?;
    if read == 0 {
        return Ok(false);
    }

    let input = input.trim().to_ascii_lowercase();
    Ok(input.is_empty() || input == "y" || input == "yes")
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    // ── resolve_project_path ──────────────────────────────────────────────────

    #[test]
    fn simple_name_resolves_in_place() {
        let (name, dir) = resolve_project_path("my-api").unwrap();
        assert_eq!(name, "my-api");
        assert_eq!(dir, PathBuf::from("my-api"));
    }

    #[test]
    fn relative_path_keeps_full_target() {
        let (name, dir) = resolve_project_path("../my-api").unwrap();
        assert_eq!(name, "my-api");
        assert_eq!(dir, PathBuf::from("../my-api"));
    }

    #[test]
    fn nested_path_works_on_all_platforms() {
        let sep = std::path::MAIN_SEPARATOR;
        let path = format!("foo{sep}bar{sep}my-api");

        let (name, dir) = resolve_project_path(&path).unwrap();
        assert_eq!(name, "my-api");

        let expected = PathBuf::from("foo").join("bar").join("my-api");
        assert_eq!(dir, expected);
    }

    // ── validate_project_name ─────────────────────────────────────────────────

    #[test]
    fn empty_name_is_invalid() {
        assert!(matches!(
            validate_project_name(""),
            Err(CliError::InvalidProjectName { .. })
        ));
    }

    #[test]
    fn dotfile_name_is_invalid() {
        assert!(matches!(
            validate_project_name(".hidden"),
            Err(CliError::InvalidProjectName { .. })
        ));
    }

    #[test]
    fn separator_in_name_is_invalid() {
        assert!(validate_project_name("a/b").is_err());
        assert!(validate_project_name("a\\b").is_err());
    }

    #[test]
    fn valid_names_pass() {
        for name in &["my-api", "my_service", "billing2", "MyApp", "gantry"] {
            assert!(validate_project_name(name).is_ok(), "failed for: {name}");
        }
    }
}
