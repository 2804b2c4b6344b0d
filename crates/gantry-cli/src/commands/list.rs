//! Implementation of the `gantry list` command.

use gantry_adapters::InMemoryLayoutStore;
use gantry_core::application::ScaffoldService;

use crate::{
    cli::{ListArgs, ListFormat, global::GlobalArgs},
    error::{CliError, CliResult},
    output::OutputManager,
};

pub fn execute(args: ListArgs, _global: GlobalArgs, output: OutputManager) -> CliResult<()> {
    use gantry_adapters::{LocalFilesystem, SimpleRenderer};

    let store = Box::new(InMemoryLayoutStore::with_builtin().map_err(CliError::Core)?);
    let service = ScaffoldService::new(
        store,
        Box::new(SimpleRenderer::new()),
        Box::new(LocalFilesystem::new()),
    );
    let layouts = service.list_layouts().map_err(CliError::Core)?;

    // The global --output-format json wins over the default table view so
    // `gantry --output-format json list` behaves as expected.
    let format = match (args.format, output.format()) {
        (ListFormat::Table, crate::cli::OutputFormat::Json) => ListFormat::Json,
        (format, _) => format,
    };

    match format {
        ListFormat::Table => {
            output.header("Available Layouts:")?;
            for layout in &layouts {
                let router = layout.router.as_deref().unwrap_or("none");
                output.print(&format!(
                    "  {:<10} {:<10} {}",
                    layout.name, router, layout.description
                ))?;
            }
        }

        ListFormat::List => {
            for layout in &layouts {
                println!("{}", layout.name);
            }
        }

        ListFormat::Json => {
            // Serialise as a JSON array to stdout (bypasses OutputManager
            // because JSON output must be parseable even in non-TTY pipes).
            let values: Vec<serde_json::Value> = layouts
                .iter()
                .map(|layout| {
                    serde_json::json!({
                        "name": layout.name,
                        "display_name": layout.display_name,
                        "description": layout.description,
                        "router": layout.router,
                        "tags": layout.tags,
                    })
                })
                .collect();
            let json = serde_json::to_string_pretty(&values).unwrap_or_else(|_| "[]".into());
            println!("{json}");
        }

        ListFormat::Csv => {
            println!("name,router,description");
            for layout in &layouts {
                println!(
                    "{},{},{}",
                    layout.name,
                    layout.router.as_deref().unwrap_or(""),
                    layout.description
                );
            }
        }
    }

    Ok(())
}
