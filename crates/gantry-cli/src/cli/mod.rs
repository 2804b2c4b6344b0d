//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "gantry",
    bin_name = "gantry",
    version  = env!("CARGO_PKG_VERSION"),
    about    = "\u{1f3d7} Go project scaffolding and code generation",
    long_about = "Gantry creates Go service projects from built-in layouts \
                  and injects boilerplate components — handlers, models, \
                  middleware (auto-wired into your entry file), and database \
                  wiring — into existing projects.",
    after_help = "EXAMPLES:\n\
        \x20 gantry new my-api --layout chi\n\
        \x20 gantry add middleware recovery\n\
        \x20 gantry add handler users\n\
        \x20 gantry list\n\
        \x20 gantry completions bash > /usr/share/bash-completion/completions/gantry",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create a new project from a layout.
    #[command(
        visible_alias = "n",
        about = "Create a new project",
        after_help = "EXAMPLES:\n\
            \x20 gantry new my-api  --layout chi\n\
            \x20 gantry new my-api  --layout gin --module github.com/acme/my-api\n\
            \x20 gantry new my-api  --layout standard --dry-run"
    )]
    New(NewArgs),

    /// Inject a component into an existing project.
    #[command(
        visible_alias = "a",
        about = "Add a component to the current project",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 gantry add middleware recovery\n\
            \x20 gantry add middleware ratelimit --dry-run\n\
            \x20 gantry add handler users\n\
            \x20 gantry add model invoice\n\
            \x20 gantry add database postgres"
    )]
    Add(AddCommands),

    /// List available layouts.
    #[command(
        visible_alias = "ls",
        about = "List available layouts",
        after_help = "EXAMPLES:\n\
            \x20 gantry list\n\
            \x20 gantry list --format json"
    )]
    List(ListArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 gantry completions bash > ~/.local/share/bash-completion/completions/gantry\n\
            \x20 gantry completions zsh  > ~/.zfunc/_gantry\n\
            \x20 gantry completions fish > ~/.config/fish/completions/gantry.fish"
    )]
    Completions(CompletionsArgs),
}

// ── new ───────────────────────────────────────────────────────────────────────

/// Arguments for `gantry new`.
#[derive(Debug, Args)]
pub struct NewArgs {
    /// Project name or path.  A plain name creates `./name`; a path like
    /// `../foo` places the project one level up.
    #[arg(value_name = "NAME", help = "Project name or path")]
    pub name: String,

    /// Layout to scaffold from.
    #[arg(
        short = 'l',
        long = "layout",
        value_name = "LAYOUT",
        help = "Layout name (see: gantry list)"
    )]
    pub layout: Option<String>,

    /// Go module path for the generated project.
    #[arg(
        short = 'm',
        long = "module",
        value_name = "MODULE",
        help = "Go module path (default: <module-prefix>/<name>)"
    )]
    pub module: Option<String>,

    /// Skip the confirmation prompt.
    #[arg(
        short = 'y',
        long = "yes",
        help = "Skip confirmation and create immediately"
    )]
    pub yes: bool,

    /// Overwrite an existing directory (destructive).
    #[arg(long = "force", help = "Overwrite existing directory")]
    pub force: bool,

    /// Preview what would be created without writing any files.
    #[arg(long = "dry-run", help = "Show what would be created without creating")]
    pub dry_run: bool,
}

// ── add ───────────────────────────────────────────────────────────────────────

/// Subcommands for `gantry add`.
#[derive(Debug, Subcommand)]
pub enum AddCommands {
    /// Generate a middleware implementation and wire it into the entry file.
    #[command(
        about = "Add a middleware and auto-wire its registration",
        after_help = "KINDS:\n\
            \x20 recovery, cors          (early tier)\n\
            \x20 logging, compression    (middle tier)\n\
            \x20 auth, ratelimit, timeout (late tier)"
    )]
    Middleware(MiddlewareArgs),

    /// Generate an HTTP handler skeleton.
    #[command(about = "Add a handler")]
    Handler(NamedComponentArgs),

    /// Generate a model skeleton.
    #[command(about = "Add a model")]
    Model(NamedComponentArgs),

    /// Generate database wiring.
    #[command(about = "Add database wiring")]
    Database(DatabaseArgs),
}

/// Arguments for `gantry add middleware`.
#[derive(Debug, Args)]
pub struct MiddlewareArgs {
    /// Middleware kind. Validated against the registry by the wiring
    /// service, so unknown kinds surface with the full taxonomy.
    #[arg(value_name = "KIND", help = "Middleware kind (e.g. recovery, auth)")]
    pub kind: String,

    /// Preview the rewrite without prompting or writing.
    #[arg(long = "dry-run", help = "Preview the change without applying it")]
    pub dry_run: bool,

    /// Apply without the confirmation prompt.
    #[arg(short = 'y', long = "yes", help = "Skip confirmation and apply")]
    pub yes: bool,
}

/// Arguments for `gantry add handler` / `gantry add model`.
#[derive(Debug, Args)]
pub struct NamedComponentArgs {
    /// Component name (e.g. `users`, `invoice`).
    #[arg(value_name = "NAME", help = "Component name")]
    pub name: String,

    /// Overwrite an existing file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing file")]
    pub force: bool,
}

/// Arguments for `gantry add database`.
#[derive(Debug, Args)]
pub struct DatabaseArgs {
    /// Database driver.
    #[arg(value_enum, value_name = "DRIVER", help = "Database driver")]
    pub driver: Database,

    /// Overwrite an existing file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing file")]
    pub force: bool,
}

/// Supported database drivers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum Database {
    Postgres,
    Sqlite,
}

// ── list ──────────────────────────────────────────────────────────────────────

/// Arguments for `gantry list`.
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ListFormat,
}

/// Output format for the `list` command.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ListFormat {
    /// Human-readable table.
    Table,
    /// One name per line.
    List,
    /// JSON array.
    Json,
    /// CSV rows.
    Csv,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `gantry completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── tests ─────────────────────────────────────────────────────────────────────
