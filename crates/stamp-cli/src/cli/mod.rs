//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::GlobalArgs;

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "stamp",
    bin_name = "stamp",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Create a new REST API project from a bundled template",
    long_about = "Stamp copies a bundled template tree into a new project \
                  directory, substituting the project name and stripping \
                  `.tmpl` suffixes from file names.",
    after_help = "EXAMPLES:\n\
        \x20 stamp new --name orders\n\
        \x20 stamp new -n orders --output ~/src --dry-run\n\
        \x20 stamp completions bash > /usr/share/bash-completion/completions/stamp",
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
    /// Create a new project from the template.
    #[command(
        about = "Create a new REST API project",
        after_help = "EXAMPLES:\n\
            \x20 stamp new --name orders\n\
            \x20 stamp new -n orders --template-dir ./my-template\n\
            \x20 stamp new -n orders --dry-run"
    )]
    New(NewArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 stamp completions bash > ~/.local/share/bash-completion/completions/stamp\n\
            \x20 stamp completions zsh  > ~/.zfunc/_stamp\n\
            \x20 stamp completions fish > ~/.config/fish/completions/stamp.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the Stamp configuration.
    #[command(
        about = "Configuration inspection",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 stamp config show\n\
            \x20 stamp config path"
    )]
    Config(ConfigCommands),
}

// ── new ───────────────────────────────────────────────────────────────────────

/// Arguments for `stamp new`.
#[derive(Debug, Args)]
pub struct NewArgs {
    /// Name of the project.  Also the name of the directory created.
    #[arg(
        short = 'n',
        long = "name",
        value_name = "NAME",
        required = true,
        help = "Name of the project (required)"
    )]
    pub name: String,

    /// Parent directory for the new project.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "DIR",
        help = "Output directory (default: current directory)"
    )]
    pub output: Option<PathBuf>,

    /// Use a template directory on disk instead of the bundled one.
    #[arg(
        long = "template-dir",
        value_name = "DIR",
        help = "Template directory to use instead of the bundled template",
        long_help = "Template directory to use instead of the bundled template.\n\n\
                     Files ending in .tmpl are rendered. `{{.name}}` is replaced with the \
                     project name, then `{{ProjectName}}` and `{{ModuleName}}` are expanded \
                     as Handlebars variables. Go-style `{{.ProjectName}}` is not accepted."
    )]
    pub template_dir: Option<PathBuf>,

    /// Preview what would be created without writing any files.
    #[arg(long = "dry-run", help = "Show what would be created without creating")]
    pub dry_run: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `stamp completions`.
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

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `stamp config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the effective configuration as TOML.
    Show,
    /// Print the path to the default configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
