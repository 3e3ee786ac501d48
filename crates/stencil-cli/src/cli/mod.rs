//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "stencil",
    bin_name = "stencil",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Generate and update build assets for an application",
    long_about = "stencil renders platform build assets (task files, packaging \
                  manifests, Info.plist, Windows resource metadata) into a \
                  build directory, and re-renders the metadata files later \
                  from the config snapshot it leaves behind.",
    after_help = "EXAMPLES:\n\
        \x20 stencil generate --dir build --name \"My App\" --product-company Acme\n\
        \x20 stencil update --dir build\n\
        \x20 stencil list --tree evolving\n\
        \x20 stencil completions bash > /usr/share/bash-completion/completions/stencil",
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
    /// Render both template trees into a directory.
    #[command(
        visible_alias = "gen",
        about = "Generate build assets",
        after_help = "EXAMPLES:\n\
            \x20 stencil generate --name \"My App\"\n\
            \x20 stencil generate --dir build --name tool --binary tool-cli\n\
            \x20 stencil generate --dir build --name \"My App\" --product-identifier com.acme.myapp"
    )]
    Generate(GenerateArgs),

    /// Re-render the evolving tree from a config snapshot.
    #[command(
        visible_alias = "up",
        about = "Update build assets from the config snapshot",
        after_help = "EXAMPLES:\n\
            \x20 stencil update\n\
            \x20 stencil update --dir packaging --config appdata.yaml"
    )]
    Update(UpdateArgs),

    /// List the files a template tree produces.
    #[command(
        visible_alias = "ls",
        about = "List bundled template files",
        after_help = "EXAMPLES:\n\
            \x20 stencil list\n\
            \x20 stencil list --tree foundation\n\
            \x20 stencil list --format json"
    )]
    List(ListArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 stencil completions bash > ~/.local/share/bash-completion/completions/stencil\n\
            \x20 stencil completions zsh  > ~/.zfunc/_stencil\n\
            \x20 stencil completions fish > ~/.config/fish/completions/stencil.fish"
    )]
    Completions(CompletionsArgs),

    /// Manage the stencil settings file.
    #[command(
        about = "Settings management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 stencil config init\n\
            \x20 stencil config get update.directory\n\
            \x20 stencil config list"
    )]
    Config(ConfigCommands),
}

// ── generate ──────────────────────────────────────────────────────────────────

/// Arguments for `stencil generate`.
///
/// Every product field is optional; unset fields take the documented default.
#[derive(Debug, Default, Args)]
pub struct GenerateArgs {
    /// Destination directory.
    #[arg(
        short = 'd',
        long = "dir",
        value_name = "DIR",
        default_value = ".",
        help = "The directory to generate the files into"
    )]
    pub dir: PathBuf,

    /// Project name; drives the binary and identifier defaults.
    #[arg(short = 'n', long = "name", value_name = "NAME", help = "The name of the project")]
    pub name: Option<String>,

    #[arg(long = "binary", value_name = "NAME", help = "The name of the binary")]
    pub binary: Option<String>,

    #[arg(long = "product-name", value_name = "TEXT", help = "The name of the product [default: My Product]")]
    pub product_name: Option<String>,

    #[arg(
        long = "product-description",
        value_name = "TEXT",
        help = "The description of the product [default: My Product Description]"
    )]
    pub product_description: Option<String>,

    #[arg(long = "product-version", value_name = "VERSION", help = "The version of the product [default: 0.1.0]")]
    pub product_version: Option<String>,

    #[arg(long = "product-company", value_name = "TEXT", help = "The company of the product [default: My Company]")]
    pub product_company: Option<String>,

    #[arg(
        long = "product-copyright",
        value_name = "TEXT",
        help = "The copyright notice [default: \u{a9} now, My Company]"
    )]
    pub product_copyright: Option<String>,

    #[arg(
        long = "product-comments",
        value_name = "TEXT",
        help = "Comments for the generated files [default: (c) <year> <company>]"
    )]
    pub product_comments: Option<String>,

    #[arg(
        long = "product-identifier",
        value_name = "ID",
        help = "The product identifier, e.g. com.mycompany.myproduct"
    )]
    pub product_identifier: Option<String>,

    /// Suppress progress output (errors still print).
    #[arg(short = 's', long = "silent", help = "Suppress output to console")]
    pub silent: bool,
}

// ── update ────────────────────────────────────────────────────────────────────

/// Arguments for `stencil update`.
#[derive(Debug, Default, Args)]
pub struct UpdateArgs {
    /// Directory holding the generated assets.
    #[arg(
        short = 'd',
        long = "dir",
        value_name = "DIR",
        help = "The directory to update [default: build]"
    )]
    pub dir: Option<PathBuf>,

    /// Snapshot file name inside the directory.
    #[arg(
        long = "config",
        value_name = "FILE",
        help = "The config file to use [default: appdata.yaml]"
    )]
    pub config: Option<String>,

    /// Suppress progress output (errors still print).
    #[arg(short = 's', long = "silent", help = "Suppress output to console")]
    pub silent: bool,
}

// ── list ──────────────────────────────────────────────────────────────────────

/// Arguments for `stencil list`.
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Restrict to one tree.
    #[arg(short = 't', long = "tree", value_enum, help = "Only list this tree")]
    pub tree: Option<TreeArg>,

    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ListFormat,
}

/// Template tree selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TreeArg {
    /// Rendered once by `generate`.
    Foundation,
    /// Re-rendered by every `update`.
    Evolving,
}

impl From<TreeArg> for stencil_core::domain::TreeId {
    fn from(arg: TreeArg) -> Self {
        match arg {
            TreeArg::Foundation => Self::Foundation,
            TreeArg::Evolving => Self::Evolving,
        }
    }
}

/// Output format for the `list` command.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ListFormat {
    /// Human-readable, grouped by tree.
    Table,
    /// One path per line.
    List,
    /// JSON array.
    Json,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `stencil completions`.
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

/// Subcommands for `stencil config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a settings key.
    Get {
        /// Dotted key path, e.g. `update.directory`.
        key: String,
    },
    /// Print all settings values.
    List,
    /// Print the path to the settings file.
    Path,
    /// Write a settings file with the built-in defaults.
    Init {
        /// Overwrite an existing settings file.
        #[arg(short = 'f', long = "force", help = "Overwrite existing settings")]
        force: bool,
    },
}

// ── tests ─────────────────────────────────────────────────────────────────────
