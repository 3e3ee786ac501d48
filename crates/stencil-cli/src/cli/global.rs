//! Flags accepted before or after any subcommand.

use std::path::PathBuf;

use clap::Args;
use tracing_subscriber::filter::LevelFilter;

/// Flags shared by every `stencil` subcommand.
#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Diagnostic detail on stderr; also expands error causes.
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        global = true,
        help = "Show more diagnostics (-v, -vv, -vvv)",
        long_help = "Show more diagnostics on stderr:
    (none)  - warnings and errors
    -v      - which trees were rendered and where
    -vv     - the loaded config snapshot
    -vvv    - every template entry as it is written"
    )]
    pub verbose: u8,

    /// Drop progress output; errors still print.
    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        conflicts_with = "verbose",
        help = "Only print errors"
    )]
    pub quiet: bool,

    /// Also honoured through `NO_COLOR` (<https://no-color.org>).
    #[arg(
        long = "no-color",
        global = true,
        env = "NO_COLOR",
        help = "Disable colored output"
    )]
    pub no_color: bool,

    /// stencil's own settings, not the `appdata.yaml` snapshot that
    /// `update --config` names.
    #[arg(
        short = 'c',
        long = "config-file",
        global = true,
        value_name = "FILE",
        help = "Read stencil settings from FILE"
    )]
    pub config_file: Option<PathBuf>,

    #[arg(
        long = "output-format",
        global = true,
        value_enum,
        default_value = "auto",
        help = "How to print command results"
    )]
    pub output_format: OutputFormat,
}

impl GlobalArgs {
    /// Default log level for the stencil crates; `--quiet` wins over `-v`.
    pub fn log_level(&self) -> LevelFilter {
        if self.quiet {
            return LevelFilter::ERROR;
        }
        match self.verbose {
            0 => LevelFilter::WARN,
            1 => LevelFilter::INFO,
            2 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        }
    }

    /// Error reports include the cause chain from `-v` up.
    pub fn verbose_errors(&self) -> bool {
        self.verbose > 0
    }
}

/// How command results are printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human on a terminal, plain when piped.
    #[default]
    Auto,
    /// Colored, with symbols.
    Human,
    /// No colors.
    Plain,
    /// A JSON report from `generate` and `update`.
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(verbose: u8, quiet: bool) -> GlobalArgs {
        GlobalArgs {
            verbose,
            quiet,
            no_color: true,
            config_file: None,
            output_format: OutputFormat::Auto,
        }
    }

    #[test]
    fn default_level_is_warn() {
        assert_eq!(args(0, false).log_level(), LevelFilter::WARN);
        assert!(!args(0, false).verbose_errors());
    }

    #[test]
    fn each_v_raises_the_level() {
        assert_eq!(args(1, false).log_level(), LevelFilter::INFO);
        assert_eq!(args(2, false).log_level(), LevelFilter::DEBUG);
        assert_eq!(args(3, false).log_level(), LevelFilter::TRACE);
        assert_eq!(args(10, false).log_level(), LevelFilter::TRACE);
        assert!(args(1, false).verbose_errors());
    }

    #[test]
    fn quiet_wins_over_verbose() {
        assert_eq!(args(3, true).log_level(), LevelFilter::ERROR);
    }
}
