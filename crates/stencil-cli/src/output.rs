//! Terminal output for stencil commands.
//!
//! Progress goes to stdout and is dropped under `-q` or a command's
//! `--silent`. Errors go to stderr and are never dropped.

use std::io::{self, IsTerminal};

use console::Term;
use owo_colors::OwoColorize;
use serde::Serialize;

use crate::cli::global::{GlobalArgs, OutputFormat};
use crate::config::AppConfig;
use crate::error::CliError;

/// Writes command output according to the global flags and settings.
pub struct OutputManager {
    resolved_format: OutputFormat,
    quiet: bool,
    no_color: bool,
    stdout: Term,
    stderr: Term,
}

impl OutputManager {
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        // Auto becomes Human on a terminal, Plain when piped.
        let resolved_format = match args.output_format {
            OutputFormat::Auto if io::stdout().is_terminal() => OutputFormat::Human,
            OutputFormat::Auto => OutputFormat::Plain,
            other => other,
        };

        Self {
            resolved_format,
            quiet: args.quiet,
            no_color: args.no_color || config.output.no_color,
            stdout: Term::stdout(),
            stderr: Term::stderr(),
        }
    }

    /// Same manager, additionally quiet when `silent` is set.
    pub fn silenced(mut self, silent: bool) -> Self {
        self.quiet |= silent;
        self
    }

    /// Plain progress line.
    pub fn print(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.stdout.write_line(msg)
    }

    /// `✓ <msg>` in green.
    pub fn success(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{2713} {msg}")
        } else {
            format!("{} {}", "\u{2713}".green().bold(), msg.green())
        };
        self.stdout.write_line(&line)
    }

    /// `ℹ <msg>` in blue.
    pub fn info(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{2139} {msg}")
        } else {
            format!("{} {}", "\u{2139}".blue().bold(), msg.blue())
        };
        self.stdout.write_line(&line)
    }

    /// Section heading, e.g. a tree name in `stencil list`.
    pub fn header(&self, text: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            text.to_owned()
        } else {
            text.cyan().bold().to_string()
        };
        self.stdout.write_line(&line)
    }

    /// Pretty-printed JSON report.
    pub fn json<T: Serialize>(&self, value: &T) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let text = serde_json::to_string_pretty(value).map_err(io::Error::other)?;
        self.stdout.write_line(&text)
    }

    /// Report a failed command on stderr, with its suggestions.
    ///
    /// Ignores quiet mode.
    pub fn error(&self, err: &CliError, verbose: bool) -> io::Result<()> {
        self.stderr.write_str(&self.error_text(err, verbose))
    }

    fn error_text(&self, err: &CliError, verbose: bool) -> String {
        if !self.no_color && self.stderr.is_term() {
            err.format_colored(verbose)
        } else {
            err.format_plain(verbose)
        }
    }

    /// The resolved (non-Auto) output format.
    pub fn format(&self) -> OutputFormat {
        self.resolved_format
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manager(quiet: bool, no_color: bool) -> OutputManager {
        let args = GlobalArgs {
            verbose: 0,
            quiet,
            no_color,
            config_file: None,
            output_format: OutputFormat::Plain,
        };
        OutputManager::new(&args, &AppConfig::default())
    }

    fn config_required() -> CliError {
        CliError::Core(stencil_core::application::ApplicationError::ConfigRequired.into())
    }

    #[test]
    fn quiet_print_is_ok() {
        assert!(manager(true, true).print("hello").is_ok());
    }

    #[test]
    fn settings_can_disable_color() {
        let mut cfg = AppConfig::default();
        cfg.output.no_color = true;
        let args = GlobalArgs {
            verbose: 0,
            quiet: false,
            no_color: false,
            config_file: None,
            output_format: OutputFormat::Plain,
        };
        assert!(OutputManager::new(&args, &cfg).no_color);
    }

    #[test]
    fn silent_flag_makes_manager_quiet() {
        assert!(!manager(false, true).silenced(false).quiet);
        assert!(manager(false, true).silenced(true).quiet);
        assert!(manager(true, true).silenced(false).quiet);
    }

    #[test]
    fn silent_manager_still_reports_errors() {
        let out = manager(false, true).silenced(true);
        let text = out.error_text(&config_required(), false);
        assert!(text.contains("config file required for update"));
        assert!(out.error(&config_required(), false).is_ok());
    }

    #[test]
    fn error_text_without_color_has_no_ansi() {
        let text = manager(false, true).error_text(&config_required(), true);
        assert!(!text.contains('\u{1b}'));
        assert!(!text.contains("--verbose"));
    }

    #[test]
    fn json_is_suppressed_when_quiet() {
        assert!(manager(true, true).json(&vec!["a", "b"]).is_ok());
    }

    #[test]
    fn explicit_format_is_kept() {
        assert_eq!(manager(false, false).format(), OutputFormat::Plain);
    }
}
