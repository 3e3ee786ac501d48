//! `stencil config`: inspect and initialise the settings file.

use std::path::{Path, PathBuf};

use crate::{
    cli::ConfigCommands,
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

/// Dispatch to the correct config subcommand.
///
/// `settings_path` is the file named with `--config-file`, if any; it takes
/// the place of the default location for `path` and `init`.
pub fn execute(
    cmd: ConfigCommands,
    config: AppConfig,
    settings_path: Option<PathBuf>,
    output: OutputManager,
) -> CliResult<()> {
    let path = settings_path.unwrap_or_else(AppConfig::config_path);

    match cmd {
        ConfigCommands::Get { key } => {
            let value = get_config_value(&config, &key)?;
            output.print(&value)?;
        }

        ConfigCommands::List => {
            output.header("Current Settings:")?;
            output.print(&to_toml(&config)?)?;
        }

        ConfigCommands::Path => {
            output.print(&path.display().to_string())?;
        }

        ConfigCommands::Init { force } => {
            init(&path, force)?;
            output.success(&format!("Wrote default settings to {}", path.display()))?;
        }
    }

    Ok(())
}

// ── helpers ───────────────────────────────────────────────────────────────────

fn get_config_value(config: &AppConfig, key: &str) -> CliResult<String> {
    match key {
        "output.no_color" => Ok(config.output.no_color.to_string()),
        "update.directory" => Ok(config.update.directory.display().to_string()),
        "update.config_file" => Ok(config.update.config_file.clone()),
        "generate.company" => Ok(config.generate.company.clone().unwrap_or_default()),
        "generate.copyright" => Ok(config.generate.copyright.clone().unwrap_or_default()),
        _ => Err(CliError::InvalidInput {
            message: format!("Unknown settings key: '{key}'"),
        }),
    }
}

fn to_toml(config: &AppConfig) -> CliResult<String> {
    toml::to_string_pretty(config).map_err(|e| CliError::ConfigError {
        message: format!("Failed to serialise settings: {e}"),
        source: Some(Box::new(e)),
    })
}

/// Write the built-in defaults to `path`, refusing to clobber without `force`.
fn init(path: &Path, force: bool) -> CliResult<()> {
    if path.exists() && !force {
        return Err(CliError::ConfigExists {
            path: path.to_path_buf(),
        });
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_cli_context(|| format!("creating {}", parent.display()))?;
    }

    let text = to_toml(&AppConfig::default())?;
    std::fs::write(path, text).with_cli_context(|| format!("writing {}", path.display()))?;
    tracing::info!(path = %path.display(), "settings file written");
    Ok(())
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_known_keys() {
        let cfg = AppConfig::default();
        assert_eq!(get_config_value(&cfg, "update.directory").unwrap(), "build");
        assert_eq!(
            get_config_value(&cfg, "update.config_file").unwrap(),
            "appdata.yaml"
        );
        assert_eq!(get_config_value(&cfg, "output.no_color").unwrap(), "false");
        assert_eq!(get_config_value(&cfg, "generate.company").unwrap(), "");
    }

    #[test]
    fn get_unknown_key_is_user_error() {
        let err = get_config_value(&AppConfig::default(), "does.not.exist").unwrap_err();
        assert!(matches!(err, CliError::InvalidInput { .. }));
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn init_writes_defaults_and_creates_parents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        init(&path, false).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let parsed: AppConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed, AppConfig::default());
    }

    #[test]
    fn init_refuses_to_overwrite_without_force() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "# mine\n").unwrap();

        let err = init(&path, false).unwrap_err();
        assert!(matches!(err, CliError::ConfigExists { .. }));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "# mine\n");

        init(&path, true).unwrap();
        assert!(std::fs::read_to_string(&path).unwrap().contains("[update]"));
    }
}
