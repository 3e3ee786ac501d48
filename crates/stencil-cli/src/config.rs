//! Application settings.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns settings; the core crate never sees them.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. `STENCIL__<SECTION>__<KEY>` environment variables
//! 3. Settings file (TOML, optional unless named with `--config-file`)
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

use stencil_core::domain::{DEFAULT_CONFIG_FILE, DEFAULT_UPDATE_DIR};

/// Application settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Output settings.
    pub output: OutputConfig,
    /// Defaults for `stencil update`.
    pub update: UpdateConfig,
    /// Defaults for `stencil generate` product fields.
    #[serde(default)]
    pub generate: GenerateConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    pub no_color: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateConfig {
    pub directory: PathBuf,
    pub config_file: String,
}

/// Organisation-wide fallbacks, used only when the flag is absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub copyright: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            output: OutputConfig { no_color: false },
            update: UpdateConfig {
                directory: PathBuf::from(DEFAULT_UPDATE_DIR),
                config_file: DEFAULT_CONFIG_FILE.into(),
            },
            generate: GenerateConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load settings, layering file and environment over the defaults.
    ///
    /// `config_file` is the path the user passed via `--config-file`; when
    /// given it must exist unless `allow_missing` is set (as for
    /// `config init`, which is about to create it). Otherwise the default
    /// location is read if present.
    pub fn load(config_file: Option<&PathBuf>, allow_missing: bool) -> anyhow::Result<Self> {
        let (path, required) = match config_file {
            Some(path) => (path.clone(), !allow_missing),
            None => (Self::config_path(), false),
        };

        Self::load_from(&path, required, Environment::with_prefix("STENCIL"))
    }

    fn load_from(path: &Path, required: bool, env: Environment) -> anyhow::Result<Self> {
        let defaults = Self::default();

        let settings = Config::builder()
            .set_default("output.no_color", defaults.output.no_color)?
            .set_default(
                "update.directory",
                defaults.update.directory.display().to_string(),
            )?
            .set_default("update.config_file", defaults.update.config_file)?
            .add_source(
                File::from(path)
                    .format(FileFormat::Toml)
                    .required(required),
            )
            .add_source(env.prefix_separator("__").separator("__"))
            .build()
            .with_context(|| format!("reading settings from {}", path.display()))?;

        settings
            .try_deserialize()
            .with_context(|| format!("invalid settings in {}", path.display()))
    }

    /// Path to the default settings file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.stencil.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "stencil", "stencil")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".stencil.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn no_env() -> Environment {
        Environment::with_prefix("STENCIL").source(Some(HashMap::new()))
    }

    #[test]
    fn defaults_match_update_conventions() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.update.directory, PathBuf::from("build"));
        assert_eq!(cfg.update.config_file, "appdata.yaml");
        assert!(!cfg.output.no_color);
        assert_eq!(cfg.generate.company, None);
    }

    #[test]
    fn missing_optional_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = AppConfig::load_from(&dir.path().join("absent.toml"), false, no_env()).unwrap();
        assert_eq!(cfg, AppConfig::default());
    }

    #[test]
    fn missing_required_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(AppConfig::load_from(&dir.path().join("absent.toml"), true, no_env()).is_err());
    }

    #[test]
    fn file_values_override_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stencil.toml");
        std::fs::write(
            &path,
            "[update]\ndirectory = \"packaging\"\n\n[generate]\ncompany = \"Acme\"\n",
        )
        .unwrap();

        let cfg = AppConfig::load_from(&path, true, no_env()).unwrap();
        assert_eq!(cfg.update.directory, PathBuf::from("packaging"));
        assert_eq!(cfg.update.config_file, "appdata.yaml");
        assert_eq!(cfg.generate.company.as_deref(), Some("Acme"));
    }

    #[test]
    fn environment_overrides_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stencil.toml");
        std::fs::write(&path, "[update]\nconfig_file = \"from-file.yaml\"\n").unwrap();

        let env = Environment::with_prefix("STENCIL").source(Some(HashMap::from([(
            "STENCIL__UPDATE__CONFIG_FILE".to_string(),
            "from-env.yaml".to_string(),
        )])));
        let cfg = AppConfig::load_from(&path, true, env).unwrap();
        assert_eq!(cfg.update.config_file, "from-env.yaml");
    }

    #[test]
    fn defaults_serialize_to_toml() {
        let text = toml::to_string_pretty(&AppConfig::default()).unwrap();
        assert!(text.contains("[update]"));
        assert!(text.contains("config_file = \"appdata.yaml\""));
    }
}
