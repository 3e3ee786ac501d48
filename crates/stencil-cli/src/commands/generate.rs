//! Implementation of the `stencil generate` command.
//!
//! Responsibility: translate CLI arguments into `RawParameters`, call the
//! asset service, and display results. No defaulting logic lives here beyond
//! the settings-file fallbacks.

use serde::Serialize;
use tracing::instrument;

use stencil_adapters::SystemClock;
use stencil_core::{
    application::{GenerateReport, ports::Clock},
    domain::{RawParameters, ResolveEnv},
};

use crate::{
    cli::{GenerateArgs, OutputFormat},
    config::AppConfig,
    error::{CliResult, IntoCli},
    output::OutputManager,
};

/// Execute the `stencil generate` command.
#[instrument(skip_all, fields(dir = %args.dir.display()))]
pub fn execute(args: GenerateArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let output = output.silenced(args.silent);
    let raw = raw_parameters(args, &config);
    let env = ResolveEnv::host(SystemClock::new().current_year());

    let report = super::asset_service()
        .generate(&raw, env)
        .with_cli_context(|| "generating build assets")?;

    if output.format() == OutputFormat::Json {
        output.json(&GenerateSummary::from(&report))?;
        return Ok(());
    }

    let destination = report.parameters.destination().display().to_string();
    output.success(&format!("Generated build assets in {destination}"))?;
    output.info(&format!(
        "{} foundation files (yours to edit), {} evolving files (rewritten by 'stencil update')",
        report.foundation.written.len(),
        report.evolving.written.len(),
    ))?;
    output.print(&format!("  binary:     {}", report.parameters.binary()))?;
    output.print(&format!(
        "  identifier: {}",
        report.parameters.product_identifier()
    ))?;

    Ok(())
}

/// Flags first, then settings-file fallbacks; whatever is still empty is
/// defaulted by the core.
fn raw_parameters(args: GenerateArgs, config: &AppConfig) -> RawParameters {
    RawParameters {
        directory: args.dir,
        name: args.name.unwrap_or_default(),
        binary: args.binary.unwrap_or_default(),
        product_name: args.product_name.unwrap_or_default(),
        product_description: args.product_description.unwrap_or_default(),
        product_version: args.product_version.unwrap_or_default(),
        product_company: args
            .product_company
            .or_else(|| config.generate.company.clone())
            .unwrap_or_default(),
        product_copyright: args
            .product_copyright
            .or_else(|| config.generate.copyright.clone())
            .unwrap_or_default(),
        product_comments: args.product_comments.unwrap_or_default(),
        product_identifier: args.product_identifier.unwrap_or_default(),
    }
}

#[derive(Debug, Serialize)]
struct GenerateSummary {
    destination: String,
    binary: String,
    identifier: String,
    foundation: Vec<String>,
    evolving: Vec<String>,
}

impl From<&GenerateReport> for GenerateSummary {
    fn from(report: &GenerateReport) -> Self {
        let paths = |written: &[std::path::PathBuf]| {
            written
                .iter()
                .map(|p| p.display().to_string())
                .collect::<Vec<_>>()
        };
        Self {
            destination: report.parameters.destination().display().to_string(),
            binary: report.parameters.binary().to_string(),
            identifier: report.parameters.product_identifier().to_string(),
            foundation: paths(&report.foundation.written),
            evolving: paths(&report.evolving.written),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn settings_with_company(company: &str) -> AppConfig {
        let mut cfg = AppConfig::default();
        cfg.generate.company = Some(company.into());
        cfg
    }

    #[test]
    fn unset_flags_stay_empty_for_core_defaults() {
        let raw = raw_parameters(GenerateArgs::default(), &AppConfig::default());
        assert_eq!(raw.product_company, "");
        assert_eq!(raw.product_comments, "");
        assert_eq!(raw.directory, PathBuf::new());
    }

    #[test]
    fn settings_fill_missing_company() {
        let raw = raw_parameters(GenerateArgs::default(), &settings_with_company("Acme"));
        assert_eq!(raw.product_company, "Acme");
    }

    #[test]
    fn flag_beats_settings() {
        let args = GenerateArgs {
            product_company: Some("Flag Co".into()),
            ..Default::default()
        };
        let raw = raw_parameters(args, &settings_with_company("Acme"));
        assert_eq!(raw.product_company, "Flag Co");
    }
}
