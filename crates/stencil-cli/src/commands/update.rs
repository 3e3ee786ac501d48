//! Implementation of the `stencil update` command.

use serde::Serialize;
use tracing::instrument;

use stencil_core::application::UpdateRequest;

use crate::{
    cli::{OutputFormat, UpdateArgs},
    config::AppConfig,
    error::{CliResult, IntoCli},
    output::OutputManager,
};

/// Execute the `stencil update` command.
#[instrument(skip_all)]
pub fn execute(args: UpdateArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let output = output.silenced(args.silent);
    let request = update_request(args, config);

    let report = super::asset_service()
        .update(&request)
        .with_cli_context(|| "updating build assets")?;

    if output.format() == OutputFormat::Json {
        output.json(&UpdateSummary {
            destination: report.destination.display().to_string(),
            config: request.config_name,
            written: report
                .written
                .iter()
                .map(|p| p.display().to_string())
                .collect(),
        })?;
        return Ok(());
    }

    output.success(&format!(
        "Successfully updated build assets in {}",
        report.destination.display()
    ))?;
    for path in &report.written {
        output.print(&format!("  {}", path.display()))?;
    }

    Ok(())
}

/// Flags first, then settings. An explicitly empty `--config ""` stays empty
/// so the core can reject it.
fn update_request(args: UpdateArgs, config: AppConfig) -> UpdateRequest {
    UpdateRequest {
        directory: args.dir.unwrap_or(config.update.directory),
        config_name: args.config.unwrap_or(config.update.config_file),
    }
}

#[derive(Debug, Serialize)]
struct UpdateSummary {
    destination: String,
    config: String,
    written: Vec<String>,
}
