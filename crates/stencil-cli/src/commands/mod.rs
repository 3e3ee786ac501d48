//! Command handlers, one module per subcommand.

pub mod completions;
pub mod config;
pub mod generate;
pub mod list;
pub mod update;

use stencil_adapters::{
    EmbeddedTemplateStore, LocalFilesystem, SubstitutionRenderer, YamlSnapshotCodec,
};
use stencil_core::application::AssetService;

/// Service wired to the bundled templates and the real filesystem.
pub(crate) fn asset_service() -> AssetService {
    AssetService::new(
        Box::new(EmbeddedTemplateStore::new()),
        Box::new(SubstitutionRenderer::new()),
        Box::new(YamlSnapshotCodec::new()),
        Box::new(LocalFilesystem::new()),
    )
}
