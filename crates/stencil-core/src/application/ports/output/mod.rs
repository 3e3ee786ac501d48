//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `stencil-adapters` crate provides implementations.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::domain::{
    ConfigSnapshot, ProjectStructure, RelativePath, RenderContext, TemplateTree, TreeId,
};
use crate::error::StencilResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `stencil_adapters::filesystem::LocalFilesystem` (production)
/// - `stencil_adapters::filesystem::MemoryFilesystem` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Directory relative destinations are resolved against.
    fn current_dir(&self) -> StencilResult<PathBuf>;

    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> StencilResult<()>;

    /// Write content to a file, replacing whatever was there.
    fn write_file(&self, path: &Path, content: &[u8]) -> StencilResult<()>;

    /// Read a whole file.
    fn read_file(&self, path: &Path) -> StencilResult<Vec<u8>>;

    /// Set or clear the executable bit.
    fn set_permissions(&self, path: &Path, executable: bool) -> StencilResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;
}

/// Port for the read-only template bundles.
///
/// Implemented by:
/// - `stencil_adapters::template_store::EmbeddedTemplateStore` (compiled in)
/// - `stencil_adapters::template_store::InMemoryTemplateStore` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait TemplateStore: Send + Sync {
    /// Source paths of every entry in `tree`, in bundle order.
    fn list(&self, tree: TreeId) -> StencilResult<Vec<RelativePath>>;

    /// Raw bytes of one entry.
    fn open(&self, tree: TreeId, path: &RelativePath) -> StencilResult<Vec<u8>>;
}

/// Port for template rendering.
///
/// Implemented by:
/// - `stencil_adapters::renderer::SubstitutionRenderer` (`{{KEY}}` substitution)
#[cfg_attr(test, mockall::automock)]
pub trait TemplateRenderer: Send + Sync {
    /// Render a template tree into a project structure.
    ///
    /// # Arguments
    ///
    /// * `tree` - The tree to render
    /// * `context` - Variable substitution context
    /// * `output_root` - Root directory for output paths
    fn render(
        &self,
        tree: &TemplateTree,
        context: &RenderContext,
        output_root: &Path,
    ) -> StencilResult<ProjectStructure>;
}

/// Codec failure, reported with the codec's own message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct CodecError(pub String);

/// Port for the config snapshot's on-disk format.
///
/// Implemented by:
/// - `stencil_adapters::codec::YamlSnapshotCodec`
#[cfg_attr(test, mockall::automock)]
pub trait SnapshotCodec: Send + Sync {
    fn encode(&self, snapshot: &ConfigSnapshot) -> Result<String, CodecError>;

    /// Unknown keys are ignored; missing keys decode as empty strings.
    fn decode(&self, text: &str) -> Result<ConfigSnapshot, CodecError>;
}

/// Port for wall-clock facts.
#[cfg_attr(test, mockall::automock)]
pub trait Clock: Send + Sync {
    fn current_year(&self) -> i32;
}
