//! `{{KEY}}` substitution renderer.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use stencil_core::{
    application::{ApplicationError, ports::TemplateRenderer},
    domain::{ProjectStructure, RenderContext, TemplateContent, TemplateTree},
    error::StencilResult,
};
use tracing::{instrument, trace};

/// Renderer that binds `{{KEY}}` placeholders from a [`RenderContext`].
///
/// Text entries are substituted in a single pass; binary entries are copied
/// through untouched. Parent directories are emitted once each, ahead of the
/// first file that needs them.
#[derive(Debug, Clone, Copy, Default)]
pub struct SubstitutionRenderer;

impl SubstitutionRenderer {
    /// Create a new substitution renderer.
    pub fn new() -> Self {
        Self
    }
}

impl TemplateRenderer for SubstitutionRenderer {
    #[instrument(skip_all, fields(tree = %tree.id(), entries = tree.len()))]
    fn render(
        &self,
        tree: &TemplateTree,
        context: &RenderContext,
        output_root: &Path,
    ) -> StencilResult<ProjectStructure> {
        let mut structure = ProjectStructure::new(output_root);
        let mut directories = BTreeSet::new();

        for entry in tree.entries() {
            let output = entry.output_path();

            for dir in parents(output.as_path()) {
                if directories.insert(dir.clone()) {
                    structure.add_directory(dir);
                }
            }

            let content = match &entry.content {
                TemplateContent::Text(text) => context
                    .render(text)
                    .map_err(|e| ApplicationError::RenderingFailed {
                        path: entry.path.to_string(),
                        reason: e.to_string(),
                    })?
                    .into_bytes(),
                TemplateContent::Binary(bytes) => bytes.clone(),
            };

            trace!(path = %output, bytes = content.len(), "Rendered entry");
            structure.add_file(output.into_path_buf(), content, entry.permissions);
        }

        Ok(structure)
    }
}

/// Ancestors of a relative path, outermost first, excluding the path itself.
fn parents(path: &Path) -> Vec<PathBuf> {
    let mut out: Vec<PathBuf> = path
        .ancestors()
        .skip(1)
        .filter(|p| !p.as_os_str().is_empty())
        .map(Path::to_path_buf)
        .collect();
    out.reverse();
    out
}
