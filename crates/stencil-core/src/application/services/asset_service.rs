//! Asset Service - main application orchestrator.
//!
//! Two use cases:
//!
//! - **generate**: resolve parameters, render the foundation tree, render the
//!   evolving tree (which writes the config snapshot).
//! - **update**: read the snapshot back and render the evolving tree only.
//!
//! Rendering overwrites whatever is at the destination. Nothing is diffed and
//! nothing is rolled back: files written before a failure stay on disk. The
//! foundation tree is never touched by `update`, which is what keeps user
//! edits to those files safe.

use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument};

use crate::{
    application::{
        ApplicationError,
        ports::{Filesystem, SnapshotCodec, TemplateRenderer, TemplateStore},
        services::resolver,
    },
    domain::{
        ConfigSnapshot, DEFAULT_UPDATE_DIR, DomainValidator as validator, FsEntry, ParameterSet,
        ProjectStructure, RawParameters, RelativePath, RenderContext, ResolveEnv, TemplateEntry,
        TemplateTree, TreeId,
    },
    error::{Context, StencilError, StencilResult},
};

/// What one tree render wrote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderReport {
    pub tree: TreeId,
    pub destination: PathBuf,
    /// Paths relative to `destination`, in write order.
    pub written: Vec<PathBuf>,
}

/// Outcome of a generate run.
#[derive(Debug, Clone)]
pub struct GenerateReport {
    pub parameters: ParameterSet,
    pub foundation: RenderReport,
    pub evolving: RenderReport,
}

/// Inputs of an update run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateRequest {
    /// Empty means [`DEFAULT_UPDATE_DIR`].
    pub directory: PathBuf,
    /// Snapshot file name inside `directory`. Must not be empty.
    pub config_name: String,
}

/// Main generation service.
pub struct AssetService {
    store: Box<dyn TemplateStore>,
    renderer: Box<dyn TemplateRenderer>,
    codec: Box<dyn SnapshotCodec>,
    filesystem: Box<dyn Filesystem>,
}

impl AssetService {
    /// Create a new asset service with the given adapters.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let service = AssetService::new(
    ///     Box::new(EmbeddedTemplateStore::new()),
    ///     Box::new(SubstitutionRenderer::new()),
    ///     Box::new(YamlSnapshotCodec::new()),
    ///     Box::new(LocalFilesystem::new()),
    /// );
    /// ```
    pub fn new(
        store: Box<dyn TemplateStore>,
        renderer: Box<dyn TemplateRenderer>,
        codec: Box<dyn SnapshotCodec>,
        filesystem: Box<dyn Filesystem>,
    ) -> Self {
        Self {
            store,
            renderer,
            codec,
            filesystem,
        }
    }

    /// Resolve raw options into a parameter set, creating the destination.
    pub fn resolve(&self, raw: &RawParameters, env: ResolveEnv) -> StencilResult<ParameterSet> {
        resolver::resolve_parameters(self.filesystem.as_ref(), raw, env)
    }

    /// Generate both trees into the resolved destination.
    #[instrument(skip_all, fields(name = %raw.name, directory = %raw.directory.display()))]
    pub fn generate(&self, raw: &RawParameters, env: ResolveEnv) -> StencilResult<GenerateReport> {
        let parameters = self.resolve(raw, env)?;
        info!(
            destination = %parameters.destination().display(),
            binary = %parameters.binary(),
            identifier = %parameters.product_identifier(),
            "Generating build assets"
        );

        let encoded = self.encode(&parameters.snapshot())?;
        let context = RenderContext::from_parameters(&parameters, encoded);

        let foundation = self.render_tree(TreeId::Foundation, parameters.destination(), &context)?;
        let evolving = self.render_tree(TreeId::Evolving, parameters.destination(), &context)?;

        info!(
            files = foundation.written.len() + evolving.written.len(),
            "Build assets generated"
        );
        Ok(GenerateReport {
            parameters,
            foundation,
            evolving,
        })
    }

    /// Re-render the evolving tree from a stored snapshot.
    #[instrument(skip_all, fields(directory = %request.directory.display(), config = %request.config_name))]
    pub fn update(&self, request: &UpdateRequest) -> StencilResult<RenderReport> {
        snapshot_name(&request.config_name)?;

        let destination = resolver::resolve_destination(
            self.filesystem.as_ref(),
            &request.directory,
            DEFAULT_UPDATE_DIR,
        )?;

        let snapshot = self.read_snapshot(&destination, &request.config_name)?;
        debug!(?snapshot, "Loaded config snapshot");

        let encoded = self.encode(&snapshot)?;
        let context = RenderContext::from_snapshot(&snapshot, encoded);
        let report = self.render_tree(TreeId::Evolving, &destination, &context)?;

        info!(files = report.written.len(), "Build assets updated");
        Ok(report)
    }

    /// Load the snapshot `config_name` from `destination`.
    pub fn read_snapshot(
        &self,
        destination: &Path,
        config_name: &str,
    ) -> StencilResult<ConfigSnapshot> {
        let path = destination.join(snapshot_name(config_name)?);
        if !self.filesystem.exists(&path) {
            return Err(ApplicationError::ConfigMissing { path }.into());
        }

        let bytes = self.filesystem.read_file(&path)?;
        let text = String::from_utf8(bytes).map_err(|e| ApplicationError::ConfigInvalid {
            path: path.clone(),
            reason: e.to_string(),
        })?;

        self.codec.decode(&text).map_err(|e| {
            ApplicationError::ConfigInvalid {
                path,
                reason: e.to_string(),
            }
            .into()
        })
    }

    /// Render one tree into `destination`, overwriting existing files.
    #[instrument(skip(self, context), fields(destination = %destination.display()))]
    pub fn render_tree(
        &self,
        tree: TreeId,
        destination: &Path,
        context: &RenderContext,
    ) -> StencilResult<RenderReport> {
        let template = self.load_tree(tree)?;
        let structure = self.renderer.render(&template, context, destination)?;
        validator::validate_project_structure(&structure).map_err(StencilError::Domain)?;

        let written = self.write_structure(&structure)?;
        info!(%tree, files = written.len(), "Tree rendered");

        Ok(RenderReport {
            tree,
            destination: destination.to_path_buf(),
            written,
        })
    }

    /// Output paths a tree produces, in bundle order.
    pub fn list_tree(&self, tree: TreeId) -> StencilResult<Vec<RelativePath>> {
        Ok(self
            .load_tree(tree)?
            .entries()
            .iter()
            .map(TemplateEntry::output_path)
            .collect())
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    fn encode(&self, snapshot: &ConfigSnapshot) -> StencilResult<String> {
        self.codec
            .encode(snapshot)
            .context("encoding config snapshot")
    }

    fn load_tree(&self, id: TreeId) -> StencilResult<TemplateTree> {
        let paths = self.store.list(id)?;
        if paths.is_empty() {
            return Err(ApplicationError::TemplateTreeMissing { tree: id }.into());
        }

        let mut tree = TemplateTree::new(id);
        for path in paths {
            let bytes = self.store.open(id, &path)?;
            tree.push(TemplateEntry::from_bytes(path, bytes)?);
        }

        validator::validate_tree(&tree)?;
        debug!(tree = %id, entries = tree.len(), "Template tree loaded");
        Ok(tree)
    }

    /// Write every entry, stopping at the first failure.
    fn write_structure(&self, structure: &ProjectStructure) -> StencilResult<Vec<PathBuf>> {
        self.filesystem.create_dir_all(structure.root())?;

        let mut written = Vec::new();
        for entry in structure.entries() {
            match entry {
                FsEntry::Directory(dir) => {
                    self.filesystem
                        .create_dir_all(&structure.root().join(&dir.path))?;
                }
                FsEntry::File(file) => {
                    let path = structure.root().join(&file.path);

                    if let Some(parent) = path.parent() {
                        self.filesystem.create_dir_all(parent)?;
                    }

                    self.filesystem.write_file(&path, &file.content)?;

                    if file.permissions.executable_flag() {
                        self.filesystem.set_permissions(&path, true)?;
                    }
                    written.push(file.path.clone());
                }
            }
        }

        Ok(written)
    }
}

/// The snapshot lives inside the destination: no root, no `..`.
fn snapshot_name(config_name: &str) -> StencilResult<RelativePath> {
    if config_name.is_empty() {
        return Err(ApplicationError::ConfigRequired.into());
    }
    RelativePath::try_new(config_name).map_err(StencilError::Domain)
}
