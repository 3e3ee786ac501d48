//! Parameter resolution: destination directory plus field defaults.

use std::path::{Component, Path, PathBuf};

use tracing::debug;

use crate::{
    application::ports::Filesystem,
    domain::{ParameterSet, RawParameters, ResolveEnv, DEFAULT_GENERATE_DIR},
    error::StencilResult,
};

/// Turn `directory` into an absolute, existing directory.
///
/// An empty path means `default`. Relative paths are joined onto the
/// filesystem's current directory and lexically cleaned (`.` dropped, `..`
/// folded). A missing directory is created together with its ancestors;
/// creation errors propagate unchanged.
pub fn resolve_destination(
    filesystem: &dyn Filesystem,
    directory: &Path,
    default: &str,
) -> StencilResult<PathBuf> {
    let directory = if directory.as_os_str().is_empty() {
        Path::new(default)
    } else {
        directory
    };

    let absolute = if directory.is_absolute() {
        directory.to_path_buf()
    } else {
        filesystem.current_dir()?.join(directory)
    };
    let absolute = clean(&absolute);

    if !filesystem.exists(&absolute) {
        debug!(path = %absolute.display(), "Creating destination directory");
        filesystem.create_dir_all(&absolute)?;
    }

    Ok(absolute)
}

/// Resolve raw generate options into a [`ParameterSet`].
///
/// The only fallible step is the destination directory.
pub fn resolve_parameters(
    filesystem: &dyn Filesystem,
    raw: &RawParameters,
    env: ResolveEnv,
) -> StencilResult<ParameterSet> {
    let destination = resolve_destination(filesystem, &raw.directory, DEFAULT_GENERATE_DIR)?;
    Ok(ParameterSet::from_raw(raw, destination, env))
}

fn clean(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                // `pop` refuses to go above the root, like `filepath.Clean`
                out.pop();
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}
