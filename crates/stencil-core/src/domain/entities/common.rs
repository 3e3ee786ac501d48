use super::DomainError;
use std::fmt;
use std::path::{Component, Path, PathBuf};

/// Suffix marking a tree entry as a text template.
pub const TEMPLATE_SUFFIX: &str = ".tmpl";

/// A filesystem path guaranteed to stay inside the directory it is joined to.
///
/// Invariant: never absolute, never contains `..`. Enforced at construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RelativePath(PathBuf);

impl RelativePath {
    /// Fallible constructor.
    pub fn try_new(path: impl Into<PathBuf>) -> Result<Self, DomainError> {
        let path = path.into();
        if path.is_absolute() || path.has_root() {
            return Err(DomainError::AbsolutePathNotAllowed {
                path: path.display().to_string(),
            });
        }
        if path
            .components()
            .any(|c| matches!(c, Component::ParentDir | Component::Prefix(_)))
        {
            return Err(DomainError::PathEscapesRoot {
                path: path.display().to_string(),
            });
        }
        if path.as_os_str().is_empty() {
            return Err(DomainError::InvalidTemplate("empty entry path".into()));
        }
        Ok(Self(path))
    }

    /// `true` when the last segment carries the template suffix.
    pub fn is_template(&self) -> bool {
        self.file_name()
            .is_some_and(|name| name.len() > TEMPLATE_SUFFIX.len() && name.ends_with(TEMPLATE_SUFFIX))
    }

    /// The path a tree entry is materialized at: template suffix removed.
    pub fn output_path(&self) -> Self {
        match self.file_name() {
            Some(name) if self.is_template() => {
                let stem = &name[..name.len() - TEMPLATE_SUFFIX.len()];
                Self(self.0.with_file_name(stem))
            }
            _ => self.clone(),
        }
    }

    pub fn as_path(&self) -> &Path {
        &self.0
    }

    pub fn into_path_buf(self) -> PathBuf {
        self.0
    }

    fn file_name(&self) -> Option<&str> {
        self.0.file_name().and_then(|n| n.to_str())
    }
}

impl AsRef<Path> for RelativePath {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

impl TryFrom<&str> for RelativePath {
    type Error = DomainError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::try_new(s)
    }
}

impl fmt::Display for RelativePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}

/// Permissions a materialized file should carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Permissions {
    executable: bool,
}

impl Permissions {
    pub const fn regular() -> Self {
        Self { executable: false }
    }

    pub const fn executable() -> Self {
        Self { executable: true }
    }

    pub const fn executable_flag(&self) -> bool {
        self.executable
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_absolute_and_parent_paths() {
        assert!(matches!(
            RelativePath::try_new("/etc/passwd"),
            Err(DomainError::AbsolutePathNotAllowed { .. })
        ));
        assert!(matches!(
            RelativePath::try_new("darwin/../../x"),
            Err(DomainError::PathEscapesRoot { .. })
        ));
        assert!(RelativePath::try_new("").is_err());
    }

    #[test]
    fn template_suffix_is_stripped_from_output_path() {
        let p = RelativePath::try_new("darwin/Info.plist.tmpl").unwrap();
        assert!(p.is_template());
        assert_eq!(p.output_path().as_path(), Path::new("darwin/Info.plist"));
    }

    #[test]
    fn plain_entries_keep_their_path() {
        let p = RelativePath::try_new("appicon.png").unwrap();
        assert!(!p.is_template());
        assert_eq!(p.output_path(), p);

        // a file literally named ".tmpl" has no stem to keep
        let bare = RelativePath::try_new("dir/.tmpl").unwrap();
        assert!(!bare.is_template());
    }
}
