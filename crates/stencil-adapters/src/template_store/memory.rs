//! In-memory template store for tests and embedding callers.

use std::{
    collections::HashMap,
    sync::{Arc, RwLock},
};

use stencil_core::{
    application::{ApplicationError, ports::TemplateStore},
    domain::{RelativePath, TreeId},
    error::StencilResult,
};

/// Thread-safe in-memory template store. Insertion order is list order.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTemplateStore {
    inner: Arc<RwLock<HashMap<TreeId, Vec<(RelativePath, Vec<u8>)>>>>,
}

impl InMemoryTemplateStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace one entry.
    pub fn insert(
        &self,
        tree: TreeId,
        path: RelativePath,
        bytes: impl Into<Vec<u8>>,
    ) -> StencilResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;

        let entries = inner.entry(tree).or_default();
        let bytes = bytes.into();
        match entries.iter_mut().find(|(p, _)| *p == path) {
            Some(existing) => existing.1 = bytes,
            None => entries.push((path, bytes)),
        }
        Ok(())
    }

    /// Builder form of [`insert`](Self::insert) for test setup.
    pub fn with_entry(self, tree: TreeId, path: &str, bytes: impl Into<Vec<u8>>) -> StencilResult<Self> {
        self.insert(tree, RelativePath::try_new(path)?, bytes)?;
        Ok(self)
    }

    /// Number of entries in `tree`.
    pub fn len(&self, tree: TreeId) -> usize {
        self.inner
            .read()
            .map(|inner| inner.get(&tree).map_or(0, Vec::len))
            .unwrap_or(0)
    }
}

impl TemplateStore for InMemoryTemplateStore {
    fn list(&self, tree: TreeId) -> StencilResult<Vec<RelativePath>> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;

        Ok(inner
            .get(&tree)
            .map(|entries| entries.iter().map(|(p, _)| p.clone()).collect())
            .unwrap_or_default())
    }

    fn open(&self, tree: TreeId, path: &RelativePath) -> StencilResult<Vec<u8>> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;

        inner
            .get(&tree)
            .and_then(|entries| entries.iter().find(|(p, _)| p == path))
            .map(|(_, bytes)| bytes.clone())
            .ok_or_else(|| {
                ApplicationError::TemplateEntryMissing {
                    tree,
                    path: path.to_string(),
                }
                .into()
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_keeps_insertion_order() {
        let store = InMemoryTemplateStore::new()
            .with_entry(TreeId::Evolving, "z.txt", "z")
            .unwrap()
            .with_entry(TreeId::Evolving, "a.txt", "a")
            .unwrap();

        let listed: Vec<String> = store
            .list(TreeId::Evolving)
            .unwrap()
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(listed, vec!["z.txt", "a.txt"]);
        assert!(store.list(TreeId::Foundation).unwrap().is_empty());
    }

    #[test]
    fn insert_replaces_existing_entry() {
        let store = InMemoryTemplateStore::new()
            .with_entry(TreeId::Foundation, "a.txt", "old")
            .unwrap()
            .with_entry(TreeId::Foundation, "a.txt", "new")
            .unwrap();

        assert_eq!(store.len(TreeId::Foundation), 1);
        let path = RelativePath::try_new("a.txt").unwrap();
        assert_eq!(store.open(TreeId::Foundation, &path).unwrap(), b"new");
    }

    #[test]
    fn rejects_escaping_paths() {
        assert!(
            InMemoryTemplateStore::new()
                .with_entry(TreeId::Foundation, "../evil.sh", "x")
                .is_err()
        );
    }
}
