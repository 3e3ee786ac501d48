//! Template trees compiled into the binary.
//!
//! Each tree is a fixed table of `include_bytes!` entries under
//! `templates/<tree>/`. Table order is render order.

use stencil_core::{
    application::{ApplicationError, ports::TemplateStore},
    domain::{RelativePath, TreeId},
    error::{StencilError, StencilResult},
};

struct Bundled {
    path: &'static str,
    bytes: &'static [u8],
}

macro_rules! bundle {
    ($tree:literal, [$($path:literal),* $(,)?]) => {
        &[$(
            Bundled {
                path: $path,
                bytes: include_bytes!(concat!(
                    env!("CARGO_MANIFEST_DIR"),
                    "/templates/",
                    $tree,
                    "/",
                    $path
                )),
            },
        )*]
    };
}

static FOUNDATION: &[Bundled] = bundle!(
    "foundation",
    [
        "Taskfile.yml.tmpl",
        "Taskfile.common.yml",
        "appicon.png",
        "darwin/Taskfile.yml",
        "linux/Taskfile.yml",
        "linux/appimage/build.sh.tmpl",
        "windows/Taskfile.yml",
    ]
);

static EVOLVING: &[Bundled] = bundle!(
    "evolving",
    [
        "appdata.yaml.tmpl",
        "darwin/Info.plist.tmpl",
        "darwin/Info.dev.plist.tmpl",
        "windows/info.json.tmpl",
        "windows/app.manifest.tmpl",
        "linux/nfpm/nfpm.yaml.tmpl",
    ]
);

/// Read-only store over the bundled trees.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedTemplateStore;

impl EmbeddedTemplateStore {
    pub fn new() -> Self {
        Self
    }

    fn table(tree: TreeId) -> &'static [Bundled] {
        match tree {
            TreeId::Foundation => FOUNDATION,
            TreeId::Evolving => EVOLVING,
        }
    }
}

impl TemplateStore for EmbeddedTemplateStore {
    fn list(&self, tree: TreeId) -> StencilResult<Vec<RelativePath>> {
        Self::table(tree)
            .iter()
            .map(|b| RelativePath::try_new(b.path).map_err(StencilError::from))
            .collect()
    }

    fn open(&self, tree: TreeId, path: &RelativePath) -> StencilResult<Vec<u8>> {
        Self::table(tree)
            .iter()
            .find(|b| path.as_path() == std::path::Path::new(b.path))
            .map(|b| b.bytes.to_vec())
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
    use stencil_core::domain::{
        DomainValidator, RenderContext, TemplateEntry, TemplateTree, variables,
    };

    fn load(tree: TreeId) -> TemplateTree {
        let store = EmbeddedTemplateStore::new();
        let mut out = TemplateTree::new(tree);
        for path in store.list(tree).unwrap() {
            let bytes = store.open(tree, &path).unwrap();
            out.push(TemplateEntry::from_bytes(path, bytes).unwrap());
        }
        out
    }

    #[test]
    fn both_trees_are_valid() {
        for tree in TreeId::ALL {
            let loaded = load(tree);
            assert!(!loaded.is_empty());
            DomainValidator::validate_tree(&loaded).unwrap();
        }
    }

    #[test]
    fn evolving_tree_carries_the_snapshot() {
        let outputs: Vec<String> = load(TreeId::Evolving)
            .entries()
            .iter()
            .map(|e| e.output_path().to_string())
            .collect();
        assert!(outputs.contains(&"appdata.yaml".to_string()));
    }

    #[test]
    fn evolving_tree_renders_from_snapshot_fields_alone() {
        let ctx = RenderContext::new()
            .with_variable(variables::BINARY_NAME, "b")
            .with_variable(variables::PRODUCT_NAME, "n")
            .with_variable(variables::PRODUCT_DESCRIPTION, "d")
            .with_variable(variables::PRODUCT_VERSION, "v")
            .with_variable(variables::PRODUCT_COMPANY, "c")
            .with_variable(variables::PRODUCT_COPYRIGHT, "r")
            .with_variable(variables::PRODUCT_COMMENTS, "m")
            .with_variable(variables::PRODUCT_IDENTIFIER, "i")
            .with_variable(variables::CONFIG_SNAPSHOT, "s");

        for entry in load(TreeId::Evolving).entries() {
            if let stencil_core::domain::TemplateContent::Text(text) = &entry.content {
                ctx.render(text)
                    .unwrap_or_else(|e| panic!("{}: {e}", entry.path));
            }
        }
    }

    #[test]
    fn unknown_entry_is_reported() {
        let err = EmbeddedTemplateStore::new()
            .open(TreeId::Foundation, &RelativePath::try_new("nope.txt").unwrap())
            .unwrap_err();
        assert!(err.to_string().contains("nope.txt"));
    }
}
