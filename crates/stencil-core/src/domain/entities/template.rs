//! Template trees and the render context bound against them.
//!
//! ## Model
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  TemplateTree (one per TreeId)                              │
//! │  └── Vec<TemplateEntry>                                     │
//! │       ├── path         (source path, may end in .tmpl)      │
//! │       ├── content      Text (rendered) | Binary (copied)    │
//! │       └── permissions  derived from the output path         │
//! ├─────────────────────────────────────────────────────────────┤
//! │  RenderContext                                              │
//! │  └── {{BINARY_NAME}} -> "my-app"                            │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Two trees exist. The **foundation** tree is rendered once when a project
//! is created and never again. The **evolving** tree is re-rendered by every
//! update, from the config snapshot it wrote the first time.
//!
//! ## Placeholders
//!
//! `{{KEY}}` where `KEY` is `SCREAMING_SNAKE_CASE`; surrounding spaces inside
//! the braces are allowed. Anything else between braces (go-task's
//! `{{.CLI_ARGS}}`, Handlebars helpers, JSX) is left alone. Substitution is a
//! single left-to-right pass: inserted values are never rescanned. Referencing
//! a key that is not bound is an error.

use std::collections::{BTreeMap, HashSet};
use std::fmt;
use std::str::FromStr;

use crate::domain::{
    entities::{
        common::{Permissions, RelativePath},
        parameters::ParameterSet,
        snapshot::ConfigSnapshot,
    },
    error::DomainError,
};

/// Variable names bound into a [`RenderContext`].
pub mod variables {
    pub const BINARY_NAME: &str = "BINARY_NAME";
    pub const PRODUCT_NAME: &str = "PRODUCT_NAME";
    pub const PRODUCT_DESCRIPTION: &str = "PRODUCT_DESCRIPTION";
    pub const PRODUCT_VERSION: &str = "PRODUCT_VERSION";
    pub const PRODUCT_COMPANY: &str = "PRODUCT_COMPANY";
    pub const PRODUCT_COPYRIGHT: &str = "PRODUCT_COPYRIGHT";
    pub const PRODUCT_COMMENTS: &str = "PRODUCT_COMMENTS";
    pub const PRODUCT_IDENTIFIER: &str = "PRODUCT_IDENTIFIER";
    /// Codec encoding of the snapshot, body of the persisted config file.
    pub const CONFIG_SNAPSHOT: &str = "CONFIG_SNAPSHOT";
    /// Only bound at generation time; evolving templates must not use it.
    pub const PROJECT_NAME: &str = "PROJECT_NAME";
}

// ============================================================================
// Tree identity
// ============================================================================

/// Which of the two template trees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TreeId {
    /// Rendered once, at project creation.
    Foundation,
    /// Rendered at creation and on every update.
    Evolving,
}

impl TreeId {
    pub const ALL: [TreeId; 2] = [TreeId::Foundation, TreeId::Evolving];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Foundation => "foundation",
            Self::Evolving => "evolving",
        }
    }
}

impl fmt::Display for TreeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TreeId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "foundation" => Ok(Self::Foundation),
            "evolving" => Ok(Self::Evolving),
            other => Err(DomainError::InvalidTemplate(format!(
                "unknown template tree '{other}'"
            ))),
        }
    }
}

// ============================================================================
// Entries
// ============================================================================

/// Content of one tree entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateContent {
    /// Rendered through the [`RenderContext`].
    Text(String),
    /// Copied byte for byte.
    Binary(Vec<u8>),
}

/// One file of a template tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateEntry {
    pub path: RelativePath,
    pub content: TemplateContent,
    pub permissions: Permissions,
}

impl TemplateEntry {
    /// Classify raw bytes by the entry's source path.
    ///
    /// `.tmpl` entries must be UTF-8 text; everything else is copied through.
    pub fn from_bytes(path: RelativePath, bytes: Vec<u8>) -> Result<Self, DomainError> {
        let content = if path.is_template() {
            let text = String::from_utf8(bytes).map_err(|_| DomainError::NonUtf8Template {
                path: path.to_string(),
            })?;
            TemplateContent::Text(text)
        } else {
            TemplateContent::Binary(bytes)
        };
        let permissions = permissions_for(&path.output_path());

        Ok(Self {
            path,
            content,
            permissions,
        })
    }

    /// Where this entry lands relative to the destination directory.
    pub fn output_path(&self) -> RelativePath {
        self.path.output_path()
    }
}

/// Shell scripts are written executable; everything else is a regular file.
fn permissions_for(output: &RelativePath) -> Permissions {
    match output.as_path().extension().and_then(|e| e.to_str()) {
        Some("sh") | Some("command") => Permissions::executable(),
        _ => Permissions::regular(),
    }
}

// ============================================================================
// Tree
// ============================================================================

/// Ordered, read-only set of entries for one [`TreeId`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateTree {
    id: TreeId,
    entries: Vec<TemplateEntry>,
}

impl TemplateTree {
    pub fn new(id: TreeId) -> Self {
        Self {
            id,
            entries: Vec::new(),
        }
    }

    pub fn push(&mut self, entry: TemplateEntry) {
        self.entries.push(entry);
    }

    pub fn with_entry(mut self, entry: TemplateEntry) -> Self {
        self.push(entry);
        self
    }

    pub fn id(&self) -> TreeId {
        self.id
    }

    pub fn entries(&self) -> &[TemplateEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// A tree must have entries and no two entries may land on one path.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.entries.is_empty() {
            return Err(DomainError::InvalidTemplate(format!(
                "{} tree has no entries",
                self.id
            )));
        }

        let mut seen = HashSet::new();
        for entry in &self.entries {
            let out = entry.output_path();
            if !seen.insert(out.clone()) {
                return Err(DomainError::DuplicatePath {
                    path: out.to_string(),
                });
            }
        }

        Ok(())
    }
}

// ============================================================================
// Render context
// ============================================================================

/// Variables available to `{{KEY}}` placeholders.
///
/// Built from a full [`ParameterSet`] when generating, or from a stored
/// [`ConfigSnapshot`] when updating. The two differ only in
/// [`variables::PROJECT_NAME`], which a snapshot does not carry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderContext {
    variables: BTreeMap<String, String>,
}

impl RenderContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Context for a generate run.
    pub fn from_parameters(params: &ParameterSet, encoded_snapshot: impl Into<String>) -> Self {
        Self::from_snapshot(&params.snapshot(), encoded_snapshot)
            .with_variable(variables::PROJECT_NAME, params.name())
    }

    /// Context for an update run.
    pub fn from_snapshot(snapshot: &ConfigSnapshot, encoded_snapshot: impl Into<String>) -> Self {
        use variables::*;

        Self::new()
            .with_variable(BINARY_NAME, &snapshot.binary)
            .with_variable(PRODUCT_NAME, &snapshot.product_name)
            .with_variable(PRODUCT_DESCRIPTION, &snapshot.product_description)
            .with_variable(PRODUCT_VERSION, &snapshot.product_version)
            .with_variable(PRODUCT_COMPANY, &snapshot.product_company)
            .with_variable(PRODUCT_COPYRIGHT, &snapshot.product_copyright)
            .with_variable(PRODUCT_COMMENTS, &snapshot.product_comments)
            .with_variable(PRODUCT_IDENTIFIER, &snapshot.product_identifier)
            .with_variable(CONFIG_SNAPSHOT, encoded_snapshot)
    }

    pub fn with_variable(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.variables.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.variables.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.variables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    /// Replace every `{{KEY}}` in `template`.
    ///
    /// # Errors
    ///
    /// - `UnboundVariable` when a well-formed key has no value
    /// - `UnterminatedPlaceholder` when `{{KEY` is never closed
    pub fn render(&self, template: &str) -> Result<String, DomainError> {
        let mut out = String::with_capacity(template.len());
        let mut rest = template;
        let mut consumed = 0;

        while let Some(open) = rest.find("{{") {
            out.push_str(&rest[..open]);
            let inner_start = &rest[open + 2..];

            let Some(close) = inner_start.find("}}") else {
                if inner_start
                    .trim_start()
                    .starts_with(|c: char| c.is_ascii_uppercase())
                {
                    return Err(DomainError::UnterminatedPlaceholder {
                        offset: consumed + open,
                    });
                }
                out.push_str(&rest[open..]);
                return Ok(out);
            };

            let key = inner_start[..close].trim();
            if is_variable_name(key) {
                let value = self.get(key).ok_or_else(|| DomainError::UnboundVariable {
                    name: key.to_string(),
                })?;
                out.push_str(value);
                let step = open + 2 + close + 2;
                consumed += step;
                rest = &rest[step..];
            } else {
                // Not ours: emit one brace and rescan, so `{{{KEY}}}` still
                // substitutes the inner placeholder.
                out.push('{');
                consumed += open + 1;
                rest = &rest[open + 1..];
            }
        }

        out.push_str(rest);
        Ok(out)
    }
}

fn is_variable_name(s: &str) -> bool {
    let mut chars = s.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_uppercase())
        && chars.all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx() -> RenderContext {
        RenderContext::new()
            .with_variable("BINARY_NAME", "my-app")
            .with_variable("PRODUCT_NAME", "My Product")
    }

    fn entry(path: &str, bytes: &[u8]) -> TemplateEntry {
        TemplateEntry::from_bytes(RelativePath::try_new(path).unwrap(), bytes.to_vec()).unwrap()
    }

    #[test]
    fn substitutes_known_placeholders() {
        let out = ctx().render("bin={{BINARY_NAME}} name={{ PRODUCT_NAME }}").unwrap();
        assert_eq!(out, "bin=my-app name=My Product");
    }

    #[test]
    fn foreign_brace_syntax_passes_through() {
        let src = "cmds:\n  - go build -o {{.BIN_DIR}}/{{BINARY_NAME}} {{.CLI_ARGS}}\n";
        let out = ctx().render(src).unwrap();
        assert_eq!(out, "cmds:\n  - go build -o {{.BIN_DIR}}/my-app {{.CLI_ARGS}}\n");
    }

    #[test]
    fn triple_braces_keep_outer_pair() {
        assert_eq!(ctx().render("{{{BINARY_NAME}}}").unwrap(), "{my-app}");
    }

    #[test]
    fn unbound_variable_is_an_error() {
        let err = ctx().render("{{PROJECT_NAME}}").unwrap_err();
        assert_eq!(
            err,
            DomainError::UnboundVariable {
                name: "PROJECT_NAME".into()
            }
        );
    }

    #[test]
    fn unterminated_placeholder_is_an_error() {
        let err = ctx().render("ok {{BINARY_NAME").unwrap_err();
        assert_eq!(err, DomainError::UnterminatedPlaceholder { offset: 3 });

        // lone braces that could never be a key are left alone
        assert_eq!(ctx().render("a {{ . b").unwrap(), "a {{ . b");
    }

    #[test]
    fn substituted_values_are_not_rescanned() {
        let c = RenderContext::new().with_variable("A", "{{B}}");
        assert_eq!(c.render("{{A}}").unwrap(), "{{B}}");
    }

    #[test]
    fn snapshot_context_omits_project_name() {
        let c = RenderContext::from_snapshot(&ConfigSnapshot::default(), "");
        assert!(c.get(variables::PROJECT_NAME).is_none());
        assert_eq!(c.get(variables::BINARY_NAME), Some(""));
        assert_eq!(c.len(), 9);
    }

    #[test]
    fn entries_are_classified_by_suffix() {
        let t = entry("windows/info.json.tmpl", b"{}");
        assert!(matches!(t.content, TemplateContent::Text(_)));
        assert_eq!(t.output_path().to_string(), "windows/info.json");

        let b = entry("appicon.png", &[0x89, b'P', b'N', b'G']);
        assert!(matches!(b.content, TemplateContent::Binary(_)));
    }

    #[test]
    fn non_utf8_template_is_rejected() {
        let err = TemplateEntry::from_bytes(
            RelativePath::try_new("bad.txt.tmpl").unwrap(),
            vec![0xff, 0xfe],
        )
        .unwrap_err();
        assert!(matches!(err, DomainError::NonUtf8Template { .. }));
    }

    #[test]
    fn shell_scripts_are_executable() {
        assert!(entry("linux/build.sh.tmpl", b"#!/bin/sh").permissions.executable_flag());
        assert!(!entry("Taskfile.yml.tmpl", b"").permissions.executable_flag());
    }

    #[test]
    fn tree_rejects_colliding_output_paths() {
        let tree = TemplateTree::new(TreeId::Evolving)
            .with_entry(entry("info.json", b"{}"))
            .with_entry(entry("info.json.tmpl", b"{}"));
        assert!(matches!(tree.validate(), Err(DomainError::DuplicatePath { .. })));
        assert!(TemplateTree::new(TreeId::Foundation).validate().is_err());
    }

    #[test]
    fn tree_id_parses_case_insensitively() {
        assert_eq!("Evolving".parse::<TreeId>().unwrap(), TreeId::Evolving);
        assert!("other".parse::<TreeId>().is_err());
    }
}
