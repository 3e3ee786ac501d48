//! Application layer errors.
//!
//! These errors represent failures in orchestration: filesystem access,
//! config read-back and template materialization. Template-content errors
//! are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::TreeId;
use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// The template bundle has no entries for a tree.
    #[error("Template tree '{tree}' not found")]
    TemplateTreeMissing { tree: TreeId },

    /// A listed entry could not be opened.
    #[error("Template entry '{path}' not found in '{tree}' tree")]
    TemplateEntryMissing { tree: TreeId, path: String },

    /// Rendering a single entry failed.
    #[error("Template rendering failed for {path}: {reason}")]
    RenderingFailed { path: String, reason: String },

    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// `update` was asked to run without a config file name.
    #[error("config file required for update")]
    ConfigRequired,

    /// The named config file is not in the destination directory.
    #[error("config file {} does not exist", path.display())]
    ConfigMissing { path: PathBuf },

    /// The config file exists but could not be decoded.
    #[error("config file {} is not a valid snapshot: {reason}", path.display())]
    ConfigInvalid { path: PathBuf, reason: String },

    /// Shared adapter state was poisoned.
    #[error("Adapter state lock poisoned")]
    StoreLockError,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::ConfigRequired => vec![
                "Pass the snapshot written by 'generate' with --config".into(),
                "The default name is appdata.yaml".into(),
            ],
            Self::ConfigMissing { path } => vec![
                format!("Expected a config snapshot at {}", path.display()),
                "Run 'stencil generate' first, or point --dir at the generated build directory"
                    .into(),
            ],
            Self::ConfigInvalid { .. } => vec![
                "The config snapshot could not be parsed".into(),
                "Fix the YAML by hand or regenerate it with 'stencil generate'".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
            ],
            Self::TemplateTreeMissing { tree } => vec![
                format!("No '{tree}' templates are bundled with this build"),
                "This is a packaging problem; please report it".into(),
            ],
            Self::TemplateEntryMissing { path, .. } => vec![
                format!("The bundle lists {path} but has no content for it"),
                "This is a packaging problem; please report it".into(),
            ],
            Self::RenderingFailed { path, .. } => vec![
                format!("Check the placeholders in {path}"),
                "Evolving templates may only use fields stored in the config snapshot".into(),
            ],
            Self::StoreLockError => vec!["Check the error details above".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ConfigRequired | Self::ConfigInvalid { .. } => ErrorCategory::Validation,
            Self::ConfigMissing { .. }
            | Self::TemplateTreeMissing { .. }
            | Self::TemplateEntryMissing { .. } => ErrorCategory::NotFound,
            Self::RenderingFailed { .. } => ErrorCategory::Rendering,
            Self::FilesystemError { .. } => ErrorCategory::Filesystem,
            Self::StoreLockError => ErrorCategory::Internal,
        }
    }
}
