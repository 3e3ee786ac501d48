// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (carried inside application errors)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Template tree errors
    // ========================================================================
    #[error("Invalid template: {0}")]
    InvalidTemplate(String),

    #[error("Duplicate path in template tree: {path}")]
    DuplicatePath { path: String },

    #[error("Absolute paths not allowed: {path}")]
    AbsolutePathNotAllowed { path: String },

    #[error("Path escapes the destination directory: {path}")]
    PathEscapesRoot { path: String },

    // ========================================================================
    // Substitution errors
    // ========================================================================
    #[error("Template variable '{name}' is not bound")]
    UnboundVariable { name: String },

    #[error("Unterminated placeholder starting at byte {offset}")]
    UnterminatedPlaceholder { offset: usize },

    #[error("Template '{path}' is not valid UTF-8")]
    NonUtf8Template { path: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::UnboundVariable { name } => vec![
                format!("The template references {{{{{name}}}}} but no value was bound"),
                "Evolving templates may only use fields stored in the config snapshot".into(),
            ],
            Self::UnterminatedPlaceholder { .. } => {
                vec!["Close every '{{KEY' placeholder with '}}'".into()]
            }
            Self::DuplicatePath { path } => vec![
                format!("Two template entries produce '{path}'"),
                "Remove either the plain file or its .tmpl twin".into(),
            ],
            Self::AbsolutePathNotAllowed { .. } | Self::PathEscapesRoot { .. } => vec![
                "Paths must stay inside the build directory".into(),
                "Name the config file relative to --dir, e.g. --config appdata.yaml".into(),
            ],
            _ => vec!["The bundled template tree is damaged; please report this".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::UnboundVariable { .. } | Self::UnterminatedPlaceholder { .. } => {
                ErrorCategory::Rendering
            }
            _ => ErrorCategory::Validation,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Rendering,
}
