//! Application layer errors.
//!
//! These errors represent failures while walking the template tree, writing
//! output, or rendering content. Invalid names and paths are `DomainError`
//! from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during a generation run.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ApplicationError {
    /// The template tree could not be walked or read.
    #[error("Template tree error: {reason}")]
    TreeTraversal { reason: String },

    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// A `.tmpl` file's content is not valid UTF-8 text.
    #[error("Template {path} is not valid UTF-8: {reason}")]
    InvalidEncoding { path: PathBuf, reason: String },

    /// Stage-2 template syntax is malformed.
    #[error("Failed to parse template {path}: {reason}")]
    TemplateParse { path: PathBuf, reason: String },

    /// Stage-2 template failed while rendering.
    #[error("Failed to render template {path}: {reason}")]
    TemplateRender { path: PathBuf, reason: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::TreeTraversal { .. } => vec![
                "The template tree could not be read".into(),
                "If you passed --template-dir, check that it exists and is readable".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Check that the project name is a valid directory name".into(),
                "Files written before the failure were left in place".into(),
            ],
            Self::InvalidEncoding { path, .. } => vec![
                format!("Convert {} to UTF-8 text", path.display()),
                "Drop the .tmpl suffix to copy the file unchanged".into(),
            ],
            Self::TemplateParse { path, .. } => vec![
                format!("Fix the template syntax in {}", path.display()),
                "Only {{ProjectName}} and {{ModuleName}} are available".into(),
                "Files written before the failure were left in place".into(),
            ],
            Self::TemplateRender { path, .. } => vec![
                format!("Check the variables used in {}", path.display()),
                "Only {{ProjectName}} and {{ModuleName}} are available".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::TreeTraversal { .. } => ErrorCategory::Internal,
            Self::FilesystemError { .. } => ErrorCategory::Io,
            Self::InvalidEncoding { .. }
            | Self::TemplateParse { .. }
            | Self::TemplateRender { .. } => ErrorCategory::Template,
        }
    }
}
