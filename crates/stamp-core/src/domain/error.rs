// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (errors travel through the CLI by value)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("Project name cannot be empty")]
    EmptyProjectName,

    #[error("Absolute paths not allowed: {path}")]
    AbsolutePathNotAllowed { path: String },

    // ========================================================================
    // Tree shape violations
    // ========================================================================
    #[error("Entry '{path}' is outside the template root '{root}'")]
    EntryOutsideRoot { path: String, root: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::EmptyProjectName => vec![
                "Pass a project name with --name <NAME>".into(),
                "Example: stamp new --name my-api".into(),
            ],
            Self::AbsolutePathNotAllowed { path } => vec![
                format!("Template entries must be relative: {}", path),
                "Check the template directory layout".into(),
            ],
            Self::EntryOutsideRoot { root, .. } => vec![
                format!("Every template entry must live under '{}'", root),
                "Check the template directory layout".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::EmptyProjectName => ErrorCategory::Validation,
            Self::AbsolutePathNotAllowed { .. } | Self::EntryOutsideRoot { .. } => {
                ErrorCategory::Internal
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Internal,
}
