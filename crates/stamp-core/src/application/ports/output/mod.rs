//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `stamp-adapters` crate provides implementations.

use crate::domain::{TemplateData, TreeEntry};
use crate::error::StampResult;
use std::path::Path;

/// Port for the read-only template source.
///
/// Implemented by:
/// - `stamp_adapters::tree::EmbeddedTree` (bundled with the binary)
/// - `stamp_adapters::tree::DirectoryTree` (on-disk template directory)
/// - `stamp_adapters::tree::MemoryTree` (testing)
///
/// ## Contract
///
/// - Every entry path starts with [`TemplateTree::root_name`]
/// - `walk` yields the root first and every directory before its descendants
/// - The tree never changes while a run is in progress
#[cfg_attr(test, mockall::automock)]
pub trait TemplateTree: Send + Sync {
    /// Name of the root directory, e.g. `template`.
    fn root_name(&self) -> String;

    /// List every entry under the root, depth-first.
    fn walk(&self) -> StampResult<Vec<TreeEntry>>;

    /// Read the full content of a file entry.
    fn read(&self, path: &Path) -> StampResult<Vec<u8>>;
}

/// Port for filesystem operations.
///
/// Implemented by:
/// - `stamp_adapters::filesystem::LocalFilesystem` (production)
/// - `stamp_adapters::filesystem::MemoryFilesystem` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    ///
    /// An existing directory is not an error.
    fn create_dir_all(&self, path: &Path) -> StampResult<()>;

    /// Create or truncate a file, write `content`, and close it.
    fn write_file(&self, path: &Path, content: &[u8]) -> StampResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Remove a directory and all contents.
    ///
    /// A missing path is not an error.
    fn remove_dir_all(&self, path: &Path) -> StampResult<()>;
}

/// Port for stage-2 template rendering.
///
/// Implemented by:
/// - `stamp_adapters::renderer::HandlebarsRenderer`
///
/// Stage 1 (`{{.name}}`) has already been applied to `source`; renderers
/// must not know about it.
#[cfg_attr(test, mockall::automock)]
pub trait TemplateRenderer: Send + Sync {
    /// Parse `source` and render it with `data`.
    ///
    /// # Arguments
    ///
    /// * `name` - Template name, used in error messages
    /// * `source` - Template text after stage 1
    /// * `data` - Variables visible to the template
    ///
    /// # Errors
    ///
    /// `ApplicationError::TemplateParse` for malformed syntax,
    /// `ApplicationError::TemplateRender` for failures while rendering.
    fn render(&self, name: &str, source: &str, data: &TemplateData) -> StampResult<String>;
}
