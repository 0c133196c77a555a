//! In-memory template tree for tests and embedding.

use std::{
    collections::{BTreeMap, BTreeSet},
    path::{Path, PathBuf},
};

use stamp_core::{
    application::{ApplicationError, ports::TemplateTree},
    domain::TreeEntry,
    error::StampResult,
};

use super::assemble_entries;

/// Template tree assembled in code.
///
/// Paths given to the builder methods are relative to the root; the root
/// name is prepended automatically.
///
/// ```
/// use stamp_adapters::tree::MemoryTree;
///
/// let tree = MemoryTree::new("template")
///     .with_file("README.md.tmpl", "# {{ProjectName}}\n")
///     .with_directory("migrations");
/// ```
#[derive(Debug, Clone)]
pub struct MemoryTree {
    root: String,
    files: BTreeMap<PathBuf, Vec<u8>>,
    directories: BTreeSet<PathBuf>,
}

impl MemoryTree {
    pub fn new(root: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            files: BTreeMap::new(),
            directories: BTreeSet::new(),
        }
    }

    /// Add a file; parent directories are implied.
    pub fn with_file(mut self, path: impl AsRef<Path>, content: impl Into<Vec<u8>>) -> Self {
        let full = Path::new(&self.root).join(path);
        self.files.insert(full, content.into());
        self
    }

    /// Add a directory, which is kept even when empty.
    pub fn with_directory(mut self, path: impl AsRef<Path>) -> Self {
        let full = Path::new(&self.root).join(path);
        self.directories.insert(full);
        self
    }
}

impl TemplateTree for MemoryTree {
    fn root_name(&self) -> String {
        self.root.clone()
    }

    fn walk(&self) -> StampResult<Vec<TreeEntry>> {
        assemble_entries(
            &self.root,
            self.files.keys().cloned(),
            self.directories.iter().cloned(),
        )
    }

    fn read(&self, path: &Path) -> StampResult<Vec<u8>> {
        self.files.get(path).cloned().ok_or_else(|| {
            ApplicationError::TreeTraversal {
                reason: format!("no file '{}' in memory tree", path.display()),
            }
            .into()
        })
    }
}
