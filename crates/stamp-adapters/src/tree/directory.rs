//! Template tree backed by a directory on disk.
//!
//! The directory's own name becomes the tree root, so `--template-dir
//! ./skeleton` yields entries `skeleton`, `skeleton/README.md.tmpl`, ... and
//! the generator strips `skeleton/` when mapping to output paths.

use std::{
    fs,
    path::{Path, PathBuf},
};

use tracing::{debug, instrument, warn};
use walkdir::WalkDir;

use stamp_core::{
    application::{ApplicationError, ports::TemplateTree},
    domain::{EntryKind, RelativePath, TreeEntry},
    error::StampResult,
};

/// Reads a template tree from a directory with `walkdir`.
///
/// Symlinks are not followed and are skipped with a `WARN` log.
#[derive(Debug, Clone)]
pub struct DirectoryTree {
    dir: PathBuf,
    root_name: String,
}

impl DirectoryTree {
    /// Open `dir` as a template tree.
    ///
    /// # Errors
    ///
    /// Returns [`ApplicationError::TreeTraversal`] if the directory does not
    /// exist, is not a directory, or has no usable final path component.
    pub fn open(dir: impl Into<PathBuf>) -> StampResult<Self> {
        let dir = dir.into();
        let canonical = dir.canonicalize().map_err(|e| traversal(&dir, e))?;

        if !canonical.is_dir() {
            return Err(ApplicationError::TreeTraversal {
                reason: format!("'{}' is not a directory", dir.display()),
            }
            .into());
        }

        let root_name = canonical
            .file_name()
            .and_then(|n| n.to_str())
            .map(str::to_owned)
            .ok_or_else(|| ApplicationError::TreeTraversal {
                reason: format!("'{}' has no usable directory name", dir.display()),
            })?;

        Ok(Self {
            dir: canonical,
            root_name,
        })
    }
}

impl TemplateTree for DirectoryTree {
    fn root_name(&self) -> String {
        self.root_name.clone()
    }

    #[instrument(skip(self), fields(dir = %self.dir.display()))]
    fn walk(&self) -> StampResult<Vec<TreeEntry>> {
        let mut entries = Vec::new();

        for walk_entry in WalkDir::new(&self.dir).sort_by_file_name() {
            let walk_entry = walk_entry.map_err(|e| ApplicationError::TreeTraversal {
                reason: format!("directory walk error: {e}"),
            })?;

            let rel = walk_entry.path().strip_prefix(&self.dir).map_err(|_| {
                ApplicationError::TreeTraversal {
                    reason: format!(
                        "failed to relativise '{}' against '{}'",
                        walk_entry.path().display(),
                        self.dir.display()
                    ),
                }
            })?;

            let kind = if walk_entry.file_type().is_dir() {
                EntryKind::Directory
            } else if walk_entry.file_type().is_file() {
                EntryKind::File
            } else {
                warn!(path = %walk_entry.path().display(), "skipping non-regular entry");
                continue;
            };

            let path = RelativePath::try_new(Path::new(&self.root_name).join(rel))?;
            entries.push(TreeEntry { path, kind });
        }

        debug!(count = entries.len(), "walked template directory");
        Ok(entries)
    }

    fn read(&self, path: &Path) -> StampResult<Vec<u8>> {
        let rel = path
            .strip_prefix(&self.root_name)
            .map_err(|_| ApplicationError::TreeTraversal {
                reason: format!(
                    "'{}' is not inside tree root '{}'",
                    path.display(),
                    self.root_name
                ),
            })?;

        let absolute = self.dir.join(rel);
        fs::read(&absolute).map_err(|e| {
            ApplicationError::FilesystemError {
                path: absolute,
                reason: format!("Failed to read template file: {e}"),
            }
            .into()
        })
    }
}

fn traversal(dir: &Path, e: std::io::Error) -> ApplicationError {
    ApplicationError::TreeTraversal {
        reason: format!("cannot open template directory '{}': {e}", dir.display()),
    }
}
