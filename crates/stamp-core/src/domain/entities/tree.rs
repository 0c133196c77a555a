//! Template tree nodes.
//!
//! A template tree is a read-only hierarchy of directories and files rooted
//! at a single named directory (the *tree root*, `template` for the bundled
//! tree). Entry paths always include that root segment:
//!
//! ```text
//! template                      <- the root itself, skipped on output
//! template/src                  <- directory
//! template/src/main.rs.tmpl     <- file, written as src/main.rs
//! ```

use std::fmt;

use super::common::RelativePath;

/// File-name suffix marking a template file; dropped from output names.
pub const TEMPLATE_SUFFIX: &str = ".tmpl";

/// Name of the root directory of the tree bundled with the binary.
pub const BUNDLED_ROOT: &str = "template";

/// Whether a node is a directory or a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EntryKind {
    Directory,
    File,
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Directory => write!(f, "dir"),
            Self::File => write!(f, "file"),
        }
    }
}

/// One node of a template tree.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TreeEntry {
    pub path: RelativePath,
    pub kind: EntryKind,
}

impl TreeEntry {
    #[cfg(test)]
    pub fn directory(path: impl Into<RelativePath>) -> Self {
        Self {
            path: path.into(),
            kind: EntryKind::Directory,
        }
    }

    #[cfg(test)]
    pub fn file(path: impl Into<RelativePath>) -> Self {
        Self {
            path: path.into(),
            kind: EntryKind::File,
        }
    }

    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }
}
