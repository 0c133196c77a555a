//! Template tree adapters.
//!
//! | Adapter          | Source                                   |
//! |------------------|------------------------------------------|
//! | [`EmbeddedTree`] | `template/` compiled into the binary     |
//! | [`DirectoryTree`]| A template directory on disk             |
//! | [`MemoryTree`]   | Files held in memory (tests, embedding)  |
//!
//! [`resolve_tree`] picks one at runtime.

use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
};

use stamp_core::{
    domain::{EntryKind, RelativePath, TreeEntry},
    error::StampResult,
};

mod directory;
mod embedded;
mod memory;
mod resolve;

pub use directory::DirectoryTree;
pub use embedded::EmbeddedTree;
pub use memory::MemoryTree;
pub use resolve::{TEMPLATE_DIR_ENV, resolve_tree};

/// Build a walk listing from file paths and explicit directories.
///
/// Every path must start with `root`. Ancestor directories of each file are
/// synthesised, and the result is sorted so the root comes first and every
/// directory precedes its descendants.
pub(crate) fn assemble_entries(
    root: &str,
    files: impl IntoIterator<Item = PathBuf>,
    directories: impl IntoIterator<Item = PathBuf>,
) -> StampResult<Vec<TreeEntry>> {
    let mut kinds: BTreeMap<PathBuf, EntryKind> = BTreeMap::new();
    kinds.insert(PathBuf::from(root), EntryKind::Directory);

    for dir in directories {
        add_with_ancestors(&mut kinds, &dir, EntryKind::Directory);
    }
    for file in files {
        add_with_ancestors(&mut kinds, &file, EntryKind::File);
    }

    kinds
        .into_iter()
        .map(|(path, kind)| {
            Ok(TreeEntry {
                path: RelativePath::try_new(path)?,
                kind,
            })
        })
        .collect()
}

fn add_with_ancestors(kinds: &mut BTreeMap<PathBuf, EntryKind>, path: &Path, kind: EntryKind) {
    for ancestor in path.ancestors().skip(1) {
        if ancestor.as_os_str().is_empty() {
            break;
        }
        kinds
            .entry(ancestor.to_path_buf())
            .or_insert(EntryKind::Directory);
    }
    kinds.insert(path.to_path_buf(), kind);
}

/// Convert a path relative to the tree root into a `/`-separated key.
pub(crate) fn to_key(relative: &Path) -> Option<String> {
    let segments = relative
        .components()
        .map(|c| c.as_os_str().to_str())
        .collect::<Option<Vec<_>>>()?;
    Some(segments.join("/"))
}
