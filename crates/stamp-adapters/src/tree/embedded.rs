//! Template tree compiled into the binary.
//!
//! The `template/` directory next to this crate's `Cargo.toml` is embedded
//! with `rust-embed`. In debug builds `rust-embed` reads the files from disk
//! at runtime, so edits to the bundle show up without recompiling.

use std::path::{Path, PathBuf};

use rust_embed::RustEmbed;
use tracing::{debug, instrument};

use stamp_core::{
    application::{ApplicationError, ports::TemplateTree},
    domain::{BUNDLED_ROOT, TreeEntry},
    error::StampResult,
};

use super::{assemble_entries, to_key};

#[derive(RustEmbed)]
#[folder = "template/"]
struct Bundle;

/// The template tree that ships with `stamp`, rooted at `template`.
///
/// `rust-embed` only records files, so directories are derived from file
/// paths. Empty directories in the bundle are therefore not reproduced.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedTree;

impl EmbeddedTree {
    pub fn new() -> Self {
        Self
    }
}

impl TemplateTree for EmbeddedTree {
    fn root_name(&self) -> String {
        BUNDLED_ROOT.to_string()
    }

    #[instrument(skip(self))]
    fn walk(&self) -> StampResult<Vec<TreeEntry>> {
        let files: Vec<PathBuf> = Bundle::iter()
            .map(|key| {
                key.split('/')
                    .fold(PathBuf::from(BUNDLED_ROOT), |path, segment| path.join(segment))
            })
            .collect();

        debug!(files = files.len(), "walking bundled template");
        assemble_entries(BUNDLED_ROOT, files, [])
    }

    fn read(&self, path: &Path) -> StampResult<Vec<u8>> {
        let key = path
            .strip_prefix(BUNDLED_ROOT)
            .ok()
            .and_then(to_key)
            .ok_or_else(|| ApplicationError::TreeTraversal {
                reason: format!("'{}' is not a bundled template path", path.display()),
            })?;

        Bundle::get(&key)
            .map(|file| file.data.into_owned())
            .ok_or_else(|| {
                ApplicationError::TreeTraversal {
                    reason: format!("bundled template has no file '{key}'"),
                }
                .into()
            })
    }
}
