//! Template tree selection.
//!
//! # Resolution order
//!
//! 1. **Explicit directory**: `--template-dir` or `templates.dir` in config.
//! 2. **`$STAMP_TEMPLATE_DIR`**: environment variable override, also read
//!    from `.env`.
//! 3. **Bundled**: the `template/` tree compiled into the binary.
//!
//! An explicit or environment directory that cannot be opened is an error.
//! There is no silent fallback to the bundle, so a typo never produces a
//! project from the wrong template.

use std::{
    ffi::OsString,
    path::{Path, PathBuf},
};

use tracing::{debug, info, instrument};

use stamp_core::{application::ports::TemplateTree, error::StampResult};

use super::{DirectoryTree, EmbeddedTree};

/// Environment variable naming an on-disk template directory.
pub const TEMPLATE_DIR_ENV: &str = "STAMP_TEMPLATE_DIR";

/// Pick the template tree for a run.
///
/// # Errors
///
/// Returns [`stamp_core::application::ApplicationError::TreeTraversal`] when
/// the chosen directory does not exist or is not a directory.
#[instrument]
pub fn resolve_tree(override_dir: Option<&Path>) -> StampResult<Box<dyn TemplateTree>> {
    resolve_with(override_dir, std::env::var_os(TEMPLATE_DIR_ENV))
}

fn resolve_with(
    override_dir: Option<&Path>,
    env_dir: Option<OsString>,
) -> StampResult<Box<dyn TemplateTree>> {
    if let Some(dir) = override_dir {
        info!(path = %dir.display(), "using template directory from command line or config");
        return Ok(Box::new(DirectoryTree::open(dir)?));
    }

    if let Some(dir) = env_dir.filter(|v| !v.is_empty()).map(PathBuf::from) {
        info!(path = %dir.display(), "using template directory from $STAMP_TEMPLATE_DIR");
        return Ok(Box::new(DirectoryTree::open(dir)?));
    }

    debug!("using bundled template");
    Ok(Box::new(EmbeddedTree::new()))
}
