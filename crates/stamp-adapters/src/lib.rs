//! Infrastructure adapters for Stamp.
//!
//! This crate implements the ports defined in `stamp-core::application::ports`.
//! It owns every I/O dependency: the bundled template (`rust-embed`), on-disk
//! template directories (`walkdir`), the local filesystem, and stage-2
//! rendering (`handlebars`).

pub mod filesystem;
pub mod renderer;
pub mod tree;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use renderer::HandlebarsRenderer;
pub use tree::{DirectoryTree, EmbeddedTree, MemoryTree, TEMPLATE_DIR_ENV, resolve_tree};
