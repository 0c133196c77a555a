//! Application layer for Stamp.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (ProjectGenerator)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! Path mapping and stage-1 substitution live in `crate::domain`; this layer
//! only sequences them against the ports.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{GenerationReport, ProjectGenerator};

// Re-export port traits (for adapter implementation)
pub use ports::{Filesystem, TemplateRenderer, TemplateTree};

pub use error::ApplicationError;
