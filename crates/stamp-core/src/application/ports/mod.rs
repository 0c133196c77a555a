//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `stamp-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `TemplateTree`: Read-only template source
//!   - `Filesystem`: Output file operations
//!   - `TemplateRenderer`: Stage-2 template rendering
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - (Defined in CLI layer, implemented by `ProjectGenerator`)

pub mod output;

pub use output::{Filesystem, TemplateRenderer, TemplateTree};

#[cfg(test)]
pub use output::{MockFilesystem, MockTemplateRenderer, MockTemplateTree};
