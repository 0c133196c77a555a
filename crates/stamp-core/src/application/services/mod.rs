//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "generate a project" or "plan a project".

pub mod generator;

pub use generator::{GenerationReport, ProjectGenerator};
