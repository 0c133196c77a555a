//! Stamp Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Stamp
//! project generator, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │            stamp-cli (CLI)              │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │           (ProjectGenerator)            │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │       Application Ports (Traits)        │
//! │ (Driven: TemplateTree, Filesystem,      │
//! │          TemplateRenderer)              │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     stamp-adapters (Infrastructure)     │
//! │ (EmbeddedTree, LocalFilesystem, etc)    │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │ (ProjectName, TreeEntry, TemplateData,  │
//! │           OutputMapping)                │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use stamp_core::prelude::*;
//!
//! let name = ProjectName::parse("my-api")?;
//!
//! // Adapters come from `stamp-adapters`.
//! let generator = ProjectGenerator::new(tree, filesystem, renderer);
//! let report = generator.generate(&name)?;
//! println!("wrote {} files", report.files_written);
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        GenerationReport, ProjectGenerator,
        ports::{Filesystem, TemplateRenderer, TemplateTree},
    };
    pub use crate::domain::{
        EntryKind, GenerationPlan, OutputMapping, PlannedEntry, ProjectName, RelativePath,
        TemplateData, TreeEntry,
    };
    pub use crate::error::{StampError, StampResult};
}
