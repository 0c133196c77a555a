// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for Stamp.
//!
//! This module contains pure logic with no I/O. Reading the template tree,
//! writing files and stage-2 rendering are reached through ports defined in
//! the application layer.
//!
//! - **No I/O**: path mapping and stage-1 substitution only
//! - **Immutable values**: `ProjectName`, `TreeEntry`, `TemplateData`
//!
pub mod entities;
pub mod error;
pub mod value_objects;

pub use entities::{
    common::RelativePath,
    output_plan::{GenerationPlan, OutputMapping, PlannedEntry},
    template_data::{NAME_PLACEHOLDER, TemplateData},
    tree::{BUNDLED_ROOT, EntryKind, TEMPLATE_SUFFIX, TreeEntry},
};

pub use error::{DomainError, ErrorCategory};

pub use value_objects::ProjectName;
