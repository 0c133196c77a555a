pub mod common;
pub mod output_plan;
pub mod template_data;
pub mod tree;

pub use crate::domain::DomainError;
pub use output_plan::{GenerationPlan, OutputMapping, PlannedEntry};
pub use template_data::TemplateData;
pub use tree::{EntryKind, TreeEntry};
