//! Substitution context for a generation run.
//!
//! Content goes through two separate stages:
//!
//! | Stage | Syntax          | Applied by                          |
//! |-------|-----------------|-------------------------------------|
//! | 1     | `{{.name}}`     | [`TemplateData::substitute_name`]   |
//! | 2     | `{{ProjectName}}`, `{{ModuleName}}` | the `TemplateRenderer` port |
//!
//! Stage 1 is a literal string replacement and always runs first. A file
//! may rely on either stage alone.

use serde::Serialize;

use crate::domain::value_objects::ProjectName;

/// Literal stage-1 placeholder, replaced verbatim with the project name.
pub const NAME_PLACEHOLDER: &str = "{{.name}}";

/// Variables visible to the stage-2 renderer.
///
/// Both fields carry the project name today; they are separate so the module
/// name can diverge later without touching templates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct TemplateData {
    pub module_name: String,
    pub project_name: String,
}

impl TemplateData {
    pub fn new(name: &ProjectName) -> Self {
        Self {
            module_name: name.as_str().to_owned(),
            project_name: name.as_str().to_owned(),
        }
    }

    /// Stage 1: replace every `{{.name}}` with the project name.
    ///
    /// No escaping and no regex: the token is matched byte-for-byte.
    pub fn substitute_name(&self, content: &str) -> String {
        content.replace(NAME_PLACEHOLDER, &self.project_name)
    }
}
