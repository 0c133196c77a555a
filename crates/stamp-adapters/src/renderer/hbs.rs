//! Stage-2 renderer backed by Handlebars.
//!
//! Templates may reference `{{ProjectName}}` and `{{ModuleName}}`. The
//! registry runs in strict mode so any other variable is a render error, and
//! output is written without HTML escaping.

use std::path::PathBuf;

use handlebars::{Handlebars, Template, no_escape};
use tracing::{instrument, trace};

use stamp_core::{
    application::{ApplicationError, ports::TemplateRenderer},
    domain::TemplateData,
    error::StampResult,
};

/// Handlebars-based [`TemplateRenderer`].
pub struct HandlebarsRenderer;

impl HandlebarsRenderer {
    /// Create a new renderer.
    pub fn new() -> Self {
        Self
    }

    fn registry() -> Handlebars<'static> {
        let mut registry = Handlebars::new();
        registry.set_strict_mode(true);
        registry.register_escape_fn(no_escape);
        registry
    }
}

impl Default for HandlebarsRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateRenderer for HandlebarsRenderer {
    #[instrument(skip(self, source, data))]
    fn render(&self, name: &str, source: &str, data: &TemplateData) -> StampResult<String> {
        let template = Template::compile(source).map_err(|e| ApplicationError::TemplateParse {
            path: PathBuf::from(name),
            reason: e.to_string(),
        })?;

        let mut registry = Self::registry();
        registry.register_template(name, template);

        let rendered = registry
            .render(name, data)
            .map_err(|e| ApplicationError::TemplateRender {
                path: PathBuf::from(name),
                reason: e.to_string(),
            })?;

        trace!(bytes = rendered.len(), "Rendered template");
        Ok(rendered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stamp_core::{domain::ProjectName, error::StampError};

    fn data(name: &str) -> TemplateData {
        TemplateData::new(&ProjectName::parse(name).unwrap())
    }

    fn render(source: &str) -> StampResult<String> {
        HandlebarsRenderer::new().render("template/test.tmpl", source, &data("svc"))
    }

    #[test]
    fn renders_both_variables() {
        assert_eq!(
            render("module {{ModuleName}} / project {{ProjectName}}").unwrap(),
            "module svc / project svc"
        );
    }

    #[test]
    fn plain_text_passes_through() {
        let text = "fn main() {\n    println!(\"hi\");\n}\n";
        assert_eq!(render(text).unwrap(), text);
    }

    #[test]
    fn output_is_not_html_escaped() {
        let renderer = HandlebarsRenderer::new();
        let out = renderer
            .render("t", "<{{ProjectName}}>", &data("a&b"))
            .unwrap();
        assert_eq!(out, "<a&b>");
    }

    #[test]
    fn malformed_syntax_is_a_parse_error() {
        let err = render("{{#if ProjectName}}never closed").unwrap_err();
        assert!(matches!(
            err,
            StampError::Application(ApplicationError::TemplateParse { .. })
        ));
    }

    #[test]
    fn unknown_variable_is_a_render_error() {
        let err = render("{{Author}}").unwrap_err();
        match err {
            StampError::Application(ApplicationError::TemplateRender { path, .. }) => {
                assert_eq!(path, PathBuf::from("template/test.tmpl"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
