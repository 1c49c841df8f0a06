//! Template rendering
//!
//! The sync engine only sees the [`Renderer`] trait. The default
//! implementation is backed by Handlebars.

use handlebars::Handlebars;
use serde_json::{Map, Value};

use pct_fs::NormalizedPath;

use crate::{Error, Result};

/// Turns template source plus data into output text
pub trait Renderer {
    /// Render `source`, read from `template`, with `data`.
    ///
    /// Failures caused by the template itself are reported as
    /// [`Error::Render`]; the engine treats those as per-file errors.
    fn render(
        &self,
        template: &NormalizedPath,
        source: &str,
        data: &Map<String, Value>,
    ) -> Result<String>;
}

/// Handlebars-backed renderer
///
/// Output is written verbatim: HTML escaping is off, and variables missing
/// from the data render as empty text.
pub struct HandlebarsRenderer {
    registry: Handlebars<'static>,
}

impl Default for HandlebarsRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl HandlebarsRenderer {
    pub fn new() -> Self {
        let mut registry = Handlebars::new();
        registry.set_strict_mode(false);
        registry.register_escape_fn(handlebars::no_escape);
        Self { registry }
    }
}

impl Renderer for HandlebarsRenderer {
    fn render(
        &self,
        template: &NormalizedPath,
        source: &str,
        data: &Map<String, Value>,
    ) -> Result<String> {
        self.registry
            .render_template(source, data)
            .map_err(|e| Error::Render {
                template: template.to_native(),
                message: e.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn render(source: &str, data: Value) -> Result<String> {
        let Value::Object(data) = data else {
            panic!("data must be an object");
        };
        HandlebarsRenderer::new().render(&NormalizedPath::new("/t/a.txt"), source, &data)
    }

    #[test]
    fn test_substitutes_variables() {
        assert_eq!(render("Hello {{name}}", json!({"name": "world"})).unwrap(), "Hello world");
    }

    #[test]
    fn test_does_not_escape_html() {
        assert_eq!(render("{{v}}", json!({"v": "<a & b>"})).unwrap(), "<a & b>");
    }

    #[test]
    fn test_missing_variable_renders_empty() {
        assert_eq!(render("[{{missing}}]", json!({})).unwrap(), "[]");
    }

    #[test]
    fn test_plain_text_passes_through() {
        let source = "no placeholders\nsecond line\n";
        assert_eq!(render(source, json!({})).unwrap(), source);
    }

    #[test]
    fn test_nested_data_and_blocks() {
        let out = render(
            "{{#each items}}{{this}},{{/each}} {{meta.version}}",
            json!({"items": [1, 2], "meta": {"version": "1.0"}}),
        )
        .unwrap();
        assert_eq!(out, "1,2, 1.0");
    }

    #[test]
    fn test_syntax_error_is_render_error() {
        let err = render("{{#if}}", json!({})).unwrap_err();
        assert!(matches!(err, Error::Render { .. }), "got: {err}");
        assert!(err.to_string().contains("/t/a.txt"), "got: {err}");
    }
}
