//! Template Engine - Render page fragments with Handlebars
//!
//! Wraps a Handlebars registry with every fragment template registered up
//! front. Strict mode is on so a misspelled field fails instead of rendering
//! blank, and the default HTML escaping stays in place.

use handlebars::Handlebars;
use serde::Serialize;

use super::templates;
use crate::error::{FolioError, Result};

pub struct TemplateEngine {
    handlebars: Handlebars<'static>,
}

impl TemplateEngine {
    /// Create an engine with all fragment templates registered
    pub fn new() -> Result<Self> {
        let mut handlebars = Handlebars::new();
        handlebars.set_strict_mode(true);

        for (name, source) in templates::ALL {
            handlebars
                .register_template_string(name, source)
                .map_err(|e| FolioError::Template(format!("Failed to register template '{}': {}", name, e)))?;
        }
        log::debug!("Registered {} templates", templates::ALL.len());

        Ok(Self { handlebars })
    }

    /// Render a registered template with any serializable context
    pub fn render<T: Serialize>(&self, name: &str, context: &T) -> Result<String> {
        self.handlebars
            .render(name, context)
            .map_err(|e| FolioError::Template(format!("Failed to render template '{}': {}", name, e)))
    }

    /// Check if a named template is registered
    pub fn has_template(&self, name: &str) -> bool {
        self.handlebars.get_template(name).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_templates_registered() {
        let engine = TemplateEngine::new().unwrap();
        for (name, _) in templates::ALL {
            assert!(engine.has_template(name), "{}", name);
        }
        assert!(!engine.has_template("nonexistent"));
    }

    #[test]
    fn test_render_unknown_template() {
        let engine = TemplateEngine::new().unwrap();
        let result = engine.render("nonexistent", &serde_json::json!({}));
        assert!(matches!(result, Err(FolioError::Template(_))));
    }

    #[test]
    fn test_strict_mode_rejects_missing_field() {
        let engine = TemplateEngine::new().unwrap();
        let result = engine.render(templates::GRID_CARD, &serde_json::json!({ "items": [] }));
        assert!(result.is_err());
    }

    #[test]
    fn test_values_are_escaped() {
        let engine = TemplateEngine::new().unwrap();
        let html = engine
            .render(
                templates::GRID_CARD,
                &serde_json::json!({ "title": "<b>x", "items": ["a & b"] }),
            )
            .unwrap();
        assert!(html.contains("<h3>&lt;b&gt;x</h3>"));
        assert!(html.contains(r#"<span class="chip">a &amp; b</span>"#));
    }
}
