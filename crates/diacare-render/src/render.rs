use serde::Serialize;
use tera::{Context, Tera};

use crate::error::RenderError;

/// Build a Tera instance from `(name, content)` pairs.
///
/// Names ending in `.html` are autoescaped.
pub fn load_templates(templates: &[(&str, &str)]) -> Result<Tera, RenderError> {
    let mut tera = Tera::default();
    tera.add_raw_templates(templates.iter().copied())
        .map_err(|e| RenderError::TemplateParse(e.to_string()))?;
    Ok(tera)
}

/// Render a template with any serializable value as its context.
pub fn render_template<T: Serialize>(
    tera: &Tera,
    template_name: &str,
    value: &T,
) -> Result<String, RenderError> {
    let value = serde_json::to_value(value)?;
    let context =
        Context::from_value(value).map_err(|e| RenderError::TemplateRender(e.to_string()))?;

    let rendered = tera.render(template_name, &context)?;
    Ok(rendered)
}
