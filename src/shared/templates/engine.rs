//! Page template engine using Jinja2 syntax.
//!
//! Templates are read once from disk when the renderer is built and kept for
//! the lifetime of the process.

use minijinja::{AutoEscape, Environment, Value};
use std::path::Path;
use thiserror::Error;

use crate::features::site::models::category_tone;

/// Errors that can occur during template operations
#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("Template '{0}' not found")]
    NotFound(String),

    #[error("Failed to render template: {0}")]
    RenderError(String),
}

/// Loaded page templates
#[derive(Debug)]
pub struct TemplateRenderer {
    env: Environment<'static>,
}

impl TemplateRenderer {
    /// Load every `.jinja` file under `dir`, keyed by its relative path.
    ///
    /// A missing directory yields an empty renderer; rendering then fails
    /// with [`TemplateError::NotFound`].
    pub fn from_dir(dir: impl AsRef<Path>) -> Self {
        let mut env = Environment::new();
        // .jinja is not an extension minijinja escapes on its own
        env.set_auto_escape_callback(|_| AutoEscape::Html);
        env.add_filter("tone", |category: String| category_tone(&category).to_string());

        let base_path = dir.as_ref();
        if base_path.exists() {
            load_templates_recursive(&mut env, base_path, base_path);
        } else {
            tracing::warn!("Template directory {} does not exist", base_path.display());
        }

        Self { env }
    }

    pub fn render(&self, template_name: &str, ctx: Value) -> Result<String, TemplateError> {
        let template = self
            .env
            .get_template(template_name)
            .map_err(|_| TemplateError::NotFound(template_name.to_string()))?;

        template
            .render(ctx)
            .map_err(|e| TemplateError::RenderError(e.to_string()))
    }

    pub fn template_exists(&self, template_name: &str) -> bool {
        self.env.get_template(template_name).is_ok()
    }

    pub fn list_templates(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .env
            .templates()
            .map(|(name, _)| name.to_string())
            .collect();
        names.sort();
        names
    }
}

/// Recursively load all .jinja templates from a directory
fn load_templates_recursive(env: &mut Environment<'static>, base_path: &Path, current_path: &Path) {
    if let Ok(entries) = std::fs::read_dir(current_path) {
        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_dir() {
                load_templates_recursive(env, base_path, &path);
            } else if path.extension().is_some_and(|ext| ext == "jinja") {
                if let Ok(relative) = path.strip_prefix(base_path) {
                    // Forward slashes so `{% extends %}` names are portable
                    let template_name = relative.to_string_lossy().replace('\\', "/");
                    if let Ok(content) = std::fs::read_to_string(&path) {
                        // Leaked once at startup, templates live as long as the process
                        let static_name: &'static str =
                            Box::leak(template_name.clone().into_boxed_str());
                        let static_content: &'static str = Box::leak(content.into_boxed_str());
                        if let Err(e) = env.add_template(static_name, static_content) {
                            tracing::warn!("Failed to load template {}: {}", template_name, e);
                        } else {
                            tracing::debug!("Loaded template: {}", template_name);
                        }
                    }
                }
            }
        }
    }
}
