use std::fs;
use std::path::Path;

use minijinja::{context, AutoEscape, Environment};

use super::{RenderError, ViewRenderer};
use crate::documents::views::DocumentView;

/// Renders templates read from the local filesystem with minijinja.
///
/// The locator is a plain path or a `file://` URL. Templates see the view
/// model as `view`; output is HTML-escaped.
pub struct TemplateFileRenderer {
    env: Environment<'static>,
}

impl TemplateFileRenderer {
    pub fn new() -> Self {
        let mut env = Environment::new();
        env.set_auto_escape_callback(|_| AutoEscape::Html);
        Self { env }
    }

    fn local_path(locator: &str) -> Result<&Path, RenderError> {
        let path = locator.strip_prefix("file://").unwrap_or(locator);
        if path.contains("://") {
            return Err(RenderError::UnsupportedLocator {
                locator: locator.to_string(),
            });
        }
        Ok(Path::new(path))
    }
}

impl Default for TemplateFileRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for TemplateFileRenderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TemplateFileRenderer").finish_non_exhaustive()
    }
}

impl ViewRenderer for TemplateFileRenderer {
    fn render(&self, locator: &str, view: &DocumentView) -> Result<String, RenderError> {
        let path = Self::local_path(locator)?;
        let source = fs::read_to_string(path).map_err(|source| RenderError::Read {
            locator: locator.to_string(),
            source,
        })?;

        self.env
            .render_str(&source, context! { view => view })
            .map_err(|source| RenderError::Template {
                locator: locator.to_string(),
                source,
            })
    }
}
