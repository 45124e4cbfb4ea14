use std::collections::HashMap;

use serde::Serialize;

use super::domain::ApplicationState;

/// Template family used for each state that produces a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TemplateKind {
    PendingApplication,
    ActivatedApplication,
    InReviewApplication,
}

impl TemplateKind {
    pub const fn ordered() -> [Self; 3] {
        [
            Self::PendingApplication,
            Self::ActivatedApplication,
            Self::InReviewApplication,
        ]
    }

    /// `None` for states that have no document.
    pub const fn for_state(state: ApplicationState) -> Option<Self> {
        match state {
            ApplicationState::Pending => Some(Self::PendingApplication),
            ApplicationState::Activated => Some(Self::ActivatedApplication),
            ApplicationState::InReview => Some(Self::InReviewApplication),
            ApplicationState::Declined | ApplicationState::Closed => None,
        }
    }

    pub const fn identifier(self) -> &'static str {
        match self {
            Self::PendingApplication => "PendingApplication",
            Self::ActivatedApplication => "ActivatedApplication",
            Self::InReviewApplication => "InReviewApplication",
        }
    }
}

/// Resolves a template identifier to a path relative to the base location.
///
/// Called once per generation; implementations may hit storage and must not
/// be assumed cacheable.
pub trait TemplatePathProvider: Send + Sync {
    fn resolve(&self, identifier: &str) -> Result<String, TemplateError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TemplateError {
    #[error("no template registered for '{0}'")]
    Unknown(String),
    #[error("template lookup failed: {0}")]
    Lookup(String),
}

/// Resolver backed by a fixed identifier to path table.
#[derive(Debug, Clone)]
pub struct StaticTemplatePaths {
    paths: HashMap<String, String>,
}

impl StaticTemplatePaths {
    pub fn new(paths: HashMap<String, String>) -> Self {
        Self { paths }
    }

    pub fn with_path(mut self, identifier: impl Into<String>, path: impl Into<String>) -> Self {
        self.paths.insert(identifier.into(), path.into());
        self
    }
}

impl Default for StaticTemplatePaths {
    /// `/<Identifier>.html` for every [`TemplateKind`].
    fn default() -> Self {
        let paths = TemplateKind::ordered()
            .into_iter()
            .map(|kind| {
                (
                    kind.identifier().to_string(),
                    format!("/{}.html", kind.identifier()),
                )
            })
            .collect();
        Self { paths }
    }
}

impl TemplatePathProvider for StaticTemplatePaths {
    fn resolve(&self, identifier: &str) -> Result<String, TemplateError> {
        self.paths
            .get(identifier)
            .cloned()
            .ok_or_else(|| TemplateError::Unknown(identifier.to_string()))
    }
}

/// Drops one trailing `/`, if present.
pub fn normalize_base_location(base: &str) -> &str {
    base.strip_suffix('/').unwrap_or(base)
}

/// Joins an already normalized base with a resolved path. The path carries
/// its own leading separator, so none is inserted here.
pub fn template_locator(base: &str, resolved_path: &str) -> String {
    format!("{base}{resolved_path}")
}
