use std::sync::Arc;

use tracing::{debug, info, info_span};

use super::diagnostics::{Diagnostic, DiagnosticsSink};
use super::domain::{Application, ApplicationId, ApplicationState};
use super::rendering::{
    ConversionError, DocumentConverter, RenderError, RenderOptions, ViewRenderer,
};
use super::repository::{ApplicationSource, RepositoryError, StateDescriber, StateLabels};
use super::templates::{
    normalize_base_location, template_locator, TemplateError, TemplatePathProvider,
};
use super::views::DocumentView;
use crate::config::DocumentConfig;

/// Produces the downloadable document for an application's current state.
///
/// Every call is independent: the generator keeps no caches and only reads
/// its configuration, so one instance can be shared across threads.
pub struct ApplicationDocumentGenerator {
    source: Arc<dyn ApplicationSource>,
    templates: Arc<dyn TemplatePathProvider>,
    renderer: Arc<dyn ViewRenderer>,
    converter: Arc<dyn DocumentConverter>,
    describer: Arc<dyn StateDescriber>,
    config: Arc<DocumentConfig>,
    diagnostics: Arc<dyn DiagnosticsSink>,
}

impl ApplicationDocumentGenerator {
    pub fn new(
        source: Arc<dyn ApplicationSource>,
        templates: Arc<dyn TemplatePathProvider>,
        renderer: Arc<dyn ViewRenderer>,
        converter: Arc<dyn DocumentConverter>,
        config: Arc<DocumentConfig>,
        diagnostics: Arc<dyn DiagnosticsSink>,
    ) -> Self {
        Self {
            source,
            templates,
            renderer,
            converter,
            describer: Arc::new(StateLabels),
            config,
            diagnostics,
        }
    }

    /// Replace the default state labels.
    pub fn with_state_describer(mut self, describer: Arc<dyn StateDescriber>) -> Self {
        self.describer = describer;
        self
    }

    /// Generate the document bytes for `application_id`.
    ///
    /// `base_location` prefixes the resolved template path; a single trailing
    /// `/` is ignored.
    pub fn generate(
        &self,
        application_id: &ApplicationId,
        base_location: &str,
    ) -> Result<Vec<u8>, DocumentError> {
        let span = info_span!("generate_document", application_id = %application_id);
        let _entered = span.enter();

        let application = info_span!("lookup").in_scope(|| self.lookup(application_id))?;
        let markup = info_span!("render", state = ?application.state)
            .in_scope(|| self.render_markup(&application, base_location))?;

        let options = RenderOptions::standard();
        let document = info_span!("convert", markup_bytes = markup.len())
            .in_scope(|| self.converter.convert(&markup, &options))?;
        let bytes = document.into_bytes();

        info!(
            state = ?application.state,
            bytes = bytes.len(),
            "application document generated"
        );
        Ok(bytes)
    }

    /// Look the application up and return its markup without converting it.
    pub fn generate_markup(
        &self,
        application_id: &ApplicationId,
        base_location: &str,
    ) -> Result<String, DocumentError> {
        let application = self.lookup(application_id)?;
        self.render_markup(&application, base_location)
    }

    /// Render the state-specific markup for an already loaded application.
    pub fn render_markup(
        &self,
        application: &Application,
        base_location: &str,
    ) -> Result<String, DocumentError> {
        let base = normalize_base_location(base_location);

        let Some(view) = DocumentView::build(application, &self.config, self.describer.as_ref())
        else {
            self.diagnostics.warn(&Diagnostic::UnsupportedState {
                id: application.id.clone(),
                state: application.state,
            });
            return Err(DocumentError::UnsupportedState {
                id: application.id.clone(),
                state: application.state,
            });
        };

        let identifier = view.template_kind().identifier();
        let path = self.templates.resolve(identifier)?;
        let locator = template_locator(base, &path);
        debug!(template = identifier, %locator, "rendering application view");

        let markup = self.renderer.render(&locator, &view)?;
        if markup.trim().is_empty() {
            self.diagnostics.warn(&Diagnostic::EmptyRender {
                id: application.id.clone(),
                template: identifier,
            });
            return Err(DocumentError::EmptyRender {
                id: application.id.clone(),
            });
        }

        Ok(markup)
    }

    fn lookup(&self, application_id: &ApplicationId) -> Result<Application, DocumentError> {
        match self.source.find_application(application_id)? {
            Some(application) => Ok(application),
            None => {
                self.diagnostics.warn(&Diagnostic::ApplicationNotFound {
                    id: application_id.clone(),
                });
                Err(DocumentError::NotFound {
                    id: application_id.clone(),
                })
            }
        }
    }
}

impl std::fmt::Debug for ApplicationDocumentGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApplicationDocumentGenerator")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

/// Why no document was produced.
#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    #[error("no application found for id '{id}'")]
    NotFound { id: ApplicationId },
    #[error("application '{id}' is in state '{state}' which has no document")]
    UnsupportedState {
        id: ApplicationId,
        state: ApplicationState,
    },
    #[error("document for application '{id}' rendered no content")]
    EmptyRender { id: ApplicationId },
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error(transparent)]
    Template(#[from] TemplateError),
    #[error(transparent)]
    Render(#[from] RenderError),
    #[error(transparent)]
    Conversion(#[from] ConversionError),
}
