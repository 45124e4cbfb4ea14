use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use chrono::NaiveDate;
use tracing::span;
use tracing_subscriber::layer::Context;
use tracing_subscriber::Layer;

use crate::config::DocumentConfig;
use crate::documents::diagnostics::{Diagnostic, DiagnosticsSink};
use crate::documents::domain::{
    Application, ApplicationId, ApplicationState, Fund, LegalEntity, Person, Product, Review,
};
use crate::documents::generator::ApplicationDocumentGenerator;
use crate::documents::rendering::{
    ConversionError, DocumentConverter, RenderError, RenderOptions, RenderedDocument,
    ViewRenderer,
};
use crate::documents::repository::{ApplicationSource, InMemoryApplicationSource, RepositoryError};
use crate::documents::templates::{StaticTemplatePaths, TemplateError, TemplatePathProvider};
use crate::documents::views::DocumentView;

pub(super) fn document_config() -> DocumentConfig {
    DocumentConfig {
        support_email: "support@fund.example".to_string(),
        signature: "Client Services".to_string(),
        tax_rate: 0.1,
    }
}

pub(super) fn fund(name: &str, amount: f64, fees: f64) -> Fund {
    Fund {
        name: name.to_string(),
        amount,
        fees,
    }
}

pub(super) fn application(id: &str, state: ApplicationState) -> Application {
    Application {
        id: ApplicationId::new(id),
        state,
        reference_number: format!("REF-{id}"),
        applied_on: NaiveDate::from_ymd_opt(2024, 3, 18).expect("valid date"),
        person: Person {
            first_name: "Thandi".to_string(),
            surname: "Mokoena".to_string(),
        },
        is_legal_entity: false,
        legal_entity: None,
        products: Vec::new(),
        current_review: None,
    }
}

/// Activated, not a legal entity, two products of one fund each.
pub(super) fn activated_a1() -> Application {
    let mut app = application("A1", ApplicationState::Activated);
    app.products = vec![
        Product {
            name: "Tax Free Savings".to_string(),
            funds: vec![fund("Balanced", 100.0, 10.0)],
        },
        Product {
            name: "Retirement Annuity".to_string(),
            funds: vec![fund("Equity", 200.0, 20.0)],
        },
    ];
    app
}

pub(super) fn in_review_a2() -> Application {
    let mut app = activated_a1();
    app.id = ApplicationId::new("A2");
    app.reference_number = "REF-A2".to_string();
    app.state = ApplicationState::InReview;
    app.current_review = Some(Review {
        reason: Some("bank verification pending".to_string()),
        opened_on: NaiveDate::from_ymd_opt(2024, 4, 2),
    });
    app
}

pub(super) fn legal_entity() -> LegalEntity {
    LegalEntity {
        company_name: "Mokoena Holdings".to_string(),
        registration_number: "2019/123456/07".to_string(),
        vat_number: None,
    }
}

#[derive(Default)]
pub(super) struct RecordingDiagnostics {
    events: Mutex<Vec<Diagnostic>>,
}

impl RecordingDiagnostics {
    pub(super) fn events(&self) -> Vec<Diagnostic> {
        self.events.lock().expect("diagnostics mutex").clone()
    }
}

impl DiagnosticsSink for RecordingDiagnostics {
    fn warn(&self, diagnostic: &Diagnostic) {
        self.events
            .lock()
            .expect("diagnostics mutex")
            .push(diagnostic.clone());
    }
}

/// Renders the view as JSON inside a minimal page, remembering each locator.
#[derive(Default)]
pub(super) struct JsonRenderer {
    locators: Mutex<Vec<String>>,
}

impl JsonRenderer {
    pub(super) fn locators(&self) -> Vec<String> {
        self.locators.lock().expect("renderer mutex").clone()
    }

    pub(super) fn calls(&self) -> usize {
        self.locators().len()
    }
}

impl ViewRenderer for JsonRenderer {
    fn render(&self, locator: &str, view: &DocumentView) -> Result<String, RenderError> {
        self.locators
            .lock()
            .expect("renderer mutex")
            .push(locator.to_string());
        let json = serde_json::to_string(view).expect("view serializes");
        Ok(format!("<html><body><p>{json}</p></body></html>"))
    }
}

pub(super) struct BlankRenderer;

impl ViewRenderer for BlankRenderer {
    fn render(&self, _locator: &str, _view: &DocumentView) -> Result<String, RenderError> {
        Ok("  \n\t ".to_string())
    }
}

/// Returns the markup bytes unchanged.
#[derive(Default)]
pub(super) struct EchoConverter {
    calls: AtomicUsize,
}

impl EchoConverter {
    pub(super) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl DocumentConverter for EchoConverter {
    fn convert(
        &self,
        markup: &str,
        options: &RenderOptions,
    ) -> Result<RenderedDocument, ConversionError> {
        assert_eq!(options, &RenderOptions::standard());
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(RenderedDocument::new(markup.as_bytes().to_vec(), 1))
    }
}

/// Counts resolutions so tests can prove the lookup is not cached.
#[derive(Default)]
pub(super) struct CountingTemplates {
    inner: StaticTemplatePaths,
    calls: AtomicUsize,
}

impl CountingTemplates {
    pub(super) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl TemplatePathProvider for CountingTemplates {
    fn resolve(&self, identifier: &str) -> Result<String, TemplateError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.resolve(identifier)
    }
}

pub(super) struct UnavailableSource;

impl ApplicationSource for UnavailableSource {
    fn find_application(
        &self,
        _id: &ApplicationId,
    ) -> Result<Option<Application>, RepositoryError> {
        Err(RepositoryError::Unavailable("connection refused".to_string()))
    }
}

/// Records the name of every span opened while installed.
#[derive(Clone, Default)]
pub(super) struct SpanNames {
    names: Arc<Mutex<Vec<&'static str>>>,
}

impl SpanNames {
    pub(super) fn names(&self) -> Vec<&'static str> {
        self.names.lock().expect("span mutex").clone()
    }
}

impl<S: tracing::Subscriber> Layer<S> for SpanNames {
    fn on_new_span(&self, attrs: &span::Attributes<'_>, _id: &span::Id, _ctx: Context<'_, S>) {
        self.names
            .lock()
            .expect("span mutex")
            .push(attrs.metadata().name());
    }
}

pub(super) struct Harness {
    pub(super) generator: ApplicationDocumentGenerator,
    pub(super) source: Arc<InMemoryApplicationSource>,
    pub(super) templates: Arc<CountingTemplates>,
    pub(super) renderer: Arc<JsonRenderer>,
    pub(super) converter: Arc<EchoConverter>,
    pub(super) diagnostics: Arc<RecordingDiagnostics>,
}

pub(super) fn harness(records: Vec<Application>) -> Harness {
    let source = Arc::new(InMemoryApplicationSource::new(records));
    let templates = Arc::new(CountingTemplates::default());
    let renderer = Arc::new(JsonRenderer::default());
    let converter = Arc::new(EchoConverter::default());
    let diagnostics = Arc::new(RecordingDiagnostics::default());

    let generator = ApplicationDocumentGenerator::new(
        source.clone(),
        templates.clone(),
        renderer.clone(),
        converter.clone(),
        Arc::new(document_config()),
        diagnostics.clone(),
    );

    Harness {
        generator,
        source,
        templates,
        renderer,
        converter,
        diagnostics,
    }
}
