use application_docs::config::{AppConfig, StorageConfig};
use application_docs::documents::{
    ApplicationDocumentGenerator, InMemoryApplicationSource, PlainTextPdfConverter,
    StaticTemplatePaths, TemplateFileRenderer, TracingDiagnostics,
};
use application_docs::error::AppError;
use metrics_exporter_prometheus::PrometheusHandle;
use std::fs::File;
use std::io::BufReader;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::info;

use crate::demo::sample_applications;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
    pub(crate) generator: Arc<ApplicationDocumentGenerator>,
    pub(crate) default_base: String,
}

/// Seed file when configured, otherwise the demo records.
pub(crate) fn load_source(storage: &StorageConfig) -> Result<InMemoryApplicationSource, AppError> {
    match &storage.applications_file {
        Some(path) => {
            let reader = BufReader::new(File::open(path)?);
            let source = InMemoryApplicationSource::from_reader(reader)?;
            info!(path = %path.display(), records = source.len(), "loaded application seed");
            Ok(source)
        }
        None => Ok(InMemoryApplicationSource::new(sample_applications())),
    }
}

pub(crate) fn build_generator(
    config: &AppConfig,
    source: InMemoryApplicationSource,
) -> ApplicationDocumentGenerator {
    ApplicationDocumentGenerator::new(
        Arc::new(source),
        Arc::new(StaticTemplatePaths::default()),
        Arc::new(TemplateFileRenderer::new()),
        Arc::new(PlainTextPdfConverter::new()),
        Arc::new(config.documents.clone()),
        Arc::new(TracingDiagnostics),
    )
}
