use crate::infra::{build_generator, load_source};
use application_docs::config::AppConfig;
use application_docs::documents::ApplicationId;
use application_docs::error::AppError;
use application_docs::telemetry;
use clap::Args;
use std::fs;
use std::path::PathBuf;
use tracing::info;

#[derive(Args, Debug)]
pub(crate) struct RenderArgs {
    /// Identifier of the application to render
    #[arg(long)]
    pub(crate) id: String,
    /// JSON file with application records (defaults to DOCS_APPLICATIONS_FILE or demo data)
    #[arg(long)]
    pub(crate) applications: Option<PathBuf>,
    /// Template base location (defaults to DOCS_TEMPLATE_ROOT)
    #[arg(long)]
    pub(crate) base: Option<String>,
    /// Where to write the document
    #[arg(long, short)]
    pub(crate) output: PathBuf,
    /// Write the rendered HTML instead of the PDF
    #[arg(long)]
    pub(crate) markup: bool,
}

pub(crate) fn run_render(args: RenderArgs) -> Result<(), AppError> {
    let RenderArgs {
        id,
        applications,
        base,
        output,
        markup,
    } = args;

    let mut config = AppConfig::load()?;
    if applications.is_some() {
        config.storage.applications_file = applications;
    }
    telemetry::init(&config.telemetry)?;

    let base = base.unwrap_or_else(|| config.storage.template_root.clone());
    let source = load_source(&config.storage)?;
    let generator = build_generator(&config, source);
    let id = ApplicationId(id);

    let bytes = if markup {
        generator.generate_markup(&id, &base)?.into_bytes()
    } else {
        generator.generate(&id, &base)?
    };

    fs::write(&output, &bytes)?;
    info!(application_id = %id, path = %output.display(), bytes = bytes.len(), "document written");
    println!("Wrote {} bytes to {}", bytes.len(), output.display());
    Ok(())
}
