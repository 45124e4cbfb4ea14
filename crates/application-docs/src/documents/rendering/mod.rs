mod markup;
mod options;
mod pdf;

pub use markup::TemplateFileRenderer;
pub use options::{HeaderOptions, HeaderRepeat, PageNumbers, RenderOptions, DOCUMENT_HEADER_HTML};
pub use pdf::PlainTextPdfConverter;

use super::views::DocumentView;

/// Turns a view model into markup using the template found at `locator`.
pub trait ViewRenderer: Send + Sync {
    fn render(&self, locator: &str, view: &DocumentView) -> Result<String, RenderError>;
}

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("template '{locator}' could not be read: {source}")]
    Read {
        locator: String,
        #[source]
        source: std::io::Error,
    },
    #[error("template '{locator}' is not a local file")]
    UnsupportedLocator { locator: String },
    #[error("template '{locator}' failed to render: {source}")]
    Template {
        locator: String,
        #[source]
        source: minijinja::Error,
    },
}

/// Converts finished markup into a paginated binary document.
pub trait DocumentConverter: Send + Sync {
    fn convert(
        &self,
        markup: &str,
        options: &RenderOptions,
    ) -> Result<RenderedDocument, ConversionError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ConversionError {
    #[error("document engine rejected the markup: {0}")]
    Engine(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Output of a [`DocumentConverter`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedDocument {
    bytes: Vec<u8>,
    page_count: usize,
}

impl RenderedDocument {
    pub fn new(bytes: Vec<u8>, page_count: usize) -> Self {
        Self { bytes, page_count }
    }

    pub fn page_count(&self) -> usize {
        self.page_count
    }

    pub fn content_type(&self) -> mime::Mime {
        mime::APPLICATION_PDF
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        self.bytes.clone()
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}
