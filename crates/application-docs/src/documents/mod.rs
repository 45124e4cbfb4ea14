//! State-driven document generation for customer applications.
//!
//! [`ApplicationDocumentGenerator`] looks an application up, builds the view
//! model for its lifecycle state, renders the matching template and converts
//! the markup into a PDF. Storage, template lookup, markup rendering and
//! conversion are reached through the traits re-exported here.

pub mod derive;
pub mod diagnostics;
pub mod domain;
pub mod generator;
pub mod rendering;
pub mod repository;
pub mod review;
pub mod templates;
pub mod views;

#[cfg(test)]
mod tests;

pub use diagnostics::{Diagnostic, DiagnosticsSink, TracingDiagnostics};
pub use domain::{
    Application, ApplicationId, ApplicationState, Fund, LegalEntity, Person, Product, Review,
};
pub use generator::{ApplicationDocumentGenerator, DocumentError};
pub use rendering::{
    ConversionError, DocumentConverter, PlainTextPdfConverter, RenderError, RenderOptions,
    RenderedDocument, TemplateFileRenderer, ViewRenderer,
};
pub use repository::{
    ApplicationSource, InMemoryApplicationSource, RepositoryError, StateDescriber, StateLabels,
};
pub use review::review_message;
pub use templates::{StaticTemplatePaths, TemplateError, TemplateKind, TemplatePathProvider};
pub use views::DocumentView;
