use std::fmt;

use super::domain::{ApplicationId, ApplicationState};

/// Conditions that end a generation without a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    ApplicationNotFound {
        id: ApplicationId,
    },
    UnsupportedState {
        id: ApplicationId,
        state: ApplicationState,
    },
    EmptyRender {
        id: ApplicationId,
        template: &'static str,
    },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::ApplicationNotFound { id } => {
                write!(f, "No application found for id '{id}'")
            }
            Diagnostic::UnsupportedState { id, state } => write!(
                f,
                "The application '{id}' is in state '{state}' and no valid document can be generated for it."
            ),
            Diagnostic::EmptyRender { id, template } => write!(
                f,
                "Unable to generate view for application '{id}': template '{template}' rendered no content."
            ),
        }
    }
}

/// Receives warnings raised while generating documents.
pub trait DiagnosticsSink: Send + Sync {
    fn warn(&self, diagnostic: &Diagnostic);
}

/// Forwards diagnostics to `tracing` at warn level.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingDiagnostics;

impl DiagnosticsSink for TracingDiagnostics {
    fn warn(&self, diagnostic: &Diagnostic) {
        match diagnostic {
            Diagnostic::ApplicationNotFound { id } => {
                tracing::warn!(application_id = %id, "{diagnostic}");
            }
            Diagnostic::UnsupportedState { id, state } => {
                tracing::warn!(application_id = %id, state = ?state, "{diagnostic}");
            }
            Diagnostic::EmptyRender { id, template } => {
                tracing::warn!(application_id = %id, template = *template, "{diagnostic}");
            }
        }
    }
}
