use chrono::NaiveDate;
use serde::Serialize;

use super::derive::{full_name, portfolio_funds, portfolio_total_amount, state_description};
use super::domain::{Application, Fund, LegalEntity, Review};
use super::repository::StateDescriber;
use super::review::review_message;
use super::templates::TemplateKind;
use crate::config::DocumentConfig;

/// Fields every document variant prints.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApplicantSummary {
    pub reference_number: String,
    pub state: String,
    pub full_name: String,
    pub applied_on: NaiveDate,
    pub support_email: String,
    pub signature: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PendingApplicationView {
    #[serde(flatten)]
    pub summary: ApplicantSummary,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActivatedApplicationView {
    #[serde(flatten)]
    pub summary: ApplicantSummary,
    pub legal_entity: Option<LegalEntity>,
    pub portfolio_funds: Vec<Fund>,
    pub portfolio_total_amount: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InReviewApplicationView {
    #[serde(flatten)]
    pub portfolio: ActivatedApplicationView,
    pub in_review_message: String,
    pub in_review_information: Option<Review>,
}

/// Presentation model handed to the view renderer. Serialized without a tag
/// so templates address fields directly.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum DocumentView {
    Pending(PendingApplicationView),
    Activated(ActivatedApplicationView),
    InReview(InReviewApplicationView),
}

impl DocumentView {
    /// Builds the view for the application's state, `None` when the state
    /// has no document.
    pub fn build(
        application: &Application,
        config: &DocumentConfig,
        describer: &dyn StateDescriber,
    ) -> Option<Self> {
        let kind = TemplateKind::for_state(application.state)?;
        let view = match kind {
            TemplateKind::PendingApplication => {
                Self::Pending(pending_view(application, config, describer))
            }
            TemplateKind::ActivatedApplication => {
                Self::Activated(activated_view(application, config, describer))
            }
            TemplateKind::InReviewApplication => {
                Self::InReview(in_review_view(application, config, describer))
            }
        };
        Some(view)
    }

    pub fn template_kind(&self) -> TemplateKind {
        match self {
            Self::Pending(_) => TemplateKind::PendingApplication,
            Self::Activated(_) => TemplateKind::ActivatedApplication,
            Self::InReview(_) => TemplateKind::InReviewApplication,
        }
    }

    pub fn summary(&self) -> &ApplicantSummary {
        match self {
            Self::Pending(view) => &view.summary,
            Self::Activated(view) => &view.summary,
            Self::InReview(view) => &view.portfolio.summary,
        }
    }
}

fn summary(
    application: &Application,
    config: &DocumentConfig,
    describer: &dyn StateDescriber,
) -> ApplicantSummary {
    ApplicantSummary {
        reference_number: application.reference_number.clone(),
        state: state_description(application, describer),
        full_name: full_name(application),
        applied_on: application.applied_on,
        support_email: config.support_email.clone(),
        signature: config.signature.clone(),
    }
}

pub fn pending_view(
    application: &Application,
    config: &DocumentConfig,
    describer: &dyn StateDescriber,
) -> PendingApplicationView {
    PendingApplicationView {
        summary: summary(application, config, describer),
    }
}

pub fn activated_view(
    application: &Application,
    config: &DocumentConfig,
    describer: &dyn StateDescriber,
) -> ActivatedApplicationView {
    ActivatedApplicationView {
        summary: summary(application, config, describer),
        legal_entity: application.effective_legal_entity().cloned(),
        portfolio_funds: portfolio_funds(application).cloned().collect(),
        portfolio_total_amount: portfolio_total_amount(application, config.tax_rate),
    }
}

pub fn in_review_view(
    application: &Application,
    config: &DocumentConfig,
    describer: &dyn StateDescriber,
) -> InReviewApplicationView {
    InReviewApplicationView {
        portfolio: activated_view(application, config, describer),
        in_review_message: review_message(application.review_reason()),
        in_review_information: application.current_review.clone(),
    }
}
