use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier wrapper for application records.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ApplicationId(pub String);

impl ApplicationId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }
}

impl fmt::Display for ApplicationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Lifecycle state of an application. Only the first three have a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationState {
    Pending,
    Activated,
    InReview,
    Declined,
    Closed,
}

impl ApplicationState {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::Pending,
            Self::Activated,
            Self::InReview,
            Self::Declined,
            Self::Closed,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Activated => "Activated",
            Self::InReview => "In Review",
            Self::Declined => "Declined",
            Self::Closed => "Closed",
        }
    }
}

impl fmt::Display for ApplicationState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub first_name: String,
    pub surname: String,
}

/// Company details captured when the applicant applies on behalf of an entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegalEntity {
    pub company_name: String,
    pub registration_number: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vat_number: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fund {
    pub name: String,
    pub amount: f64,
    pub fees: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    #[serde(default)]
    pub funds: Vec<Fund>,
}

/// Review opened against an application; `reason` is free text from an analyst.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    #[serde(default)]
    pub reason: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opened_on: Option<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Application {
    pub id: ApplicationId,
    pub state: ApplicationState,
    pub reference_number: String,
    pub applied_on: NaiveDate,
    pub person: Person,
    #[serde(default)]
    pub is_legal_entity: bool,
    #[serde(default)]
    pub legal_entity: Option<LegalEntity>,
    #[serde(default)]
    pub products: Vec<Product>,
    #[serde(default)]
    pub current_review: Option<Review>,
}

impl Application {
    /// Legal entity payload, only when the record is flagged as one.
    pub fn effective_legal_entity(&self) -> Option<&LegalEntity> {
        if self.is_legal_entity {
            self.legal_entity.as_ref()
        } else {
            None
        }
    }

    pub fn review_reason(&self) -> Option<&str> {
        self.current_review
            .as_ref()
            .and_then(|review| review.reason.as_deref())
    }
}
