use super::common::*;
use crate::documents::domain::ApplicationState;
use crate::documents::repository::StateLabels;
use crate::documents::templates::TemplateKind;
use crate::documents::views::DocumentView;

#[test]
fn pending_view_carries_only_the_summary() {
    let app = application("P1", ApplicationState::Pending);
    let view = DocumentView::build(&app, &document_config(), &StateLabels).expect("pending view");

    let DocumentView::Pending(pending) = &view else {
        panic!("expected pending view, got {view:?}");
    };
    assert_eq!(pending.summary.reference_number, "REF-P1");
    assert_eq!(pending.summary.state, "Pending");
    assert_eq!(pending.summary.full_name, "Thandi Mokoena");
    assert_eq!(pending.summary.support_email, "support@fund.example");
    assert_eq!(pending.summary.signature, "Client Services");
    assert_eq!(view.template_kind(), TemplateKind::PendingApplication);

    let json = serde_json::to_value(&view).expect("serializes");
    let keys: Vec<&String> = json.as_object().expect("object").keys().collect();
    assert_eq!(keys.len(), 6, "unexpected fields: {keys:?}");
    assert_eq!(json["applied_on"], "2024-03-18");
}

#[test]
fn activated_view_totals_portfolio_and_hides_unflagged_entity() {
    let mut app = activated_a1();
    app.legal_entity = Some(legal_entity());

    let view = DocumentView::build(&app, &document_config(), &StateLabels).expect("view");
    let DocumentView::Activated(activated) = &view else {
        panic!("expected activated view, got {view:?}");
    };

    assert!((activated.portfolio_total_amount - 27.0).abs() < 1e-9);
    assert_eq!(activated.portfolio_funds.len(), 2);
    assert!(activated.legal_entity.is_none());

    let json = serde_json::to_value(&view).expect("serializes");
    assert!(json["legal_entity"].is_null());
}

#[test]
fn activated_view_includes_flagged_entity() {
    let mut app = activated_a1();
    app.is_legal_entity = true;
    app.legal_entity = Some(legal_entity());

    let view = DocumentView::build(&app, &document_config(), &StateLabels).expect("view");
    let DocumentView::Activated(activated) = view else {
        panic!("expected activated view");
    };
    assert_eq!(activated.legal_entity, Some(legal_entity()));
}

#[test]
fn in_review_view_adds_message_and_raw_review() {
    let app = in_review_a2();
    let view = DocumentView::build(&app, &document_config(), &StateLabels).expect("view");

    let DocumentView::InReview(review) = &view else {
        panic!("expected in-review view, got {view:?}");
    };
    assert_eq!(
        review.in_review_message,
        "Your application has been placed in review pending outstanding bank account verification."
    );
    assert_eq!(review.in_review_information, app.current_review);
    assert!((review.portfolio.portfolio_total_amount - 27.0).abs() < 1e-9);
    assert_eq!(view.summary().state, "In Review");

    let json = serde_json::to_value(&view).expect("serializes");
    assert_eq!(
        json["in_review_information"]["reason"],
        "bank verification pending"
    );
    assert_eq!(json["portfolio_funds"][1]["name"], "Equity");
}

#[test]
fn in_review_without_review_record_uses_fallback_message() {
    let mut app = in_review_a2();
    app.current_review = None;
    let view = DocumentView::build(&app, &document_config(), &StateLabels).expect("view");
    let DocumentView::InReview(review) = view else {
        panic!("expected in-review view");
    };
    assert!(review
        .in_review_message
        .ends_with("because of suspicious account behaviour. Please contact support ASAP."));
    assert!(review.in_review_information.is_none());
}

#[test]
fn unsupported_states_have_no_view() {
    for state in [ApplicationState::Declined, ApplicationState::Closed] {
        let app = application("U1", state);
        assert!(DocumentView::build(&app, &document_config(), &StateLabels).is_none());
    }
}
