use super::common::*;
use crate::documents::domain::{ApplicationId, ApplicationState};
use crate::documents::repository::{ApplicationSource, InMemoryApplicationSource, RepositoryError};

#[test]
fn finds_single_record() {
    let source = InMemoryApplicationSource::new(vec![
        application("A", ApplicationState::Pending),
        application("B", ApplicationState::Activated),
    ]);

    let found = source
        .find_application(&ApplicationId::new("B"))
        .expect("lookup succeeds")
        .expect("record present");
    assert_eq!(found.state, ApplicationState::Activated);
    assert!(source
        .find_application(&ApplicationId::new("C"))
        .expect("lookup succeeds")
        .is_none());
}

#[test]
fn duplicate_ids_are_reported_not_swallowed() {
    let source = InMemoryApplicationSource::default();
    source
        .insert(application("D", ApplicationState::Pending))
        .expect("insert");
    source
        .insert(application("D", ApplicationState::Activated))
        .expect("insert");
    assert_eq!(source.len(), 2);

    match source.find_application(&ApplicationId::new("D")) {
        Err(RepositoryError::Ambiguous { id, count }) => {
            assert_eq!(id, ApplicationId::new("D"));
            assert_eq!(count, 2);
        }
        other => panic!("expected ambiguous lookup, got {other:?}"),
    }
}

#[test]
fn loads_records_from_json() {
    let json = r#"[
        {
            "id": "J1",
            "state": "in_review",
            "reference_number": "REF-J1",
            "applied_on": "2024-01-05",
            "person": { "first_name": "Lerato", "surname": "Dlamini" },
            "products": [
                { "name": "Savings", "funds": [ { "name": "Cash", "amount": 50.0, "fees": 5.0 } ] }
            ],
            "current_review": { "reason": "address proof expired" }
        }
    ]"#;

    let source = InMemoryApplicationSource::from_reader(json.as_bytes()).expect("valid seed");
    let record = source
        .find_application(&ApplicationId::new("J1"))
        .expect("lookup")
        .expect("present");
    assert_eq!(record.state, ApplicationState::InReview);
    assert!(!record.is_legal_entity);
    assert_eq!(record.review_reason(), Some("address proof expired"));
}

#[test]
fn rejects_malformed_seed() {
    let err = InMemoryApplicationSource::from_reader(&b"{ not json"[..]).expect_err("invalid");
    assert!(matches!(err, RepositoryError::Seed(_)));
}
