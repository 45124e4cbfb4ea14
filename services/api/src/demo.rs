use application_docs::documents::{
    Application, ApplicationId, ApplicationState, Fund, LegalEntity, Person, Product, Review,
};
use chrono::NaiveDate;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("demo dates are valid calendar dates")
}

fn fund(name: &str, amount: f64, fees: f64) -> Fund {
    Fund {
        name: name.to_string(),
        amount,
        fees,
    }
}

fn savings_products() -> Vec<Product> {
    vec![
        Product {
            name: "Tax Free Savings".to_string(),
            funds: vec![
                fund("Balanced Growth", 12_500.0, 125.0),
                fund("Money Market", 4_000.0, 12.5),
            ],
        },
        Product {
            name: "Retirement Annuity".to_string(),
            funds: vec![fund("Global Equity", 30_000.0, 450.0)],
        },
    ]
}

/// Records served when no seed file is configured.
pub(crate) fn sample_applications() -> Vec<Application> {
    let person = Person {
        first_name: "Naledi".to_string(),
        surname: "Khumalo".to_string(),
    };

    vec![
        Application {
            id: ApplicationId::new("demo-pending"),
            state: ApplicationState::Pending,
            reference_number: "APP-1001".to_string(),
            applied_on: date(2024, 5, 2),
            person: person.clone(),
            is_legal_entity: false,
            legal_entity: None,
            products: Vec::new(),
            current_review: None,
        },
        Application {
            id: ApplicationId::new("demo-activated"),
            state: ApplicationState::Activated,
            reference_number: "APP-1002".to_string(),
            applied_on: date(2024, 4, 11),
            person: person.clone(),
            is_legal_entity: true,
            legal_entity: Some(LegalEntity {
                company_name: "Khumalo Family Trust".to_string(),
                registration_number: "IT1234/2015".to_string(),
                vat_number: None,
            }),
            products: savings_products(),
            current_review: None,
        },
        Application {
            id: ApplicationId::new("demo-in-review"),
            state: ApplicationState::InReview,
            reference_number: "APP-1003".to_string(),
            applied_on: date(2024, 3, 27),
            person: person.clone(),
            is_legal_entity: false,
            legal_entity: None,
            products: savings_products(),
            current_review: Some(Review {
                reason: Some("proof of address older than three months".to_string()),
                opened_on: Some(date(2024, 4, 3)),
            }),
        },
        Application {
            id: ApplicationId::new("demo-closed"),
            state: ApplicationState::Closed,
            reference_number: "APP-0990".to_string(),
            applied_on: date(2023, 11, 20),
            person,
            is_legal_entity: false,
            legal_entity: None,
            products: Vec::new(),
            current_review: None,
        },
    ]
}
