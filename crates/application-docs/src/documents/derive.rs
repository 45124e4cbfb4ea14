//! Presentation values derived from an [`Application`].

use super::domain::{Application, Fund};
use super::repository::StateDescriber;

pub fn full_name(application: &Application) -> String {
    format!(
        "{} {}",
        application.person.first_name, application.person.surname
    )
}

pub fn state_description(application: &Application, describer: &dyn StateDescriber) -> String {
    describer.describe(application.state)
}

/// Every fund across every product, product order first.
pub fn portfolio_funds(application: &Application) -> impl Iterator<Item = &Fund> {
    application
        .products
        .iter()
        .flat_map(|product| product.funds.iter())
}

/// Sum of `(amount - fees) * tax_rate` over the portfolio, unrounded.
///
/// Accumulates in document order so identical records always produce the
/// same bits.
pub fn portfolio_total_amount(application: &Application, tax_rate: f64) -> f64 {
    portfolio_funds(application)
        .map(|fund| (fund.amount - fund.fees) * tax_rate)
        .fold(0.0, |total, net| total + net)
}
