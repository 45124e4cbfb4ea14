/// Opening shared by every in-review message.
pub const REVIEW_MESSAGE_PREFIX: &str = "Your application has been placed in review";

const ADDRESS_SUFFIX: &str = " pending outstanding address verification for FICA purposes.";
const BANK_SUFFIX: &str = " pending outstanding bank account verification.";
const FALLBACK_SUFFIX: &str =
    " because of suspicious account behaviour. Please contact support ASAP.";

/// Explains why an application sits in review, keyed off the analyst's reason.
///
/// Matching is a case-sensitive substring test and the first hit wins, so a
/// reason mentioning both an address and a bank reads as an address check.
/// Analysts rely on this wording; change it only together with them.
pub fn review_message(reason: Option<&str>) -> String {
    let suffix = match reason {
        Some(reason) if reason.contains("address") => ADDRESS_SUFFIX,
        Some(reason) if reason.contains("bank") => BANK_SUFFIX,
        _ => FALLBACK_SUFFIX,
    };

    format!("{REVIEW_MESSAGE_PREFIX}{suffix}")
}
