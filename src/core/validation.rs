//! Shared validation helpers
//!
//! Structural checks applied by the service layer before any store access.
//! These decide only whether input is well-formed; whether the referenced
//! entities exist is the store's answer.

use crate::types::{ServiceError, TransactionDraft};
use rust_decimal::Decimal;

/// A valid identifier is a positive integer; zero marks an absent reference.
pub fn is_valid_id(id: u64) -> bool {
    id != 0
}

/// All strings present and non-blank
pub fn is_valid_strings<'a>(values: impl IntoIterator<Item = &'a str>) -> bool {
    values.into_iter().all(|v| !v.trim().is_empty())
}

/// Validate a draft's structure and extract its amount
///
/// Fails with `BadRequest` when the account reference or the amount is
/// missing. A zero amount is accepted; drafts are assumed to carry a
/// meaningful amount and the service does not second-guess that.
pub fn validate_draft(draft: &TransactionDraft) -> Result<Decimal, ServiceError> {
    if !is_valid_id(u64::from(draft.account_id)) {
        return Err(ServiceError::bad_request(
            "transaction draft is missing an account reference",
        ));
    }

    draft
        .amount
        .ok_or_else(|| ServiceError::bad_request("transaction draft is missing an amount"))
}
