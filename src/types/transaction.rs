//! Transaction-related types for the transaction service
//!
//! This module defines the draft/persisted split at the heart of the
//! transaction lifecycle: a [`TransactionDraft`] is what a caller submits,
//! a [`Transaction`] is what the store hands back once the draft has been
//! validated and committed. Persisted transactions are immutable; there is
//! no update or delete path.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Account identifier
///
/// Supports account IDs from 1 to 4,294,967,295; zero is never a valid id.
pub type AccountId = u32;

/// Transaction identifier, assigned by the store on insert
pub type TransactionId = u64;

/// Direction of a committed transaction, derived from the amount's sign
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    /// Non-negative amount: funds added to the account
    Credit,
    /// Negative amount: funds removed from the account
    Debit,
}

/// An unpersisted transaction supplied by a caller
///
/// Both fields are structurally optional on the wire: a missing account
/// reference deserializes to the zero id and a missing amount to `None`,
/// and either one fails validation with `BadRequest` before the store is
/// touched.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TransactionDraft {
    /// The account this transaction applies to
    #[serde(default)]
    pub account_id: AccountId,

    /// Signed amount: positive = credit, negative = debit
    #[serde(default)]
    pub amount: Option<Decimal>,
}

/// A persisted, immutable transaction record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Store-assigned identifier (absent before persistence)
    pub id: TransactionId,

    /// The account whose balance this transaction moved
    pub account_id: AccountId,

    /// Signed amount applied to the account balance
    pub amount: Decimal,

    /// When the store committed the record
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl Transaction {
    /// Report whether this record credited or debited the account
    pub fn kind(&self) -> TransactionKind {
        if self.amount.is_sign_negative() {
            TransactionKind::Debit
        } else {
            TransactionKind::Credit
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::credit(Decimal::new(5000, 2), TransactionKind::Credit)]
    #[case::zero(Decimal::ZERO, TransactionKind::Credit)]
    #[case::debit(Decimal::new(-5000, 2), TransactionKind::Debit)]
    fn test_kind_follows_amount_sign(#[case] amount: Decimal, #[case] expected: TransactionKind) {
        let tx = Transaction {
            id: 1,
            account_id: 1,
            amount,
            created_at: OffsetDateTime::UNIX_EPOCH,
        };
        assert_eq!(tx.kind(), expected);
    }

    #[test]
    fn test_draft_defaults_fail_closed() {
        // A draft deserialized from an empty object carries the zero id and
        // no amount, both of which validation rejects.
        let draft = TransactionDraft::default();
        assert_eq!(draft.account_id, 0);
        assert!(draft.amount.is_none());
    }
}
