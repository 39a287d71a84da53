//! Account-related types for the transaction service
//!
//! This module defines the Account structure held by the account side of
//! the store. The balance is the authority: it is maintained by the store
//! as transactions commit, never recomputed from transaction history.

use super::transaction::AccountId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Account state as held by the store
///
/// Invariant: the balance is never observed negative after a committed
/// transaction. The service never creates accounts; they are seeded
/// administratively and mutated only as a side effect of a commit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    /// The account ID (opaque, unique, never zero)
    pub id: AccountId,

    /// Current balance in decimal currency units
    pub balance: Decimal,
}

impl Account {
    /// Create an account with the given opening balance
    pub fn new(id: AccountId, balance: Decimal) -> Self {
        Account { id, balance }
    }
}
