//! Store traits for account, transaction, and user persistence
//!
//! This module defines the persistence boundary. The store is treated as an
//! external, possibly-remote dependency: every method is a suspension point,
//! and any connection/resource it needs is acquired at the start of a call
//! and released on every exit path, including failure.
//!
//! The service layer owns all business rules; implementations of these
//! traits own none, with one deliberate exception: `TransactionStore::insert`
//! must apply the account-balance update atomically with the record insert,
//! refusing the commit if the projected balance is negative at commit time.
//! That conditional write is what makes the balance invariant hold under
//! concurrent requests against the same account.

use crate::types::{AccountId, ServiceError, Transaction, TransactionId, User, UserId};
use async_trait::async_trait;
use rust_decimal::Decimal;

/// Read access to account state
#[async_trait]
pub trait AccountStore: Send + Sync {
    /// Check whether an account with the given id exists
    async fn exists(&self, account_id: AccountId) -> Result<bool, ServiceError>;

    /// Read the current balance of an account
    ///
    /// Fails with `ResourceNotFound` when the account does not exist.
    async fn balance(&self, account_id: AccountId) -> Result<Decimal, ServiceError>;
}

/// Persistence for transaction records
#[async_trait]
pub trait TransactionStore: Send + Sync {
    /// Commit a validated transaction against an account
    ///
    /// Assigns the record its identifier and timestamp, and applies the
    /// account-balance update as part of the same durable operation. The
    /// projection `balance + amount` is re-evaluated under the account's
    /// lock; a negative result refuses the commit with `InsufficientFunds`
    /// and leaves both the balance and the transaction log untouched.
    async fn insert(
        &self,
        account_id: AccountId,
        amount: Decimal,
    ) -> Result<Transaction, ServiceError>;

    /// Look up a transaction by its identifier
    async fn get_by_id(&self, id: TransactionId) -> Result<Option<Transaction>, ServiceError>;

    /// List every transaction, ordered by identifier
    ///
    /// An empty store yields an empty vector; turning that into an error
    /// is the service layer's decision, not the store's.
    async fn list_all(&self) -> Result<Vec<Transaction>, ServiceError>;
}

/// Read access to user records
///
/// Records returned here still carry the secret credential field; the
/// service layer redacts them before they cross its boundary.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// List every user, ordered by identifier
    async fn list_all(&self) -> Result<Vec<User>, ServiceError>;

    /// Look up a user by identifier
    async fn get_by_id(&self, id: UserId) -> Result<Option<User>, ServiceError>;

    /// Look up a user by login name and password
    ///
    /// Returns `None` when either the name or the password does not match;
    /// the two cases are indistinguishable to the caller.
    async fn get_by_credentials(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Option<User>, ServiceError>;
}
