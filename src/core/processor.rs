//! Transaction processing service
//!
//! This module provides the `TransactionProcessor`, the single authority for
//! deciding whether a proposed transaction may be committed. It orchestrates
//! the account and transaction sides of the store and enforces the balance
//! invariant: an account balance is never observed negative after a commit.
//!
//! # Algorithm
//!
//! `add_new_transaction` runs its checks strictly in order (structural
//! validation, account existence, balance projection, sufficiency) and only
//! then touches the store for the commit. The order is part of the contract:
//! a missing account is reported before any balance read happens, and no
//! store mutation occurs until every check has passed.
//!
//! # Concurrency
//!
//! The processor holds no mutable state of its own; every instance is a thin
//! handle over a shared store and can serve any number of concurrent tasks.
//! Its pre-checks decide against a balance snapshot that may be stale by
//! commit time, so the store's conditional insert re-validates the projection
//! under the account's lock. The processor's contract is simply "never commit
//! if the projected balance was negative at decision time"; the store makes
//! decision time and commit time observe a consistent snapshot.

use std::sync::Arc;

use crate::core::traits::{AccountStore, TransactionStore};
use crate::core::validation;
use crate::types::{
    AccountId, ServiceError, Transaction, TransactionDraft, TransactionId,
};
use rust_decimal::Decimal;

/// Validates and creates transactions against live account state
///
/// Constructed with an explicit store handle; there is no global or
/// singleton store access anywhere in the service.
pub struct TransactionProcessor<S> {
    /// Shared store handle covering both account reads and transaction writes
    store: Arc<S>,
}

impl<S> TransactionProcessor<S>
where
    S: AccountStore + TransactionStore,
{
    /// Create a new processor over the given store
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// List every transaction, ordered by identifier
    ///
    /// # Errors
    ///
    /// Fails with `ResourceNotFound` when the store holds no transactions.
    /// An empty collection is an error by contract, not a valid empty
    /// result.
    pub async fn get_all_transactions(&self) -> Result<Vec<Transaction>, ServiceError> {
        let transactions = self.store.list_all().await?;

        if transactions.is_empty() {
            return Err(ServiceError::not_found("transactions"));
        }

        Ok(transactions)
    }

    /// Look up a single transaction by its identifier
    ///
    /// # Errors
    ///
    /// * `BadRequest` when `id` is not a valid positive identifier
    /// * `ResourceNotFound` when no transaction with that id exists
    pub async fn get_transaction_by_id(
        &self,
        id: TransactionId,
    ) -> Result<Transaction, ServiceError> {
        if !validation::is_valid_id(id) {
            return Err(ServiceError::bad_request(
                "transaction id must be a positive integer",
            ));
        }

        self.store
            .get_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("transaction"))
    }

    /// Validate a draft and commit it as a new transaction
    ///
    /// On success the account balance has been moved by `draft.amount` and
    /// the returned record carries its store-assigned identifier. On any
    /// failure neither the balance nor the transaction log has changed.
    ///
    /// # Errors
    ///
    /// * `BadRequest` when the draft is missing its account reference or
    ///   amount
    /// * `ResourcePersistence` when the referenced account does not exist
    /// * `InsufficientFunds` when the projected balance would be negative
    /// * any store error, propagated unchanged
    pub async fn add_new_transaction(
        &self,
        draft: TransactionDraft,
    ) -> Result<Transaction, ServiceError> {
        let amount = validation::validate_draft(&draft)?;

        if !self.check_account_exists(draft.account_id).await? {
            return Err(ServiceError::persistence(
                "no account exists with provided account id",
            ));
        }

        let balance = self.check_account_balance(draft.account_id).await?;

        let projected = balance
            .checked_add(amount)
            .ok_or_else(|| ServiceError::internal("balance overflow during projection"))?;

        if projected < Decimal::ZERO {
            return Err(ServiceError::insufficient_funds(
                draft.account_id,
                balance,
                amount,
            ));
        }

        // The store re-validates the projection under the account lock, so
        // a concurrent commit that consumed the balance since the read
        // above surfaces as InsufficientFunds rather than an overdraw.
        self.store.insert(draft.account_id, amount).await
    }

    /// Read the current balance of an account, store errors propagated
    /// unchanged
    pub async fn check_account_balance(
        &self,
        account_id: AccountId,
    ) -> Result<Decimal, ServiceError> {
        self.store.balance(account_id).await
    }

    /// Pre-commit guard: does the referenced account exist?
    async fn check_account_exists(&self, account_id: AccountId) -> Result<bool, ServiceError> {
        let exists = self.store.exists(account_id).await?;
        if exists {
            tracing::debug!(account = account_id, "account exists, proceeding");
        } else {
            tracing::debug!(account = account_id, "no account found with this id");
        }
        Ok(exists)
    }
}
