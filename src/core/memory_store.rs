//! In-memory store backing the service
//!
//! This module provides `MemoryStore`, a DashMap-backed implementation of
//! all three store traits. It is the reference store for tests and for
//! deployments that do not need durability.
//!
//! # Design
//!
//! Accounts, transactions, and users each live in their own `DashMap`,
//! giving fine-grained locking per entity. Transaction identifiers come
//! from an atomic sequence and are assigned only once a commit is certain
//! to succeed.
//!
//! # Atomicity
//!
//! `insert` performs the balance-check-then-commit sequence while holding
//! the account's map entry. Concurrent commits against the same account
//! serialize on that entry; commits against different accounts proceed in
//! parallel. The projection is recomputed from the live balance under the
//! lock, so a decision made against a stale balance can never reach the
//! log: of two concurrent debits that each pass the service's pre-checks,
//! the second to arrive here observes the first one's effect and is
//! refused if the remaining balance no longer covers it.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::core::traits::{AccountStore, TransactionStore, UserStore};
use crate::types::{
    Account, AccountId, ServiceError, Transaction, TransactionId, User, UserId,
};
use async_trait::async_trait;
use dashmap::DashMap;
use rust_decimal::Decimal;
use subtle::ConstantTimeEq;
use time::OffsetDateTime;

/// DashMap-backed store implementing account, transaction, and user access
///
/// Accounts and users are seeded through [`MemoryStore::put_account`] and
/// [`MemoryStore::put_user`]; the service layer itself never creates them.
#[derive(Debug)]
pub struct MemoryStore {
    /// Account state by account id
    accounts: DashMap<AccountId, Account>,

    /// Committed transaction records by transaction id
    transactions: DashMap<TransactionId, Transaction>,

    /// User records by user id
    users: DashMap<UserId, User>,

    /// Next transaction identifier to assign
    tx_seq: AtomicU64,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            accounts: DashMap::new(),
            transactions: DashMap::new(),
            users: DashMap::new(),
            tx_seq: AtomicU64::new(1),
        }
    }

    /// Seed or replace an account (administrative path)
    pub fn put_account(&self, account: Account) {
        self.accounts.insert(account.id, account);
    }

    /// Seed or replace a user (administrative path)
    pub fn put_user(&self, user: User) {
        self.users.insert(user.id, user);
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AccountStore for MemoryStore {
    async fn exists(&self, account_id: AccountId) -> Result<bool, ServiceError> {
        Ok(self.accounts.contains_key(&account_id))
    }

    async fn balance(&self, account_id: AccountId) -> Result<Decimal, ServiceError> {
        self.accounts
            .get(&account_id)
            .map(|account| account.balance)
            .ok_or_else(|| ServiceError::not_found("account"))
    }
}

#[async_trait]
impl TransactionStore for MemoryStore {
    async fn insert(
        &self,
        account_id: AccountId,
        amount: Decimal,
    ) -> Result<Transaction, ServiceError> {
        // The entry guard is the per-account lock: everything between here
        // and the end of the function is atomic with respect to other
        // commits against this account.
        let mut entry = self
            .accounts
            .get_mut(&account_id)
            .ok_or_else(|| ServiceError::persistence("no account exists with provided account id"))?;
        let account = entry.value_mut();

        let projected = account
            .balance
            .checked_add(amount)
            .ok_or_else(|| ServiceError::internal("balance overflow during commit"))?;

        if projected < Decimal::ZERO {
            tracing::warn!(
                account = account_id,
                balance = %account.balance,
                %amount,
                "commit refused, projected balance negative"
            );
            return Err(ServiceError::insufficient_funds(
                account_id,
                account.balance,
                amount,
            ));
        }

        // Ids are drawn only for commits that will succeed, so the log has
        // no holes from refused requests.
        let id = self.tx_seq.fetch_add(1, Ordering::SeqCst);
        let record = Transaction {
            id,
            account_id,
            amount,
            created_at: OffsetDateTime::now_utc(),
        };

        account.balance = projected;
        self.transactions.insert(id, record.clone());
        tracing::debug!(tx = id, account = account_id, %amount, "transaction committed");

        Ok(record)
    }

    async fn get_by_id(&self, id: TransactionId) -> Result<Option<Transaction>, ServiceError> {
        Ok(self.transactions.get(&id).map(|entry| entry.value().clone()))
    }

    async fn list_all(&self) -> Result<Vec<Transaction>, ServiceError> {
        let mut transactions: Vec<Transaction> = self
            .transactions
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        transactions.sort_by_key(|tx| tx.id);
        Ok(transactions)
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn list_all(&self) -> Result<Vec<User>, ServiceError> {
        let mut users: Vec<User> = self.users.iter().map(|entry| entry.value().clone()).collect();
        users.sort_by_key(|user| user.id);
        Ok(users)
    }

    async fn get_by_id(&self, id: UserId) -> Result<Option<User>, ServiceError> {
        Ok(self.users.get(&id).map(|entry| entry.value().clone()))
    }

    async fn get_by_credentials(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Option<User>, ServiceError> {
        let candidate = self
            .users
            .iter()
            .find(|entry| entry.value().username == username)
            .map(|entry| entry.value().clone());

        match candidate {
            Some(user) => {
                let stored = user.password.as_deref().unwrap_or("");
                if bool::from(stored.as_bytes().ct_eq(password.as_bytes())) {
                    Ok(Some(user))
                } else {
                    Ok(None)
                }
            }
            None => Ok(None),
        }
    }
}
