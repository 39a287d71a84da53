//! Transaction Service Library
//! # Overview
//!
//! This library provides an async account/user/transaction service with a
//! balance-checked transaction creation path as its core.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (Account, Transaction, User, errors)
//! - [`core`] - Business logic components:
//!   - [`core::processor`] - Transaction validation and commit orchestration
//!   - [`core::users`] - User lookups with credential redaction
//!   - [`core::traits`] - Store trait abstractions (the persistence boundary)
//!   - [`core::memory_store`] - DashMap-backed store implementation
//!
//! # Transaction Lifecycle
//!
//! A caller submits a [`types::TransactionDraft`]; the processor validates it
//! (structure, account existence, balance sufficiency) and commits it through
//! the store, which applies the balance update atomically with the insert.
//! Persisted transactions are immutable: there is no update, delete, or
//! reversal path.
//!
//! # Error Handling
//!
//! Every operation returns `Result<T, ServiceError>`. The service performs no
//! recovery and no retries; the request layer alone translates error kinds
//! into transport responses.

// Module declarations
pub mod core;
pub mod types;

pub use core::{
    AccountStore, MemoryStore, TransactionProcessor, TransactionStore, UserService, UserStore,
};
pub use types::{
    Account, AccountId, Role, ServiceError, Transaction, TransactionDraft, TransactionId,
    TransactionKind, User, UserId,
};
