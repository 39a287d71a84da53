//! Core service module
//!
//! This module contains the service components:
//! - `traits` - Store trait abstractions (the persistence boundary)
//! - `processor` - Transaction validation and commit orchestration
//! - `users` - Read-only user lookups with credential redaction
//! - `memory_store` - DashMap-backed store implementation
//! - `validation` - Shared structural validation helpers

pub mod memory_store;
pub mod processor;
pub mod traits;
pub mod users;
pub mod validation;

pub use memory_store::MemoryStore;
pub use processor::TransactionProcessor;
pub use traits::{AccountStore, TransactionStore, UserStore};
pub use users::UserService;
