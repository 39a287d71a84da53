//! Error types for the transaction service
//!
//! This module defines all error kinds a service operation can surface.
//! The request layer is the only place where these are translated into
//! transport-level responses; nothing inside the service recovers from them.
//!
//! # Error Categories
//!
//! - **BadRequest**: malformed/invalid input (bad id, incomplete draft)
//! - **ResourceNotFound**: id-addressed entity absent, or a listing came back empty
//! - **ResourcePersistence**: a referenced foreign entity (the account) does not exist
//! - **InsufficientFunds**: committing would drive an account balance negative
//! - **Auth**: credential lookup found nothing
//! - **Internal**: store/infrastructure failure (connectivity, arithmetic overflow)

use crate::types::transaction::AccountId;
use rust_decimal::Decimal;
use thiserror::Error;

/// Main error type for the transaction service
///
/// Every service operation returns either a success value or one of these
/// variants. Variants carry enough context to diagnose the failure without
/// consulting logs.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ServiceError {
    /// Input failed structural validation before any store access
    #[error("Invalid request: {reason}")]
    BadRequest {
        /// What was wrong with the input
        reason: String,
    },

    /// An id-addressed entity is absent, or a bulk listing was empty
    ///
    /// An empty collection is deliberately treated as an error here,
    /// not a valid empty result.
    #[error("No {resource} found")]
    ResourceNotFound {
        /// The entity (or collection) that was looked up
        resource: String,
    },

    /// A referenced foreign entity does not exist, so the record cannot be persisted
    #[error("{message}")]
    ResourcePersistence {
        /// Description of the missing reference
        message: String,
    },

    /// Committing the transaction would drive the account balance negative
    ///
    /// Only debits (negative amounts) can trigger this; credits always pass.
    #[error(
        "Insufficient funds for account {account}: balance {balance}, requested {requested}"
    )]
    InsufficientFunds {
        /// Account the debit was attempted against
        account: AccountId,
        /// Balance observed at decision time
        balance: Decimal,
        /// The (negative) amount that was requested
        requested: Decimal,
    },

    /// Credential lookup matched no user
    #[error("Invalid credentials")]
    Auth,

    /// Store or infrastructure failure the service cannot interpret
    #[error("Internal service error: {message}")]
    Internal {
        /// Description of the underlying failure
        message: String,
    },
}

// Helper constructors, used throughout the service and store layers

impl ServiceError {
    /// Create a BadRequest error
    pub fn bad_request(reason: impl Into<String>) -> Self {
        ServiceError::BadRequest {
            reason: reason.into(),
        }
    }

    /// Create a ResourceNotFound error
    pub fn not_found(resource: impl Into<String>) -> Self {
        ServiceError::ResourceNotFound {
            resource: resource.into(),
        }
    }

    /// Create a ResourcePersistence error
    pub fn persistence(message: impl Into<String>) -> Self {
        ServiceError::ResourcePersistence {
            message: message.into(),
        }
    }

    /// Create an InsufficientFunds error
    pub fn insufficient_funds(account: AccountId, balance: Decimal, requested: Decimal) -> Self {
        ServiceError::InsufficientFunds {
            account,
            balance,
            requested,
        }
    }

    /// Create an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        ServiceError::Internal {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal::Decimal;

    #[rstest]
    #[case::bad_request(
        ServiceError::bad_request("transaction id must be a positive integer"),
        "Invalid request: transaction id must be a positive integer"
    )]
    #[case::not_found_single(
        ServiceError::not_found("transaction"),
        "No transaction found"
    )]
    #[case::not_found_listing(
        ServiceError::not_found("transactions"),
        "No transactions found"
    )]
    #[case::persistence(
        ServiceError::persistence("no account exists with provided account id"),
        "no account exists with provided account id"
    )]
    #[case::insufficient_funds(
        ServiceError::insufficient_funds(7, Decimal::new(10000, 2), Decimal::new(-15000, 2)),
        "Insufficient funds for account 7: balance 100.00, requested -150.00"
    )]
    #[case::auth(ServiceError::Auth, "Invalid credentials")]
    #[case::internal(
        ServiceError::internal("store unavailable"),
        "Internal service error: store unavailable"
    )]
    fn test_error_display(#[case] error: ServiceError, #[case] expected: &str) {
        assert_eq!(error.to_string(), expected);
    }

    #[rstest]
    #[case::bad_request(
        ServiceError::bad_request("empty draft"),
        ServiceError::BadRequest { reason: "empty draft".to_string() }
    )]
    #[case::not_found(
        ServiceError::not_found("users"),
        ServiceError::ResourceNotFound { resource: "users".to_string() }
    )]
    #[case::insufficient_funds(
        ServiceError::insufficient_funds(1, Decimal::ONE, Decimal::NEGATIVE_ONE),
        ServiceError::InsufficientFunds {
            account: 1,
            balance: Decimal::ONE,
            requested: Decimal::NEGATIVE_ONE,
        }
    )]
    fn test_helper_constructors(#[case] result: ServiceError, #[case] expected: ServiceError) {
        assert_eq!(result, expected);
    }
}
