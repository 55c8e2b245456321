//! Storage error types.

use thiserror::Error;

/// Errors that can occur in a repository
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("No {kind} with id '{id}'")]
    NotFound { kind: &'static str, id: String },

    #[error("A {kind} with id '{id}' already exists")]
    Conflict { kind: &'static str, id: String },

    /// Backend could not serve the request. Never raised by `InMemoryRepository`;
    /// for networked `Repository` implementations.
    #[error("Store unavailable: {0}")]
    Unavailable(String),
}
