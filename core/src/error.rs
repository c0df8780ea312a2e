//! Error types for the todo service.
//!
//! # Design
//! Only two failures are expected from pure in-memory logic: the caller sent
//! something unusable, or the referenced id does not exist. The transport
//! maps each variant to a status code; the `Display` text is the message sent
//! back to the client.

use thiserror::Error;

/// Errors returned by `TodoService` operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    /// Missing body, missing `text`, blank `text` or an undecodable payload.
    #[error("{0}")]
    InvalidInput(String),

    /// No todo with the requested id exists.
    #[error("Todo with id {0} not found")]
    NotFound(u64),
}

impl ServiceError {
    pub fn invalid(message: impl Into<String>) -> Self {
        ServiceError::InvalidInput(message.into())
    }
}
