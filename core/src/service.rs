//! Request validation and store dispatch.
//!
//! # Design
//! `TodoService` is the only owner of a `TodoStore`. Each operation checks
//! its payload first, then performs the lookup or mutation, and returns
//! either the resulting record or a `ServiceError`. No HTTP types appear
//! here; the transport decides which status code each outcome becomes.
//!
//! Mutating operations take `&mut self`, so a caller sharing one service
//! between requests must hold an exclusive lock for the whole call. That
//! keeps allocate-then-append and lookup-then-mutate atomic.

use serde::de::DeserializeOwned;

use crate::error::ServiceError;
use crate::store::{trimmed, TodoStore};
use crate::types::{CreateTodo, Todo, UpdateTodo};

/// Decode a raw request body into an optional typed payload.
///
/// An empty body and a JSON `null` both decode to `None`; the operation then
/// reports the missing body with its own message.
pub fn decode_payload<T: DeserializeOwned>(body: &[u8]) -> Result<Option<T>, ServiceError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(None);
    }
    serde_json::from_slice::<Option<T>>(body)
        .map_err(|e| ServiceError::invalid(format!("invalid JSON body: {e}")))
}

#[derive(Debug, Default)]
pub struct TodoService {
    store: TodoStore,
}

impl TodoService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn store(&self) -> &TodoStore {
        &self.store
    }

    pub fn list(&self) -> Vec<Todo> {
        self.store.list_all().to_vec()
    }

    pub fn create(&mut self, input: Option<CreateTodo>) -> Result<Todo, ServiceError> {
        let Some(CreateTodo {
            text: Some(text),
            completed,
        }) = input
        else {
            tracing::debug!("create rejected: missing text");
            return Err(ServiceError::invalid("text field is required"));
        };
        let text = trimmed(&text).inspect_err(|_| {
            tracing::debug!("create rejected: blank text");
        })?;
        self.store.create(&text, completed.unwrap_or(false))
    }

    pub fn update(&mut self, id: u64, input: Option<UpdateTodo>) -> Result<Todo, ServiceError> {
        let input = match input {
            Some(input) if !input.is_empty() => input,
            _ => {
                tracing::debug!(id, "update rejected: missing body");
                return Err(ServiceError::invalid("Request body is required"));
            }
        };
        let text = input
            .text
            .as_deref()
            .map(trimmed)
            .transpose()
            .inspect_err(|_| tracing::debug!(id, "update rejected: blank text"))?;
        self.store
            .update(id, text.as_deref(), input.completed)
            .inspect_err(|e| tracing::debug!(id, error = %e, "update failed"))
    }

    pub fn delete(&mut self, id: u64) -> Result<(), ServiceError> {
        self.store
            .delete(id)
            .inspect_err(|e| tracing::debug!(id, error = %e, "delete failed"))
    }
}
