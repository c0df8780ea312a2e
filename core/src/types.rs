//! Domain record and request payloads for the todo service.
//!
//! # Design
//! `Todo` is the only shape the store hands out. The request payloads keep
//! every field optional so that "field missing" is a validation decision made
//! by `TodoService`, with its own message, rather than a decode failure.
//! `completed` is still typed as `bool`, so a non-boolean value never reaches
//! the service.

use serde::{Deserialize, Serialize};

/// A single todo item as stored and returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    pub id: u64,
    pub text: String,
    pub completed: bool,
}

/// Request payload for `POST /todos`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateTodo {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub completed: Option<bool>,
}

/// Request payload for `PUT /todos/{id}`. Only the fields present in the JSON
/// are applied; omitted fields remain unchanged.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateTodo {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub completed: Option<bool>,
}

impl UpdateTodo {
    /// True when the payload carries no field at all (`{}`).
    pub fn is_empty(&self) -> bool {
        self.text.is_none() && self.completed.is_none()
    }
}
