//! In-memory todo collection with a monotonic id allocator.
//!
//! # Design
//! Records live in a `Vec` so listing returns them in insertion order without
//! a sort. Lookups are linear; the collection is expected to stay small.
//! `next_id` only ever moves forward, so ids retired by `delete` are never
//! handed out again and gaps are left in place.

use crate::error::ServiceError;
use crate::types::Todo;

/// Authoritative set of todos plus the id allocator.
#[derive(Debug)]
pub struct TodoStore {
    todos: Vec<Todo>,
    next_id: u64,
}

impl Default for TodoStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TodoStore {
    pub fn new() -> Self {
        Self {
            todos: Vec::new(),
            next_id: 1,
        }
    }

    /// All todos in creation order.
    pub fn list_all(&self) -> &[Todo] {
        &self.todos
    }

    /// Store a new todo with trimmed `text` and return a copy of it.
    ///
    /// Blank text is refused without consuming an id.
    pub fn create(&mut self, text: &str, completed: bool) -> Result<Todo, ServiceError> {
        let text = trimmed(text)?;
        let todo = Todo {
            id: self.next_id,
            text,
            completed,
        };
        self.next_id += 1;
        self.todos.push(todo.clone());
        tracing::debug!(id = todo.id, "todo created");
        Ok(todo)
    }

    pub fn find_by_id(&self, id: u64) -> Option<&Todo> {
        self.todos.iter().find(|t| t.id == id)
    }

    /// Apply the supplied fields to an existing todo. Absent fields are left
    /// untouched; nothing is written if `text` is blank.
    pub fn update(
        &mut self,
        id: u64,
        text: Option<&str>,
        completed: Option<bool>,
    ) -> Result<Todo, ServiceError> {
        let text = text.map(trimmed).transpose()?;
        let todo = self
            .todos
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(ServiceError::NotFound(id))?;
        if let Some(text) = text {
            todo.text = text;
        }
        if let Some(completed) = completed {
            todo.completed = completed;
        }
        tracing::debug!(id, "todo updated");
        Ok(todo.clone())
    }

    pub fn delete(&mut self, id: u64) -> Result<(), ServiceError> {
        let index = self
            .todos
            .iter()
            .position(|t| t.id == id)
            .ok_or(ServiceError::NotFound(id))?;
        self.todos.remove(index);
        tracing::debug!(id, "todo deleted");
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.todos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }
}

/// Trim surrounding whitespace, rejecting text that ends up empty.
pub(crate) fn trimmed(text: &str) -> Result<String, ServiceError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(ServiceError::invalid("text cannot be empty"));
    }
    Ok(text.to_string())
}
