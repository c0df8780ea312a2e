//! Domain core for the todo service.
//!
//! # Overview
//! Holds the in-memory todo collection and the validation rules applied to
//! incoming requests, without any HTTP or async dependency. The server crate
//! wraps a `TodoService` in a lock and maps its results to status codes.
//!
//! # Design
//! - `TodoStore` owns the records and the id allocator; ids are never reused.
//! - `TodoService` validates typed payloads and dispatches to the store.
//! - Every failure is a `ServiceError`, either `InvalidInput` or `NotFound`.

pub mod error;
pub mod service;
pub mod store;
pub mod types;

pub use error::ServiceError;
pub use service::{decode_payload, TodoService};
pub use store::TodoStore;
pub use types::{CreateTodo, Todo, UpdateTodo};
