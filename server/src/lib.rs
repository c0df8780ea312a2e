//! HTTP transport for the todo service.
//!
//! Routes `/todos` and `/todos/{id}` to a shared `TodoService`. Bodies are
//! taken as raw bytes and decoded by the core so that a missing or malformed
//! body is reported as a 400 with a message, not as an extractor rejection.

pub mod config;
pub mod error;
pub mod extract;

use std::{future::Future, sync::Arc};

use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};
use todo_core::{decode_payload, CreateTodo, Todo, TodoService, UpdateTodo};
use tokio::{net::TcpListener, sync::RwLock};
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};

pub use config::ServerConfig;
pub use error::{ApiError, ErrorBody};
pub use extract::TodoId;

/// Service shared by all handlers. Mutations hold the write lock for the
/// whole operation.
pub type SharedService = Arc<RwLock<TodoService>>;

/// Router over a fresh, empty store.
pub fn app() -> Router {
    app_with(TodoService::new())
}

pub fn app_with(service: TodoService) -> Router {
    let state: SharedService = Arc::new(RwLock::new(service));
    Router::new()
        .route("/todos", get(list_todos).post(create_todo))
        .route("/todos/{id}", put(update_todo).delete(delete_todo))
        .layer(TraceLayer::new_for_http())
        .layer(CatchPanicLayer::custom(error::panic_response))
        .with_state(state)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

/// Serve until `shutdown` resolves, then drain in-flight requests.
pub async fn run_until<F>(listener: TcpListener, shutdown: F) -> Result<(), std::io::Error>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, app())
        .with_graceful_shutdown(shutdown)
        .await
}

async fn list_todos(State(service): State<SharedService>) -> Json<Vec<Todo>> {
    Json(service.read().await.list())
}

async fn create_todo(
    State(service): State<SharedService>,
    body: Bytes,
) -> Result<(StatusCode, Json<Todo>), ApiError> {
    let input = decode_payload::<CreateTodo>(&body)?;
    let todo = service.write().await.create(input)?;
    tracing::info!(id = todo.id, "created todo");
    Ok((StatusCode::CREATED, Json(todo)))
}

async fn update_todo(
    State(service): State<SharedService>,
    TodoId(id): TodoId,
    body: Bytes,
) -> Result<Json<Todo>, ApiError> {
    let input = decode_payload::<UpdateTodo>(&body)?;
    let todo = service.write().await.update(id, input)?;
    tracing::info!(id, "updated todo");
    Ok(Json(todo))
}

async fn delete_todo(
    State(service): State<SharedService>,
    TodoId(id): TodoId,
) -> Result<StatusCode, ApiError> {
    service.write().await.delete(id)?;
    tracing::info!(id, "deleted todo");
    Ok(StatusCode::NO_CONTENT)
}
