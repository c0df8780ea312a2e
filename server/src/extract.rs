//! Request extractors whose rejections use the JSON error body.

use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use todo_core::ServiceError;

use crate::error::ApiError;

/// The `{id}` path segment as a todo id.
///
/// Anything that is not a non-negative integer is rejected as
/// `InvalidInput` instead of axum's plain-text path rejection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TodoId(pub u64);

impl<S> FromRequestParts<S> for TodoId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<u64>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| {
                tracing::debug!(error = %rejection.body_text(), "invalid todo id");
                ServiceError::invalid(format!("invalid todo id: {}", rejection.body_text()))
            })?;
        Ok(TodoId(id))
    }
}
