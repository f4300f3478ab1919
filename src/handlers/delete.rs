use axum::{
    extract::{Path, State},
    http::StatusCode,
};

use crate::error::{ApiError, ErrorResponse};
use crate::routes;
use crate::state::AppState;

/// DELETE /kv/{key} handler
#[utoipa::path(
    delete,
    path = routes::KV_ITEM,
    params(
        ("key" = String, Path, description = "Key of the entry")
    ),
    responses(
        (status = 200, description = "Entry deleted"),
        (status = 404, description = "Key not found", body = ErrorResponse)
    ),
    tag = "kv"
)]
pub async fn delete_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<StatusCode, ApiError> {
    state.store.delete(&key)?;

    tracing::info!("Deleted entry with key: {}", key);
    Ok(StatusCode::OK)
}
