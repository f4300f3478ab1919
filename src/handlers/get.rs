use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
};

use crate::error::{ApiError, ErrorResponse};
use crate::routes;
use crate::state::AppState;

/// GET /kv/{key} handler - Return the stored value exactly as it was written
#[utoipa::path(
    get,
    path = routes::KV_ITEM,
    params(
        ("key" = String, Path, description = "Key of the entry")
    ),
    responses(
        (status = 200, description = "Raw stored JSON value", body = serde_json::Value, content_type = "application/json"),
        (status = 404, description = "Key not found", body = ErrorResponse)
    ),
    tag = "kv"
)]
pub async fn get_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    match state.store.get(&key) {
        Ok(value) => {
            tracing::info!("Successfully retrieved entry with key: {}", key);
            Ok((
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                value,
            ))
        }
        Err(err) => {
            tracing::debug!("Entry not found with key: {}", key);
            Err(err.into())
        }
    }
}
