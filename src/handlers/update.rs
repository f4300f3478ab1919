use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};

use crate::error::{ApiError, ErrorResponse};
use crate::models::UpdateRequest;
use crate::routes;
use crate::state::AppState;

/// PUT /kv/{key} handler - Replace the value of an existing entry
#[utoipa::path(
    put,
    path = routes::KV_ITEM,
    params(
        ("key" = String, Path, description = "Key of the entry")
    ),
    request_body = UpdateRequest,
    responses(
        (status = 200, description = "Entry updated"),
        (status = 400, description = "Missing or mistyped value, or value is not JSON", body = ErrorResponse),
        (status = 404, description = "Key not found", body = ErrorResponse)
    ),
    tag = "kv"
)]
pub async fn update_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
    payload: Result<Json<UpdateRequest>, JsonRejection>,
) -> Result<StatusCode, ApiError> {
    let Json(request) = payload?;
    request.validate()?;

    state.store.update(&key, request.value)?;

    tracing::info!("Successfully updated entry with key: {}", key);
    Ok(StatusCode::OK)
}
