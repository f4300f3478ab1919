use axum::{extract::rejection::JsonRejection, extract::State, http::StatusCode, Json};

use crate::error::{ApiError, ErrorResponse};
use crate::models::CreateRequest;
use crate::routes;
use crate::state::AppState;

/// POST /kv handler - Create a new entry
#[utoipa::path(
    post,
    path = routes::KV_ROOT,
    request_body = CreateRequest,
    responses(
        (status = 200, description = "Entry created"),
        (status = 400, description = "Missing or mistyped key/value, or value is not JSON", body = ErrorResponse),
        (status = 409, description = "Key already exists", body = ErrorResponse)
    ),
    tag = "kv"
)]
pub async fn create_handler(
    State(state): State<AppState>,
    payload: Result<Json<CreateRequest>, JsonRejection>,
) -> Result<StatusCode, ApiError> {
    let Json(request) = payload?;
    request.validate()?;

    state.store.create(&request.key, request.value)?;

    tracing::info!("Created entry with key: {}", request.key);
    Ok(StatusCode::OK)
}
