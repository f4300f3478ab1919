use crate::error::HealthResponse;
use crate::routes;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, Json};

/// GET /health handler - Health check endpoint
///
/// The store lives in process memory and cannot become unreachable, so this
/// always answers 200 and reports how many entries are held.
#[utoipa::path(
    get,
    path = routes::HEALTH,
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    ),
    tag = "health"
)]
pub async fn health_handler(
    State(state): State<AppState>,
) -> (StatusCode, Json<HealthResponse>) {
    let entries = state.store.len();
    if state.store.is_empty() {
        tracing::debug!("Health check passed (store empty)");
    } else {
        tracing::debug!("Health check passed ({} entries)", entries);
    }

    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "healthy".to_string(),
            entries,
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::testing::empty_request;
    use crate::store::KvStore;
    use axum::{routing::get, Router};
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_health_endpoint_healthy() {
        let store = KvStore::new();
        store.create("one", "1".to_string()).unwrap();

        let app = Router::new()
            .route(routes::HEALTH, get(health_handler))
            .with_state(AppState::new(store));

        let response = app.oneshot(empty_request("GET", "/health")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let response_json: HealthResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(response_json.status, "healthy");
        assert_eq!(response_json.entries, 1);
    }
}
