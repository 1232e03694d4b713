use axum::extract::State;
use axum::http::{header, HeaderMap, HeaderValue, StatusCode};
use axum::response::IntoResponse;
use tokio::time::{timeout, Duration};
use tracing::error;

use backend_application::AppState;

pub async fn health_live() -> StatusCode {
    StatusCode::OK
}

/// Ready means both the local user store and the analytics backend answer
/// within the request timeout.
pub async fn health_ready(State(state): State<AppState>) -> StatusCode {
    let timeout_secs = state.config.request_timeout_seconds.max(1);
    let timeout_duration = Duration::from_secs(timeout_secs);

    match timeout(timeout_duration, state.users.ping()).await {
        Ok(Ok(_)) => {}
        Ok(Err(err)) => {
            error!("user store ready check failed: {}", err);
            return StatusCode::SERVICE_UNAVAILABLE;
        }
        Err(_) => {
            error!("user store ready check timeout after {}s", timeout_secs);
            return StatusCode::SERVICE_UNAVAILABLE;
        }
    }

    match timeout(timeout_duration, state.analytics.ping()).await {
        Ok(Ok(_)) => StatusCode::OK,
        Ok(Err(err)) => {
            error!("analytics ready check failed: {}", err);
            StatusCode::SERVICE_UNAVAILABLE
        }
        Err(_) => {
            error!("analytics ready check timeout after {}s", timeout_secs);
            StatusCode::SERVICE_UNAVAILABLE
        }
    }
}

pub async fn metrics_prometheus(State(state): State<AppState>) -> impl IntoResponse {
    let payload = state.metrics.render_prometheus();
    let mut headers = HeaderMap::new();
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("text/plain; version=0.0.4; charset=utf-8"),
    );
    (headers, payload).into_response()
}
