use axum::extract::{Path, State};
use axum::http::HeaderMap;
use axum::Json;

use backend_application::queries::dashboard_queries::{self, DashboardData};
use backend_application::AppState;

use crate::error::HttpError;
use crate::middleware::{authenticate, require_entity_access};

pub async fn get_dashboard(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(entity_id): Path<String>,
) -> Result<Json<DashboardData>, HttpError> {
    let claims = authenticate(&state, &headers)?;
    require_entity_access(&claims, &entity_id)?;
    let dashboard = dashboard_queries::load_dashboard(&state, &entity_id).await?;
    Ok(Json(dashboard))
}
