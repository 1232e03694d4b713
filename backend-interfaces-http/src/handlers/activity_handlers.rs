use axum::extract::{Path, Query, State};
use axum::http::HeaderMap;
use axum::Json;

use backend_application::queries::activity_queries::{self, ActivityView};
use backend_application::AppState;
use backend_domain::ViewMode;

use crate::error::HttpError;
use crate::middleware::{authenticate, require_entity_access};

#[derive(serde::Deserialize)]
pub struct ActivityQuery {
    pub days: Option<u32>,
    #[serde(default)]
    pub view: ViewMode,
}

pub async fn get_activity(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(entity_id): Path<String>,
    Query(query): Query<ActivityQuery>,
) -> Result<Json<ActivityView>, HttpError> {
    let claims = authenticate(&state, &headers)?;
    require_entity_access(&claims, &entity_id)?;
    let activity = activity_queries::get_activity(&state, &entity_id, query.days, query.view).await?;
    Ok(Json(activity))
}
