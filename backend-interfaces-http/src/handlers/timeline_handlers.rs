use axum::extract::{Path, Query, State};
use axum::http::HeaderMap;
use axum::Json;

use backend_application::queries::timeline_queries::{self, TimelineView};
use backend_application::AppState;
use backend_domain::{DateRange, TimelineData, TimelineSummary};

use crate::error::HttpError;
use crate::middleware::{authenticate, require_entity_access};

#[derive(serde::Deserialize)]
pub struct TimelineQuery {
    pub gap_threshold_hours: Option<f64>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

impl TimelineQuery {
    fn range(&self) -> DateRange {
        DateRange {
            start_date: self.start_date.clone(),
            end_date: self.end_date.clone(),
        }
    }
}

pub async fn get_timeline(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(entity_id): Path<String>,
    Query(query): Query<TimelineQuery>,
) -> Result<Json<TimelineView>, HttpError> {
    let claims = authenticate(&state, &headers)?;
    require_entity_access(&claims, &entity_id)?;
    let timeline = timeline_queries::get_merged_timeline(
        &state,
        &entity_id,
        query.gap_threshold_hours,
        &query.range(),
    )
    .await?;
    Ok(Json(timeline))
}

pub async fn get_timeline_events(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(entity_id): Path<String>,
    Query(query): Query<TimelineQuery>,
) -> Result<Json<TimelineData>, HttpError> {
    let claims = authenticate(&state, &headers)?;
    require_entity_access(&claims, &entity_id)?;
    let timeline = timeline_queries::get_raw_timeline(&state, &entity_id, &query.range()).await?;
    Ok(Json(timeline))
}

pub async fn get_timeline_summary(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(entity_id): Path<String>,
    Query(query): Query<TimelineQuery>,
) -> Result<Json<TimelineSummary>, HttpError> {
    let claims = authenticate(&state, &headers)?;
    require_entity_access(&claims, &entity_id)?;
    let summary =
        timeline_queries::get_timeline_summary(&state, &entity_id, &query.range()).await?;
    Ok(Json(summary))
}
