use axum::extract::{Path, Query, State};
use axum::http::HeaderMap;
use axum::Json;

use backend_application::queries::entity_queries::{self, EntityProfile};
use backend_application::AppState;
use backend_domain::{
    EntityList, EntityListQuery, EntitySearchRequest, EntitySearchResponse, FuzzyMatch,
    PredictionData,
};

use crate::error::HttpError;
use crate::middleware::{authenticate, require_entity_access};

#[derive(serde::Deserialize)]
pub struct FuzzySearchQuery {
    pub name: String,
    pub threshold: Option<f64>,
}

#[derive(serde::Deserialize)]
pub struct PredictionQuery {
    pub lookback_days: Option<u32>,
    pub target_time: Option<String>,
}

#[derive(serde::Deserialize)]
pub struct GapPredictionQuery {
    pub gap_start: String,
    pub gap_end: String,
}

pub async fn get_profile(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(entity_id): Path<String>,
) -> Result<Json<EntityProfile>, HttpError> {
    let claims = authenticate(&state, &headers)?;
    require_entity_access(&claims, &entity_id)?;
    let profile = entity_queries::get_profile(&state, &entity_id).await?;
    Ok(Json(profile))
}

pub async fn list_entities(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<EntityListQuery>,
) -> Result<Json<EntityList>, HttpError> {
    authenticate(&state, &headers)?;
    let list = entity_queries::list(&state, &query).await?;
    Ok(Json(list))
}

pub async fn search_entity(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<EntitySearchRequest>,
) -> Result<Json<EntitySearchResponse>, HttpError> {
    authenticate(&state, &headers)?;
    let response = entity_queries::search(&state, &payload).await?;
    Ok(Json(response))
}

pub async fn fuzzy_search(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<FuzzySearchQuery>,
) -> Result<Json<Vec<FuzzyMatch>>, HttpError> {
    authenticate(&state, &headers)?;
    let matches = entity_queries::fuzzy_search(&state, &query.name, query.threshold).await?;
    Ok(Json(matches))
}

pub async fn predict_location(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(entity_id): Path<String>,
    Query(query): Query<PredictionQuery>,
) -> Result<Json<PredictionData>, HttpError> {
    let claims = authenticate(&state, &headers)?;
    require_entity_access(&claims, &entity_id)?;
    let prediction = entity_queries::predict_location(
        &state,
        &entity_id,
        query.lookback_days,
        query.target_time.as_deref(),
    )
    .await?;
    Ok(Json(prediction))
}

pub async fn predict_during_gap(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(entity_id): Path<String>,
    Query(query): Query<GapPredictionQuery>,
) -> Result<Json<PredictionData>, HttpError> {
    let claims = authenticate(&state, &headers)?;
    require_entity_access(&claims, &entity_id)?;
    let prediction =
        entity_queries::predict_during_gap(&state, &entity_id, &query.gap_start, &query.gap_end)
            .await?;
    Ok(Json(prediction))
}
