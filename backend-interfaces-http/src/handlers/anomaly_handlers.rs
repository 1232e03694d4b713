use axum::extract::{Path, Query, State};
use axum::http::HeaderMap;
use axum::Json;

use backend_application::queries::anomaly_queries::{self, AnomalyFilter, AnomalyPage};
use backend_application::AppState;
use backend_domain::{AnomalyKind, AnomalySummary, Severity};

use crate::error::HttpError;
use crate::middleware::{authenticate, require_entity_access};

#[derive(serde::Deserialize)]
pub struct AnomalyListQuery {
    pub severity: Option<Severity>,
    #[serde(rename = "type")]
    pub kind: Option<AnomalyKind>,
    pub page: Option<usize>,
    pub page_size: Option<usize>,
}

#[derive(serde::Deserialize)]
pub struct AnomalySummaryQuery {
    pub hours: Option<u32>,
}

pub async fn list_entity_anomalies(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(entity_id): Path<String>,
    Query(query): Query<AnomalyListQuery>,
) -> Result<Json<AnomalyPage>, HttpError> {
    let claims = authenticate(&state, &headers)?;
    require_entity_access(&claims, &entity_id)?;
    let filter = AnomalyFilter {
        severity: query.severity,
        kind: query.kind,
        page: query.page,
        page_size: query.page_size,
    };
    let page = anomaly_queries::list_entity_anomalies(&state, &entity_id, &filter).await?;
    Ok(Json(page))
}

pub async fn get_anomaly_summary(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<AnomalySummaryQuery>,
) -> Result<Json<AnomalySummary>, HttpError> {
    authenticate(&state, &headers)?;
    let summary = anomaly_queries::get_summary(&state, query.hours.unwrap_or(24)).await?;
    Ok(Json(summary))
}
