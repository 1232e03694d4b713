use axum::extract::{Path, Query, State};
use axum::http::HeaderMap;
use axum::Json;

use backend_application::queries::zone_queries;
use backend_application::AppState;
use backend_domain::{CampusSummary, Zone, ZoneForecast, ZoneOccupancy};

use crate::error::HttpError;
use crate::middleware::authenticate;

#[derive(serde::Deserialize)]
pub struct ForecastQuery {
    pub target_datetime: String,
}

pub async fn list_zones(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<Vec<Zone>>, HttpError> {
    authenticate(&state, &headers)?;
    let zones = zone_queries::list_zones(&state).await?;
    Ok(Json(zones))
}

pub async fn get_occupancy(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(zone_id): Path<String>,
) -> Result<Json<ZoneOccupancy>, HttpError> {
    authenticate(&state, &headers)?;
    let occupancy = zone_queries::get_occupancy(&state, &zone_id).await?;
    Ok(Json(occupancy))
}

pub async fn get_forecast(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(zone_id): Path<String>,
    Query(query): Query<ForecastQuery>,
) -> Result<Json<Vec<ZoneForecast>>, HttpError> {
    authenticate(&state, &headers)?;
    let forecast = zone_queries::get_forecast(&state, &zone_id, &query.target_datetime).await?;
    Ok(Json(forecast))
}

pub async fn campus_summary(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<CampusSummary>, HttpError> {
    authenticate(&state, &headers)?;
    let summary = zone_queries::campus_summary(&state).await?;
    Ok(Json(summary))
}
