//! Zone and campus occupancy passthroughs.

use backend_domain::{CampusSummary, Zone, ZoneForecast, ZoneOccupancy};

use crate::error::AppError;
use crate::state::AppState;

pub async fn list_zones(state: &AppState) -> Result<Vec<Zone>, AppError> {
    Ok(state.analytics.list_zones().await?)
}

pub async fn get_occupancy(state: &AppState, zone_id: &str) -> Result<ZoneOccupancy, AppError> {
    Ok(state.analytics.get_zone_occupancy(zone_id).await?)
}

pub async fn get_forecast(
    state: &AppState,
    zone_id: &str,
    target_datetime: &str,
) -> Result<Vec<ZoneForecast>, AppError> {
    Ok(state
        .analytics
        .get_zone_forecast(zone_id, target_datetime)
        .await?)
}

pub async fn campus_summary(state: &AppState) -> Result<CampusSummary, AppError> {
    Ok(state.analytics.get_campus_summary().await?)
}
