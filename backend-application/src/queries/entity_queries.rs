//! Entity lookup, search, and fusion reporting.

use serde::Serialize;
use tracing::warn;

use backend_domain::{
    EntityEnvelope, EntityList, EntityListQuery, EntitySearchRequest, EntitySearchResponse, FusionReport,
    FuzzyMatch, PredictionData,
};

use crate::error::AppError;
use crate::state::AppState;

/// Entity detail plus its identity-fusion report. The profile is usable
/// without the report, so a fusion failure degrades to a warning.
#[derive(Debug, Clone, Serialize)]
pub struct EntityProfile {
    pub entity: EntityEnvelope,
    pub fusion_report: Option<FusionReport>,
    pub warnings: Vec<String>,
}

pub async fn get_profile(state: &AppState, entity_id: &str) -> Result<EntityProfile, AppError> {
    let (entity, fusion) = tokio::join!(
        state.analytics.get_entity(entity_id),
        state.analytics.get_fusion_report(entity_id),
    );

    let entity = entity?;
    let mut warnings = Vec::new();
    let fusion_report = match fusion {
        Ok(report) => Some(report),
        Err(err) => {
            warn!(entity_id, error = %err, "fusion report unavailable");
            state.metrics.record_upstream_error();
            warnings.push("Failed to load fusion report".to_string());
            None
        }
    };

    Ok(EntityProfile {
        entity,
        fusion_report,
        warnings,
    })
}

pub async fn search(
    state: &AppState,
    request: &EntitySearchRequest,
) -> Result<EntitySearchResponse, AppError> {
    Ok(state.analytics.search_entity(request).await?)
}

pub async fn fuzzy_search(
    state: &AppState,
    name: &str,
    threshold: Option<f64>,
) -> Result<Vec<FuzzyMatch>, AppError> {
    if name.trim().is_empty() {
        return Err(AppError::BadRequest("search name must not be empty".into()));
    }
    let threshold = threshold.unwrap_or(state.config.fuzzy_threshold);
    Ok(state.analytics.fuzzy_search(name, threshold).await?)
}

pub async fn list(state: &AppState, query: &EntityListQuery) -> Result<EntityList, AppError> {
    Ok(state.analytics.list_entities(query).await?)
}

pub async fn predict_location(
    state: &AppState,
    entity_id: &str,
    lookback_days: Option<u32>,
    target_time: Option<&str>,
) -> Result<PredictionData, AppError> {
    let lookback = lookback_days.unwrap_or(state.config.lookback_days);
    Ok(state
        .analytics
        .predict_location(entity_id, lookback, target_time)
        .await?)
}

pub async fn predict_during_gap(
    state: &AppState,
    entity_id: &str,
    gap_start: &str,
    gap_end: &str,
) -> Result<PredictionData, AppError> {
    Ok(state
        .analytics
        .predict_during_gap(entity_id, gap_start, gap_end)
        .await?)
}
