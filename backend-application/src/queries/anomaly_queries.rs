//! Anomaly listing with local severity/type filtering and paging.
//!
//! The analytics backend returns an entity's full anomaly set; filters and
//! pagination are applied here rather than upstream.

use serde::Serialize;

use backend_domain::{Anomaly, AnomalyKind, AnomalySummary, Severity};

use crate::error::AppError;
use crate::state::AppState;

const DEFAULT_PAGE_SIZE: usize = 20;
const MAX_PAGE_SIZE: usize = 100;

#[derive(Debug, Clone, Default)]
pub struct AnomalyFilter {
    pub severity: Option<Severity>,
    pub kind: Option<AnomalyKind>,
    /// 1-based page number.
    pub page: Option<usize>,
    pub page_size: Option<usize>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AnomalyPage {
    pub entity_id: String,
    pub items: Vec<Anomaly>,
    /// Count after filtering, before paging.
    pub total: usize,
    pub page: usize,
    pub page_size: usize,
}

pub async fn list_entity_anomalies(
    state: &AppState,
    entity_id: &str,
    filter: &AnomalyFilter,
) -> Result<AnomalyPage, AppError> {
    let report = state.analytics.get_entity_anomalies(entity_id).await?;
    Ok(filter_page(entity_id, report.anomalies, filter))
}

pub async fn get_summary(state: &AppState, hours: u32) -> Result<AnomalySummary, AppError> {
    Ok(state.analytics.get_anomaly_summary(hours).await?)
}

fn filter_page(entity_id: &str, anomalies: Vec<Anomaly>, filter: &AnomalyFilter) -> AnomalyPage {
    let filtered: Vec<Anomaly> = anomalies
        .into_iter()
        .filter(|a| filter.severity.map_or(true, |s| a.severity == s))
        .filter(|a| filter.kind.as_ref().map_or(true, |k| &a.kind == k))
        .collect();

    let page = filter.page.unwrap_or(1).max(1);
    let page_size = filter
        .page_size
        .unwrap_or(DEFAULT_PAGE_SIZE)
        .clamp(1, MAX_PAGE_SIZE);
    let total = filtered.len();

    let items = filtered
        .into_iter()
        .skip((page - 1) * page_size)
        .take(page_size)
        .collect();

    AnomalyPage {
        entity_id: entity_id.to_string(),
        items,
        total,
        page,
        page_size,
    }
}
