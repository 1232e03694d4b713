//! Timeline view: events and gaps merged into one descending sequence.

use serde::Serialize;

use backend_domain::{
    merge_timeline, DateRange, TimelineData, TimelineItem, TimelineStatistics, TimelineSummary,
};

use crate::error::AppError;
use crate::state::AppState;

/// Merged timeline ready for rendering, newest first.
#[derive(Debug, Clone, Serialize)]
pub struct TimelineView {
    pub entity_id: String,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub total_events: u64,
    pub total_gaps: usize,
    pub items: Vec<TimelineItem>,
    pub statistics: Option<TimelineStatistics>,
}

pub async fn get_merged_timeline(
    state: &AppState,
    entity_id: &str,
    gap_threshold_hours: Option<f64>,
    range: &DateRange,
) -> Result<TimelineView, AppError> {
    let threshold = gap_threshold_hours.unwrap_or(state.config.gap_threshold_hours);
    let data = state
        .analytics
        .get_timeline_with_gaps(entity_id, threshold, range)
        .await?;

    let total_gaps = data.gaps.len();
    let items = merge_timeline(data.events, data.gaps);

    Ok(TimelineView {
        entity_id: data.entity_id,
        start_date: data.start_date,
        end_date: data.end_date,
        total_events: data.total_events,
        total_gaps,
        items,
        statistics: data.statistics,
    })
}

/// Unmerged event list straight from the analytics backend, no gap
/// detection applied.
pub async fn get_raw_timeline(
    state: &AppState,
    entity_id: &str,
    range: &DateRange,
) -> Result<TimelineData, AppError> {
    Ok(state.analytics.get_timeline(entity_id, range).await?)
}

pub async fn get_timeline_summary(
    state: &AppState,
    entity_id: &str,
    range: &DateRange,
) -> Result<TimelineSummary, AppError> {
    Ok(state.analytics.get_timeline_summary(entity_id, range).await?)
}
