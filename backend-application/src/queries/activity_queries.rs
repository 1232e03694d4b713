//! Activity frequency view: heatmap fetch, validation, bucketing, stats.

use serde::Serialize;
use tracing::debug;

use backend_domain::{
    activity_statistics, aggregate_activity, parse_samples, ActivityBucket, ActivityStats,
    ViewMode,
};

use crate::error::AppError;
use crate::state::AppState;

/// Aggregated activity for one entity in one view mode.
#[derive(Debug, Clone, Serialize)]
pub struct ActivityView {
    pub entity_id: String,
    pub view: ViewMode,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub buckets: Vec<ActivityBucket>,
    pub stats: ActivityStats,
    /// Heatmap entries rejected during validation.
    pub skipped_entries: usize,
}

pub async fn get_activity(
    state: &AppState,
    entity_id: &str,
    days: Option<u32>,
    mode: ViewMode,
) -> Result<ActivityView, AppError> {
    let days = days.unwrap_or(state.config.heatmap_days);
    let data = state
        .analytics
        .get_activity_heatmap(entity_id, days)
        .await?;

    let (samples, skipped) = parse_samples(&data.heatmap);
    if skipped > 0 {
        debug!(entity_id, skipped, "dropped malformed heatmap entries");
        state.metrics.record_skipped_entries(skipped);
    }

    let buckets = aggregate_activity(&samples, mode);
    let stats = activity_statistics(&samples);

    Ok(ActivityView {
        entity_id: data.entity_id,
        view: mode,
        start_date: data.start_date,
        end_date: data.end_date,
        buckets,
        stats,
        skipped_entries: skipped,
    })
}
