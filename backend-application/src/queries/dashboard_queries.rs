//! One-shot dashboard load: all entity panels fetched concurrently.
//!
//! Each panel is independent. A failed upstream call empties that panel and
//! appends a warning instead of failing the whole dashboard; the response is
//! `Ok` even when every panel failed.

use serde::Serialize;
use tracing::warn;

use backend_domain::{
    activity_statistics, aggregate_activity, merge_timeline, parse_samples, ActivityBucket,
    ActivityStats, AnomalyReport, DateRange, EntityEnvelope, GatewayError, PredictionData, TimelineItem,
    TimelineStatistics, ViewMode,
};

use crate::error::AppError;
use crate::state::AppState;

#[derive(Debug, Clone, Serialize)]
pub struct DashboardActivity {
    pub buckets: Vec<ActivityBucket>,
    pub stats: ActivityStats,
    pub skipped_entries: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct DashboardTimeline {
    pub total_events: u64,
    pub total_gaps: usize,
    pub items: Vec<TimelineItem>,
    pub statistics: Option<TimelineStatistics>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DashboardData {
    pub entity_id: String,
    pub entity: Option<EntityEnvelope>,
    pub timeline: Option<DashboardTimeline>,
    pub prediction: Option<PredictionData>,
    pub activity: Option<DashboardActivity>,
    pub anomalies: Option<AnomalyReport>,
    pub warnings: Vec<String>,
}

pub async fn load_dashboard(state: &AppState, entity_id: &str) -> Result<DashboardData, AppError> {
    state.metrics.record_dashboard_request();

    let range = DateRange::default();
    let (entity, timeline, prediction, heatmap, anomalies) = tokio::join!(
        state.analytics.get_entity(entity_id),
        state.analytics.get_timeline_with_gaps(
            entity_id,
            state.config.gap_threshold_hours,
            &range
        ),
        state
            .analytics
            .predict_location(entity_id, state.config.lookback_days, None),
        state
            .analytics
            .get_activity_heatmap(entity_id, state.config.heatmap_days),
        state.analytics.get_entity_anomalies(entity_id),
    );

    let mut warnings = Vec::new();
    let mut keep = |panel: &str, err: &GatewayError| {
        warn!(entity_id, panel, error = %err, "dashboard panel failed");
        state.metrics.record_upstream_error();
        warnings.push(format!("Failed to load {panel} data"));
    };

    let entity = match entity {
        Ok(value) => Some(value),
        Err(err) => {
            keep("entity", &err);
            None
        }
    };

    let timeline = match timeline {
        Ok(data) => {
            let total_gaps = data.gaps.len();
            Some(DashboardTimeline {
                total_events: data.total_events,
                total_gaps,
                items: merge_timeline(data.events, data.gaps),
                statistics: data.statistics,
            })
        }
        Err(err) => {
            keep("timeline", &err);
            None
        }
    };

    let prediction = match prediction {
        Ok(value) => Some(value),
        Err(err) => {
            keep("prediction", &err);
            None
        }
    };

    let activity = match heatmap {
        Ok(data) => {
            let (samples, skipped) = parse_samples(&data.heatmap);
            if skipped > 0 {
                state.metrics.record_skipped_entries(skipped);
            }
            Some(DashboardActivity {
                buckets: aggregate_activity(&samples, ViewMode::Daily),
                stats: activity_statistics(&samples),
                skipped_entries: skipped,
            })
        }
        Err(err) => {
            keep("activity", &err);
            None
        }
    };

    let anomalies = match anomalies {
        Ok(value) => Some(value),
        Err(err) => {
            keep("anomaly", &err);
            None
        }
    };

    Ok(DashboardData {
        entity_id: entity_id.to_string(),
        entity,
        timeline,
        prediction,
        activity,
        anomalies,
        warnings,
    })
}
