// Remote Data Gateway port
// Typed access to the external analytics backend; implementations live in
// infrastructure

use async_trait::async_trait;
use thiserror::Error;

use crate::entities::{
    AnomalyReport,
    AnomalySummary,
    CampusSummary,
    DateRange,
    EntityEnvelope,
    EntityList,
    EntityListQuery,
    EntitySearchRequest,
    EntitySearchResponse,
    FusionReport,
    FuzzyMatch,
    HeatmapData,
    PredictionData,
    TimelineData,
    TimelineSummary,
    Zone,
    ZoneForecast,
    ZoneOccupancy,
};

/// Failure of one gateway call. Any non-2xx response becomes `Upstream`,
/// carrying the server-supplied detail message when one was present.
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("analytics backend returned status {status}")]
    Upstream { status: u16, detail: Option<String> },
    #[error("analytics request failed: {0}")]
    Request(String),
    #[error("analytics response decode failed: {0}")]
    Decode(String),
}

impl GatewayError {
    pub fn detail(&self) -> Option<&str> {
        match self {
            GatewayError::Upstream { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }
}

#[async_trait]
pub trait AnalyticsApi: Send + Sync {
    async fn get_entity(&self, entity_id: &str) -> Result<EntityEnvelope, GatewayError>;
    async fn get_fusion_report(&self, entity_id: &str) -> Result<FusionReport, GatewayError>;

    async fn get_timeline(
        &self,
        entity_id: &str,
        range: &DateRange,
    ) -> Result<TimelineData, GatewayError>;
    async fn get_timeline_with_gaps(
        &self,
        entity_id: &str,
        gap_threshold_hours: f64,
        range: &DateRange,
    ) -> Result<TimelineData, GatewayError>;
    async fn get_timeline_summary(
        &self,
        entity_id: &str,
        range: &DateRange,
    ) -> Result<TimelineSummary, GatewayError>;
    async fn get_activity_heatmap(
        &self,
        entity_id: &str,
        days: u32,
    ) -> Result<HeatmapData, GatewayError>;

    async fn predict_location(
        &self,
        entity_id: &str,
        lookback_days: u32,
        target_time: Option<&str>,
    ) -> Result<PredictionData, GatewayError>;
    async fn predict_during_gap(
        &self,
        entity_id: &str,
        gap_start: &str,
        gap_end: &str,
    ) -> Result<PredictionData, GatewayError>;

    async fn search_entity(
        &self,
        request: &EntitySearchRequest,
    ) -> Result<EntitySearchResponse, GatewayError>;
    async fn fuzzy_search(
        &self,
        name: &str,
        threshold: f64,
    ) -> Result<Vec<FuzzyMatch>, GatewayError>;
    async fn list_entities(&self, query: &EntityListQuery) -> Result<EntityList, GatewayError>;

    async fn get_entity_anomalies(&self, entity_id: &str) -> Result<AnomalyReport, GatewayError>;
    async fn get_anomaly_summary(&self, hours: u32) -> Result<AnomalySummary, GatewayError>;

    async fn list_zones(&self) -> Result<Vec<Zone>, GatewayError>;
    async fn get_zone_occupancy(&self, zone_id: &str) -> Result<ZoneOccupancy, GatewayError>;
    async fn get_zone_forecast(
        &self,
        zone_id: &str,
        target_datetime: &str,
    ) -> Result<Vec<ZoneForecast>, GatewayError>;
    async fn get_campus_summary(&self) -> Result<CampusSummary, GatewayError>;

    /// Cheap reachability probe for the ready check.
    async fn ping(&self) -> Result<(), GatewayError>;
}
