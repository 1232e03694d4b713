//! Reqwest implementation of the analytics backend port.
//!
//! Every non-2xx response becomes `GatewayError::Upstream`, carrying the
//! `detail` (or `message`) field of a JSON error body when one is present.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;

use backend_domain::{
    AnalyticsApi, AnomalyReport, AnomalySummary, CampusSummary, DateRange, EntityEnvelope,
    EntityList, EntityListQuery, EntitySearchRequest, EntitySearchResponse, FusionReport, FuzzyMatch,
    FuzzySearchResponse, GatewayError, HeatmapData, PredictionData, RuntimeConfig, TimelineData,
    TimelineSummary, Zone, ZoneForecast, ZoneOccupancy,
};

pub struct AnalyticsClient {
    http: Client,
    base_url: String,
}

impl AnalyticsClient {
    pub fn new(config: &RuntimeConfig) -> anyhow::Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_seconds))
            .build()?;
        Ok(Self {
            http,
            base_url: config.analytics_base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, GatewayError> {
        let response = self
            .http
            .get(self.url(path))
            .query(query)
            .send()
            .await
            .map_err(|err| GatewayError::Request(err.to_string()))?;
        read_json(response).await
    }

    async fn post_json<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        query: &[(&str, String)],
        body: Option<&B>,
    ) -> Result<T, GatewayError> {
        let mut request = self.http.post(self.url(path)).query(query);
        if let Some(body) = body {
            request = request.json(body);
        }
        let response = request
            .send()
            .await
            .map_err(|err| GatewayError::Request(err.to_string()))?;
        read_json(response).await
    }
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, GatewayError> {
    let status = response.status();
    if !status.is_success() {
        let body = response.bytes().await.unwrap_or_default();
        return Err(GatewayError::Upstream {
            status: status.as_u16(),
            detail: extract_detail(&body),
        });
    }
    let body = response
        .bytes()
        .await
        .map_err(|err| GatewayError::Request(err.to_string()))?;
    serde_json::from_slice(&body).map_err(|err| GatewayError::Decode(err.to_string()))
}

/// Pulls the human-readable message out of a JSON error body. The analytics
/// backend uses `detail`; `message` is accepted as a fallback.
fn extract_detail(body: &[u8]) -> Option<String> {
    let value: serde_json::Value = serde_json::from_slice(body).ok()?;
    value
        .get("detail")
        .or_else(|| value.get("message"))
        .and_then(|v| v.as_str())
        .map(str::to_owned)
}

fn range_params(range: &DateRange) -> Vec<(&'static str, String)> {
    let mut params = Vec::new();
    if let Some(start) = &range.start_date {
        params.push(("start_date", start.clone()));
    }
    if let Some(end) = &range.end_date {
        params.push(("end_date", end.clone()));
    }
    params
}

#[async_trait]
impl AnalyticsApi for AnalyticsClient {
    async fn get_entity(&self, entity_id: &str) -> Result<EntityEnvelope, GatewayError> {
        self.get_json(&format!("/api/v1/entities/{entity_id}"), &[])
            .await
    }

    async fn get_fusion_report(&self, entity_id: &str) -> Result<FusionReport, GatewayError> {
        self.get_json(&format!("/api/v1/entities/{entity_id}/fusion-report"), &[])
            .await
    }

    async fn get_timeline(
        &self,
        entity_id: &str,
        range: &DateRange,
    ) -> Result<TimelineData, GatewayError> {
        self.get_json(
            &format!("/api/v1/graph/timeline/{entity_id}"),
            &range_params(range),
        )
        .await
    }

    async fn get_timeline_with_gaps(
        &self,
        entity_id: &str,
        gap_threshold_hours: f64,
        range: &DateRange,
    ) -> Result<TimelineData, GatewayError> {
        let mut params = vec![("gap_threshold_hours", gap_threshold_hours.to_string())];
        params.extend(range_params(range));
        self.get_json(
            &format!("/api/v1/graph/timeline/{entity_id}/with-gaps"),
            &params,
        )
        .await
    }

    async fn get_timeline_summary(
        &self,
        entity_id: &str,
        range: &DateRange,
    ) -> Result<TimelineSummary, GatewayError> {
        self.get_json(
            &format!("/api/v1/graph/timeline/{entity_id}/summary"),
            &range_params(range),
        )
        .await
    }

    async fn get_activity_heatmap(
        &self,
        entity_id: &str,
        days: u32,
    ) -> Result<HeatmapData, GatewayError> {
        self.get_json(
            &format!("/api/v1/graph/timeline/{entity_id}/heatmap"),
            &[("days", days.to_string())],
        )
        .await
    }

    async fn predict_location(
        &self,
        entity_id: &str,
        lookback_days: u32,
        target_time: Option<&str>,
    ) -> Result<PredictionData, GatewayError> {
        let mut params = vec![("lookback_days", lookback_days.to_string())];
        if let Some(target) = target_time {
            params.push(("target_time", target.to_string()));
        }
        self.post_json::<_, ()>(
            &format!("/api/v1/graph/predict/location/{entity_id}"),
            &params,
            None,
        )
        .await
    }

    async fn predict_during_gap(
        &self,
        entity_id: &str,
        gap_start: &str,
        gap_end: &str,
    ) -> Result<PredictionData, GatewayError> {
        let params = vec![
            ("gap_start", gap_start.to_string()),
            ("gap_end", gap_end.to_string()),
        ];
        self.post_json::<_, ()>(
            &format!("/api/v1/graph/predict/gap/{entity_id}"),
            &params,
            None,
        )
        .await
    }

    async fn search_entity(
        &self,
        request: &EntitySearchRequest,
    ) -> Result<EntitySearchResponse, GatewayError> {
        self.post_json("/api/v1/entities/search", &[], Some(request))
            .await
    }

    async fn fuzzy_search(
        &self,
        name: &str,
        threshold: f64,
    ) -> Result<Vec<FuzzyMatch>, GatewayError> {
        let response: FuzzySearchResponse = self
            .get_json(
                "/api/v1/entities/fuzzy-search",
                &[
                    ("name", name.to_string()),
                    ("threshold", threshold.to_string()),
                ],
            )
            .await?;
        Ok(response.matches)
    }

    async fn list_entities(&self, query: &EntityListQuery) -> Result<EntityList, GatewayError> {
        let mut params = vec![
            ("skip", query.skip.unwrap_or(0).to_string()),
            ("limit", query.limit.unwrap_or(100).to_string()),
        ];
        if let Some(department) = &query.department {
            params.push(("department", department.clone()));
        }
        if let Some(entity_type) = &query.entity_type {
            params.push(("entity_type", entity_type.clone()));
        }
        self.get_json("/api/v1/entities/", &params).await
    }

    async fn get_entity_anomalies(&self, entity_id: &str) -> Result<AnomalyReport, GatewayError> {
        self.get_json(&format!("/api/v1/anomalies/by-entity/{entity_id}"), &[])
            .await
    }

    async fn get_anomaly_summary(&self, hours: u32) -> Result<AnomalySummary, GatewayError> {
        self.get_json("/api/v1/anomalies/summary", &[("hours", hours.to_string())])
            .await
    }

    async fn list_zones(&self) -> Result<Vec<Zone>, GatewayError> {
        self.get_json("/api/v1/spatial/zones", &[]).await
    }

    async fn get_zone_occupancy(&self, zone_id: &str) -> Result<ZoneOccupancy, GatewayError> {
        self.get_json(&format!("/api/v1/spatial/zones/{zone_id}/occupancy"), &[])
            .await
    }

    async fn get_zone_forecast(
        &self,
        zone_id: &str,
        target_datetime: &str,
    ) -> Result<Vec<ZoneForecast>, GatewayError> {
        self.get_json(
            &format!("/api/v1/spatial/zones/{zone_id}/forecast"),
            &[("target_datetime", target_datetime.to_string())],
        )
        .await
    }

    async fn get_campus_summary(&self) -> Result<CampusSummary, GatewayError> {
        self.get_json("/api/v1/spatial/campus/summary", &[]).await
    }

    async fn ping(&self) -> Result<(), GatewayError> {
        let response = self
            .http
            .get(self.url("/health"))
            .send()
            .await
            .map_err(|err| GatewayError::Request(err.to_string()))?;
        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(GatewayError::Upstream {
                status: status.as_u16(),
                detail: None,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_detail_field() {
        let body = br#"{"detail": "Entity 'E9' not found"}"#;
        assert_eq!(extract_detail(body).as_deref(), Some("Entity 'E9' not found"));
    }

    #[test]
    fn falls_back_to_message_field() {
        let body = br#"{"message": "upstream busy"}"#;
        assert_eq!(extract_detail(body).as_deref(), Some("upstream busy"));
    }

    #[test]
    fn non_json_body_yields_no_detail() {
        assert_eq!(extract_detail(b"<html>502</html>"), None);
        assert_eq!(extract_detail(br#"{"detail": 42}"#), None);
    }

    #[test]
    fn range_params_skip_missing_bounds() {
        let range = DateRange {
            start_date: Some("2026-02-01".to_string()),
            end_date: None,
        };
        assert_eq!(
            range_params(&range),
            vec![("start_date", "2026-02-01".to_string())]
        );
    }
}
