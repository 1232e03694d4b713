use axum::Router;

use backend_application::AppState;

use crate::handlers::{
    activity_handlers, anomaly_handlers, dashboard_handlers, entity_handlers, ops_handlers,
    session_handlers, timeline_handlers, zone_handlers,
};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/v1/session/login",
            axum::routing::post(session_handlers::login),
        )
        .route(
            "/v1/dashboard/:entity_id",
            axum::routing::get(dashboard_handlers::get_dashboard),
        )
        .route(
            "/v1/entities",
            axum::routing::get(entity_handlers::list_entities),
        )
        .route(
            "/v1/entities/search",
            axum::routing::post(entity_handlers::search_entity),
        )
        .route(
            "/v1/entities/fuzzy-search",
            axum::routing::get(entity_handlers::fuzzy_search),
        )
        .route(
            "/v1/entities/:entity_id/profile",
            axum::routing::get(entity_handlers::get_profile),
        )
        .route(
            "/v1/entities/:entity_id/predict",
            axum::routing::get(entity_handlers::predict_location),
        )
        .route(
            "/v1/entities/:entity_id/predict/gap",
            axum::routing::get(entity_handlers::predict_during_gap),
        )
        .route(
            "/v1/timeline/:entity_id",
            axum::routing::get(timeline_handlers::get_timeline),
        )
        .route(
            "/v1/timeline/:entity_id/events",
            axum::routing::get(timeline_handlers::get_timeline_events),
        )
        .route(
            "/v1/timeline/:entity_id/summary",
            axum::routing::get(timeline_handlers::get_timeline_summary),
        )
        .route(
            "/v1/activity/:entity_id",
            axum::routing::get(activity_handlers::get_activity),
        )
        .route(
            "/v1/anomalies/summary",
            axum::routing::get(anomaly_handlers::get_anomaly_summary),
        )
        .route(
            "/v1/anomalies/:entity_id",
            axum::routing::get(anomaly_handlers::list_entity_anomalies),
        )
        .route("/v1/zones", axum::routing::get(zone_handlers::list_zones))
        .route(
            "/v1/zones/:zone_id/occupancy",
            axum::routing::get(zone_handlers::get_occupancy),
        )
        .route(
            "/v1/zones/:zone_id/forecast",
            axum::routing::get(zone_handlers::get_forecast),
        )
        .route(
            "/v1/campus/summary",
            axum::routing::get(zone_handlers::campus_summary),
        )
        .route(
            "/v1/ops/health/live",
            axum::routing::get(ops_handlers::health_live),
        )
        .route(
            "/v1/ops/health/ready",
            axum::routing::get(ops_handlers::health_ready),
        )
        .route(
            "/v1/ops/metrics/prometheus",
            axum::routing::get(ops_handlers::metrics_prometheus),
        )
        .with_state(state)
}
