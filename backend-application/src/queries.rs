// Read-side use cases, one module per dashboard area

pub mod activity_queries;
pub mod anomaly_queries;
pub mod dashboard_queries;
pub mod entity_queries;
pub mod timeline_queries;
pub mod zone_queries;
