pub mod activity_handlers;
pub mod anomaly_handlers;
pub mod dashboard_handlers;
pub mod entity_handlers;
pub mod ops_handlers;
pub mod session_handlers;
pub mod timeline_handlers;
pub mod zone_handlers;
