// Runtime configuration handed to the application layer
// Built by infrastructure from the config file plus env overrides

#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub bind_addr: String,
    pub analytics_base_url: String,
    pub session_secret: String,
    pub session_ttl_seconds: u64,
    pub database_path: String,
    pub gap_threshold_hours: f64,
    pub heatmap_days: u32,
    pub lookback_days: u32,
    pub fuzzy_threshold: f64,
    pub max_body_bytes: u64,
    pub request_timeout_seconds: u64,
    pub import_password: String,
    pub super_admin_entity_id: String,
    pub super_admin_email: String,
}
