use std::env;
use std::path::Path;

use anyhow::{anyhow, Result};
use serde::Deserialize;
use tokio::fs;
use tracing::warn;

use backend_domain::RuntimeConfig;

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct AppConfig {
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

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:3400".to_string(),
            analytics_base_url: "http://127.0.0.1:8000".to_string(),
            session_secret: String::new(),
            session_ttl_seconds: 8 * 60 * 60,
            database_path: "./sentinel.db".to_string(),
            gap_threshold_hours: 2.0,
            heatmap_days: 7,
            lookback_days: 7,
            fuzzy_threshold: 0.85,
            max_body_bytes: 1024 * 1024,
            request_timeout_seconds: 15,
            import_password: String::new(),
            super_admin_entity_id: "SUPER_ADMIN".to_string(),
            super_admin_email: "admin@campus.local".to_string(),
        }
    }
}

impl AppConfig {
    pub async fn load() -> Result<Self> {
        let path = env::var("SENTINEL_CONFIG").unwrap_or_else(|_| "./config.toml".to_string());
        let file_path = Path::new(&path);
        let base_dir = file_path.parent();
        if !file_path.exists() {
            warn!("config.toml not found, using defaults");
            let mut config = AppConfig::default();
            config.apply_env_overrides();
            config.resolve_paths(base_dir);
            config.normalize();
            config.validate()?;
            return Ok(config);
        }
        let content = fs::read_to_string(file_path).await?;
        let mut config: AppConfig = toml::from_str(&content)?;
        config.apply_env_overrides();
        config.resolve_paths(base_dir);
        config.normalize();
        config.validate()?;
        Ok(config)
    }

    pub fn normalize(&mut self) {
        self.analytics_base_url = self.analytics_base_url.trim_end_matches('/').to_string();
        self.session_secret = self.session_secret.trim().to_string();
        self.super_admin_entity_id = self.super_admin_entity_id.trim().to_string();
        self.super_admin_email = self.super_admin_email.trim().to_string();
    }

    fn resolve_paths(&mut self, base_dir: Option<&Path>) {
        let Some(base) = base_dir else {
            return;
        };
        self.database_path = resolve_path(base, &self.database_path);
    }

    pub fn validate(&self) -> Result<()> {
        self.bind_addr
            .parse::<std::net::SocketAddr>()
            .map_err(|err| anyhow!("invalid bind_addr: {}", err))?;
        if self.analytics_base_url.is_empty() {
            return Err(anyhow!("analytics_base_url must not be empty"));
        }
        if self.session_secret.len() < 32 {
            return Err(anyhow!(
                "session_secret must be at least 32 characters"
            ));
        }
        if self.session_ttl_seconds == 0 {
            return Err(anyhow!("session_ttl_seconds must be greater than 0"));
        }
        if self.max_body_bytes == 0 {
            return Err(anyhow!("max_body_bytes must be greater than 0"));
        }
        if self.gap_threshold_hours <= 0.0 {
            return Err(anyhow!("gap_threshold_hours must be positive"));
        }
        if !(0.0..=1.0).contains(&self.fuzzy_threshold) {
            return Err(anyhow!("fuzzy_threshold must be between 0 and 1"));
        }
        if self.super_admin_entity_id.is_empty() {
            return Err(anyhow!("super_admin_entity_id must not be empty"));
        }
        Ok(())
    }

    pub fn to_runtime_config(&self) -> RuntimeConfig {
        RuntimeConfig {
            bind_addr: self.bind_addr.clone(),
            analytics_base_url: self.analytics_base_url.clone(),
            session_secret: self.session_secret.clone(),
            session_ttl_seconds: self.session_ttl_seconds,
            database_path: self.database_path.clone(),
            gap_threshold_hours: self.gap_threshold_hours,
            heatmap_days: self.heatmap_days,
            lookback_days: self.lookback_days,
            fuzzy_threshold: self.fuzzy_threshold,
            max_body_bytes: self.max_body_bytes,
            request_timeout_seconds: self.request_timeout_seconds,
            import_password: self.import_password.clone(),
            super_admin_entity_id: self.super_admin_entity_id.clone(),
            super_admin_email: self.super_admin_email.clone(),
        }
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(value) = env::var("SENTINEL_BIND_ADDR") {
            self.bind_addr = value;
        }
        if let Ok(value) = env::var("SENTINEL_ANALYTICS_BASE_URL") {
            self.analytics_base_url = value;
        }
        if let Ok(value) = env::var("SENTINEL_SESSION_SECRET") {
            self.session_secret = value;
        }
        if let Ok(value) = env::var("SENTINEL_SESSION_TTL_SECONDS") {
            self.session_ttl_seconds = value.parse().unwrap_or(self.session_ttl_seconds);
        }
        if let Ok(value) = env::var("SENTINEL_DATABASE_PATH") {
            self.database_path = value;
        }
        if let Ok(value) = env::var("SENTINEL_GAP_THRESHOLD_HOURS") {
            self.gap_threshold_hours = value.parse().unwrap_or(self.gap_threshold_hours);
        }
        if let Ok(value) = env::var("SENTINEL_HEATMAP_DAYS") {
            self.heatmap_days = value.parse().unwrap_or(self.heatmap_days);
        }
        if let Ok(value) = env::var("SENTINEL_LOOKBACK_DAYS") {
            self.lookback_days = value.parse().unwrap_or(self.lookback_days);
        }
        if let Ok(value) = env::var("SENTINEL_FUZZY_THRESHOLD") {
            self.fuzzy_threshold = value.parse().unwrap_or(self.fuzzy_threshold);
        }
        if let Ok(value) = env::var("SENTINEL_MAX_BODY_BYTES") {
            self.max_body_bytes = value.parse().unwrap_or(self.max_body_bytes);
        }
        if let Ok(value) = env::var("SENTINEL_REQUEST_TIMEOUT_SECONDS") {
            self.request_timeout_seconds = value.parse().unwrap_or(self.request_timeout_seconds);
        }
        if let Ok(value) = env::var("SENTINEL_IMPORT_PASSWORD") {
            self.import_password = value;
        }
        if let Ok(value) = env::var("SENTINEL_SUPER_ADMIN_ENTITY_ID") {
            self.super_admin_entity_id = value;
        }
        if let Ok(value) = env::var("SENTINEL_SUPER_ADMIN_EMAIL") {
            self.super_admin_email = value;
        }
    }
}

fn resolve_path(base: &Path, value: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return trimmed.to_string();
    }
    let path = Path::new(trimmed);
    if path.is_absolute() {
        trimmed.to_string()
    } else {
        base.join(path).to_string_lossy().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_config() -> AppConfig {
        AppConfig {
            session_secret: "0123456789abcdef0123456789abcdef".to_string(),
            ..AppConfig::default()
        }
    }

    #[test]
    fn default_config_needs_a_secret() {
        assert!(AppConfig::default().validate().is_err());
        assert!(valid_config().validate().is_ok());
    }

    #[test]
    fn rejects_bad_bind_addr() {
        let config = AppConfig {
            bind_addr: "not-an-addr".to_string(),
            ..valid_config()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_out_of_range_fuzzy_threshold() {
        let config = AppConfig {
            fuzzy_threshold: 1.5,
            ..valid_config()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn normalize_strips_trailing_slash_from_base_url() {
        let mut config = AppConfig {
            analytics_base_url: "http://analytics:8000/".to_string(),
            ..valid_config()
        };
        config.normalize();
        assert_eq!(config.analytics_base_url, "http://analytics:8000");
    }

    #[test]
    fn relative_database_path_resolves_against_config_dir() {
        let mut config = valid_config();
        config.database_path = "data/users.db".to_string();
        config.resolve_paths(Some(Path::new("/etc/sentinel")));
        assert_eq!(config.database_path, "/etc/sentinel/data/users.db");
    }
}
