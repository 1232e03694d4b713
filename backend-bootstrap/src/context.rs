use std::sync::Arc;

use anyhow::Result;

use backend_application::{AppState, Metrics, SessionService};
use backend_domain::UserStore;
use backend_infrastructure::{AnalyticsClient, AppConfig, SqliteUserStore};

pub struct AppContext {
    pub state: AppState,
}

impl AppContext {
    pub async fn new() -> Result<Self> {
        let config = AppConfig::load().await?;
        let runtime_config = config.to_runtime_config();

        let users: Arc<dyn UserStore> =
            Arc::new(SqliteUserStore::open(&runtime_config.database_path)?);
        users.ensure_schema().await?;

        let analytics = Arc::new(AnalyticsClient::new(&runtime_config)?);
        let sessions = Arc::new(SessionService::new(
            runtime_config.session_secret.clone(),
            runtime_config.session_ttl_seconds,
        )?);

        let state = AppState {
            config: runtime_config,
            analytics,
            users,
            sessions,
            metrics: Arc::new(Metrics::default()),
        };

        Ok(Self { state })
    }
}
