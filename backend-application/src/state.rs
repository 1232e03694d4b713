use std::sync::Arc;

use backend_domain::{AnalyticsApi, RuntimeConfig, UserStore};

use crate::metrics::Metrics;
use crate::session::SessionService;

/// Shared application state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub config: RuntimeConfig,
    pub analytics: Arc<dyn AnalyticsApi>,
    pub users: Arc<dyn UserStore>,
    pub sessions: Arc<SessionService>,
    pub metrics: Arc<Metrics>,
}
