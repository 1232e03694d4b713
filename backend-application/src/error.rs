use backend_domain::GatewayError;
use thiserror::Error;

/// Application-level failures surfaced to the interface layer.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("authentication required")]
    Unauthorized,

    #[error("access denied: {0}")]
    Forbidden(String),

    #[error("invalid request: {0}")]
    BadRequest(String),

    #[error("analytics backend error: {0}")]
    Upstream(GatewayError),

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl From<GatewayError> for AppError {
    fn from(err: GatewayError) -> Self {
        AppError::Upstream(err)
    }
}

impl AppError {
    /// Human-readable detail suitable for an error response body.
    pub fn detail(&self) -> String {
        match self {
            AppError::Upstream(err) => err
                .detail()
                .map(str::to_owned)
                .unwrap_or_else(|| err.to_string()),
            other => other.to_string(),
        }
    }
}
