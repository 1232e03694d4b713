use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use backend_application::AppError;
use backend_domain::GatewayError;

#[derive(Debug)]
pub enum HttpError {
    Unauthorized,
    Forbidden(String),
    BadRequest(String),
    NotFound(Option<String>),
    BadGateway(Option<String>),
    Internal(String),
}

impl From<AppError> for HttpError {
    fn from(value: AppError) -> Self {
        match value {
            AppError::Unauthorized => HttpError::Unauthorized,
            AppError::Forbidden(msg) => HttpError::Forbidden(msg),
            AppError::BadRequest(msg) => HttpError::BadRequest(msg),
            // An upstream 404 stays a 404 for the caller; everything else
            // from the analytics backend surfaces as a bad gateway.
            AppError::Upstream(GatewayError::Upstream { status: 404, detail }) => {
                HttpError::NotFound(detail)
            }
            AppError::Upstream(err) => {
                let detail = err.detail().map(str::to_owned);
                HttpError::BadGateway(detail.or_else(|| Some(err.to_string())))
            }
            AppError::Internal(err) => HttpError::Internal(err.to_string()),
        }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    detail: Option<String>,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let (status, message, detail) = match self {
            HttpError::Unauthorized => {
                (StatusCode::UNAUTHORIZED, "unauthorized".to_string(), None)
            }
            HttpError::Forbidden(msg) => {
                (StatusCode::FORBIDDEN, "forbidden".to_string(), Some(msg))
            }
            HttpError::BadRequest(msg) => (
                StatusCode::BAD_REQUEST,
                format!("bad request: {}", msg),
                None,
            ),
            HttpError::NotFound(detail) => {
                (StatusCode::NOT_FOUND, "not found".to_string(), detail)
            }
            HttpError::BadGateway(detail) => (
                StatusCode::BAD_GATEWAY,
                "analytics backend unavailable".to_string(),
                detail,
            ),
            HttpError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg, None),
        };
        (status, Json(ErrorBody { error: message, detail })).into_response()
    }
}
