use axum::extract::State;
use axum::Json;

use backend_application::commands::session_commands::{self, SessionToken};
use backend_application::AppState;

use crate::error::HttpError;

#[derive(serde::Deserialize)]
pub struct LoginPayload {
    pub email: String,
    pub password: String,
}

pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginPayload>,
) -> Result<Json<SessionToken>, HttpError> {
    let session = session_commands::login(&state, &payload.email, &payload.password).await?;
    Ok(Json(session))
}
