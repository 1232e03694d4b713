//! Login: credential check against the local user store, then token issue.

use serde::Serialize;
use tracing::debug;

use backend_domain::UserRole;

use crate::error::AppError;
use crate::password::verify_password;
use crate::state::AppState;

#[derive(Debug, Clone, Serialize)]
pub struct SessionToken {
    pub token: String,
    pub entity_id: String,
    pub role: UserRole,
    pub name: Option<String>,
    pub email: String,
    pub expires_in_seconds: u64,
}

/// Exchange email and password for a session token. Unknown accounts and bad
/// passwords are indistinguishable to the caller.
pub async fn login(state: &AppState, email: &str, password: &str) -> Result<SessionToken, AppError> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err(AppError::BadRequest(
            "email and password are required".into(),
        ));
    }

    let Some(user) = state.users.find_by_email(email).await? else {
        debug!(email, "login attempt for unknown account");
        return Err(AppError::Unauthorized);
    };

    if !verify_password(password, &user.password_hash)? {
        debug!(email, "password mismatch");
        return Err(AppError::Unauthorized);
    }

    let token = state.sessions.issue(&user)?;
    Ok(SessionToken {
        token,
        entity_id: user.entity_id,
        role: user.role,
        name: user.name,
        email: email.to_string(),
        expires_in_seconds: state.config.session_ttl_seconds,
    })
}
