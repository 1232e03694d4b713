//! Session gate shared by every protected handler.
//!
//! Tokens arrive as `Authorization: Bearer <jwt>`. A missing, malformed,
//! expired or tampered token is a 401; a valid token scoped to the wrong
//! entity is a 403. Protected routes never return partial content without
//! a valid session.

use axum::http::HeaderMap;

use backend_application::{AppState, SessionClaims};

use crate::error::HttpError;

pub fn authenticate(state: &AppState, headers: &HeaderMap) -> Result<SessionClaims, HttpError> {
    let token = extract_bearer(headers).ok_or(HttpError::Unauthorized)?;
    state.sessions.verify(&token).map_err(HttpError::from)
}

pub fn require_entity_access(claims: &SessionClaims, entity_id: &str) -> Result<(), HttpError> {
    if claims.can_view_entity(entity_id) {
        Ok(())
    } else {
        Err(HttpError::Forbidden(format!(
            "session is not allowed to view entity '{entity_id}'"
        )))
    }
}

fn extract_bearer(headers: &HeaderMap) -> Option<String> {
    let value = headers.get("Authorization")?.to_str().ok()?.trim();
    let prefix = "Bearer ";
    if !value.starts_with(prefix) {
        return None;
    }
    let token = value[prefix.len()..].trim();
    if token.is_empty() {
        return None;
    }
    Some(token.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers_with(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert("Authorization", HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn extracts_bearer_token() {
        assert_eq!(
            extract_bearer(&headers_with("Bearer abc.def.ghi")).as_deref(),
            Some("abc.def.ghi")
        );
    }

    #[test]
    fn rejects_missing_or_empty_tokens() {
        assert_eq!(extract_bearer(&HeaderMap::new()), None);
        assert_eq!(extract_bearer(&headers_with("Bearer ")), None);
        assert_eq!(extract_bearer(&headers_with("Basic dXNlcg==")), None);
    }
}
