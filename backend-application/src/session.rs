//! Session token issuing and verification.
//!
//! Tokens are HS256-signed JWTs carrying the user's role and entity binding.
//! Verification failures collapse into `AppError::Unauthorized`; role checks
//! live here so handlers only ask "may this session see this entity".

use std::time::{SystemTime, UNIX_EPOCH};

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use backend_domain::{UserRecord, UserRole};

use crate::error::AppError;

/// Payload stored in a session token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionClaims {
    /// User's entity identifier (also the subject).
    pub sub: String,
    pub email: Option<String>,
    pub name: Option<String>,
    pub role: UserRole,
    pub entity_id: Option<String>,
    pub face_id: Option<String>,
    /// Issued at (Unix timestamp).
    pub iat: u64,
    /// Expiration time (Unix timestamp).
    pub exp: u64,
}

impl SessionClaims {
    /// Whether this session may read data scoped to `entity_id`.
    /// Super admins see everything; everyone else only their own entity.
    pub fn can_view_entity(&self, entity_id: &str) -> bool {
        match self.role {
            UserRole::SuperAdmin => true,
            _ => self.entity_id.as_deref() == Some(entity_id),
        }
    }
}

pub struct SessionService {
    secret: String,
    ttl_seconds: u64,
}

impl SessionService {
    /// Returns an error if the signing secret is missing or too short.
    pub fn new(secret: String, ttl_seconds: u64) -> anyhow::Result<Self> {
        if secret.is_empty() {
            anyhow::bail!("session secret is required");
        }
        if secret.len() < 32 {
            anyhow::bail!("session secret must be at least 32 characters");
        }
        Ok(Self {
            secret,
            ttl_seconds,
        })
    }

    /// Issue a signed token for an authenticated user.
    pub fn issue(&self, user: &UserRecord) -> Result<String, AppError> {
        let now = unix_now()?;
        let claims = SessionClaims {
            sub: user.entity_id.clone(),
            email: user.email.clone(),
            name: user.name.clone(),
            role: user.role,
            entity_id: Some(user.entity_id.clone()),
            face_id: user.face_id.clone(),
            iat: now,
            exp: now + self.ttl_seconds,
        };

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )
        .map_err(|err| AppError::Internal(anyhow::anyhow!("token encoding failed: {err}")))
    }

    /// Verify a bearer token and return its claims. Expired, malformed and
    /// tampered tokens all map to `Unauthorized`.
    pub fn verify(&self, token: &str) -> Result<SessionClaims, AppError> {
        let mut validation = Validation::default();
        validation.validate_exp = true;

        decode::<SessionClaims>(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &validation,
        )
        .map(|data| data.claims)
        .map_err(|_| AppError::Unauthorized)
    }
}

fn unix_now() -> Result<u64, AppError> {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .map_err(|err| AppError::Internal(anyhow::anyhow!("system time error: {err}")))
}
