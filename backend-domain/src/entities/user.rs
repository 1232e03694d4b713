// User entity
// The local login record imported from the campus CSV export

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::value_objects::UserRole;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserRecord {
    pub entity_id: String,
    pub name: Option<String>,
    pub role: UserRole,
    pub email: Option<String>,
    pub department: Option<String>,
    pub student_id: Option<String>,
    pub staff_id: Option<String>,
    pub card_id: Option<String>,
    pub device_hash: Option<String>,
    pub face_id: Option<String>,
    pub password_hash: String,
}

/// One CSV row before validation. Header names match the campus export.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawUserRow {
    #[serde(default)]
    pub entity_id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub student_id: Option<String>,
    #[serde(default)]
    pub staff_id: Option<String>,
    #[serde(default)]
    pub card_id: Option<String>,
    #[serde(default)]
    pub device_hash: Option<String>,
    #[serde(default)]
    pub face_id: Option<String>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum UserRowError {
    #[error("row is missing entity_id")]
    MissingEntityId,
}

impl RawUserRow {
    /// Validates a raw row into a [`UserRecord`]. The role is resolved by the
    /// caller (it needs the per-row warning on unrecognized values) and the
    /// shared password hash is supplied once per import run.
    pub fn into_record(
        self,
        role: UserRole,
        password_hash: &str,
    ) -> Result<UserRecord, UserRowError> {
        let entity_id = self
            .entity_id
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .ok_or(UserRowError::MissingEntityId)?
            .to_string();
        Ok(UserRecord {
            entity_id,
            name: normalize(self.name),
            role,
            email: normalize(self.email),
            department: normalize(self.department),
            student_id: normalize(self.student_id),
            staff_id: normalize(self.staff_id),
            card_id: normalize(self.card_id),
            device_hash: normalize(self.device_hash),
            face_id: normalize(self.face_id),
            password_hash: password_hash.to_string(),
        })
    }
}

fn normalize(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_without_entity_id_is_rejected() {
        let row = RawUserRow {
            name: Some("No Id".to_string()),
            ..Default::default()
        };
        assert_eq!(
            row.into_record(UserRole::Student, "hash"),
            Err(UserRowError::MissingEntityId)
        );
    }

    #[test]
    fn blank_fields_become_none() {
        let row = RawUserRow {
            entity_id: Some("E100".to_string()),
            email: Some("  ".to_string()),
            department: Some("Physics".to_string()),
            ..Default::default()
        };
        let record = row.into_record(UserRole::Staff, "hash").unwrap();
        assert_eq!(record.email, None);
        assert_eq!(record.department.as_deref(), Some("Physics"));
        assert_eq!(record.password_hash, "hash");
    }
}
