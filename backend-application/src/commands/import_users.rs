//! CSV user import: one shared password hash, role mapping with a warned
//! STUDENT fallback, batch upsert keyed by entity_id, then a separate
//! super-admin upsert that aborts the run on identifier collision.

use thiserror::Error;
use tracing::{info, warn};
use uuid::Uuid;

use backend_domain::{RawUserRow, UserRecord, UserRole, UserStore};

use crate::password::hash_password;

#[derive(Debug, Clone)]
pub struct ImportOptions {
    /// Plaintext shared by every imported account; hashed exactly once.
    pub common_password: String,
    pub super_admin_entity_id: String,
    pub super_admin_email: String,
}

#[derive(Debug, Clone)]
pub struct ImportReport {
    pub run_id: Uuid,
    /// CSV rows written, excluding the super-admin record.
    pub imported: usize,
    pub skipped_rows: usize,
    pub defaulted_roles: usize,
}

#[derive(Debug, Error)]
pub enum ImportError {
    /// The privileged record would overwrite an imported row. Fatal; the
    /// super-admin write must not happen.
    #[error("super admin entity_id '{0}' collides with an imported CSV row")]
    SuperAdminCollision(String),
    #[error(transparent)]
    Store(#[from] anyhow::Error),
}

pub async fn import_users(
    store: &dyn UserStore,
    rows: Vec<RawUserRow>,
    options: &ImportOptions,
) -> Result<ImportReport, ImportError> {
    let run_id = Uuid::new_v4();
    let password_hash = hash_password(&options.common_password)?;

    let mut records: Vec<UserRecord> = Vec::with_capacity(rows.len());
    let mut skipped_rows = 0usize;
    let mut defaulted_roles = 0usize;

    for (index, row) in rows.into_iter().enumerate() {
        let raw_role = row.role.clone();
        let role = match raw_role.as_deref().map(str::trim).filter(|r| !r.is_empty()) {
            Some(value) => UserRole::parse_csv_role(value).unwrap_or_else(|| {
                warn!(
                    row = index + 1,
                    role = value,
                    "unrecognized role, defaulting to STUDENT"
                );
                defaulted_roles += 1;
                UserRole::Student
            }),
            None => {
                defaulted_roles += 1;
                UserRole::Student
            }
        };

        match row.into_record(role, &password_hash) {
            Ok(record) => records.push(record),
            Err(err) => {
                warn!(row = index + 1, error = %err, "skipping invalid row");
                skipped_rows += 1;
            }
        }
    }

    let imported = store.upsert_users(&records).await?;
    info!(%run_id, imported, skipped_rows, "csv batch written");

    // The privileged upsert is a separate write; refuse it outright if the
    // identifier already came in through the CSV.
    if records
        .iter()
        .any(|r| r.entity_id == options.super_admin_entity_id)
    {
        return Err(ImportError::SuperAdminCollision(
            options.super_admin_entity_id.clone(),
        ));
    }

    let admin = UserRecord {
        entity_id: options.super_admin_entity_id.clone(),
        name: Some("Super Admin".to_string()),
        role: UserRole::SuperAdmin,
        email: Some(options.super_admin_email.clone()),
        department: None,
        student_id: None,
        staff_id: None,
        card_id: None,
        device_hash: None,
        face_id: None,
        password_hash,
    };
    store.upsert_user(&admin).await?;
    info!(%run_id, entity_id = %admin.entity_id, "super admin written");

    Ok(ImportReport {
        run_id,
        imported,
        skipped_rows,
        defaulted_roles,
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::*;

    #[derive(Default)]
    struct MemoryStore {
        users: Mutex<HashMap<String, UserRecord>>,
    }

    #[async_trait]
    impl UserStore for MemoryStore {
        async fn ensure_schema(&self) -> anyhow::Result<()> {
            Ok(())
        }

        async fn upsert_users(&self, users: &[UserRecord]) -> anyhow::Result<usize> {
            let mut map = self.users.lock().unwrap();
            for user in users {
                map.insert(user.entity_id.clone(), user.clone());
            }
            Ok(users.len())
        }

        async fn upsert_user(&self, user: &UserRecord) -> anyhow::Result<()> {
            self.users
                .lock()
                .unwrap()
                .insert(user.entity_id.clone(), user.clone());
            Ok(())
        }

        async fn find_by_email(&self, email: &str) -> anyhow::Result<Option<UserRecord>> {
            Ok(self
                .users
                .lock()
                .unwrap()
                .values()
                .find(|u| u.email.as_deref() == Some(email))
                .cloned())
        }

        async fn find_by_entity_id(&self, entity_id: &str) -> anyhow::Result<Option<UserRecord>> {
            Ok(self.users.lock().unwrap().get(entity_id).cloned())
        }

        async fn count_users(&self) -> anyhow::Result<u64> {
            Ok(self.users.lock().unwrap().len() as u64)
        }

        async fn ping(&self) -> anyhow::Result<()> {
            Ok(())
        }
    }

    fn row(entity_id: &str, role: Option<&str>) -> RawUserRow {
        RawUserRow {
            entity_id: Some(entity_id.to_string()),
            role: role.map(str::to_string),
            ..Default::default()
        }
    }

    fn options() -> ImportOptions {
        ImportOptions {
            common_password: "shared-secret".to_string(),
            super_admin_entity_id: "ADMIN1".to_string(),
            super_admin_email: "admin@example.edu".to_string(),
        }
    }

    #[tokio::test]
    async fn imports_rows_and_super_admin() {
        let store = MemoryStore::default();
        let rows = vec![row("E1", Some("staff")), row("E2", Some("FACULTY"))];

        let report = import_users(&store, rows, &options()).await.unwrap();
        assert_eq!(report.imported, 2);
        assert_eq!(report.skipped_rows, 0);
        assert_eq!(report.defaulted_roles, 0);

        let staff = store.find_by_entity_id("E1").await.unwrap().unwrap();
        assert_eq!(staff.role, UserRole::Staff);
        let admin = store.find_by_entity_id("ADMIN1").await.unwrap().unwrap();
        assert_eq!(admin.role, UserRole::SuperAdmin);
        // All accounts share the one hash from this run.
        assert_eq!(admin.password_hash, staff.password_hash);
    }

    #[tokio::test]
    async fn unknown_role_defaults_to_student() {
        let store = MemoryStore::default();
        let rows = vec![row("E1", Some("janitor")), row("E2", None)];

        let report = import_users(&store, rows, &options()).await.unwrap();
        assert_eq!(report.defaulted_roles, 2);
        let user = store.find_by_entity_id("E1").await.unwrap().unwrap();
        assert_eq!(user.role, UserRole::Student);
    }

    #[tokio::test]
    async fn csv_super_admin_role_is_not_escalated() {
        let store = MemoryStore::default();
        let rows = vec![row("E1", Some("super_admin"))];

        let report = import_users(&store, rows, &options()).await.unwrap();
        assert_eq!(report.defaulted_roles, 1);

        let user = store.find_by_entity_id("E1").await.unwrap().unwrap();
        assert_eq!(user.role, UserRole::Student);
    }

    #[tokio::test]
    async fn row_without_entity_id_is_skipped() {
        let store = MemoryStore::default();
        let rows = vec![RawUserRow::default(), row("E1", Some("student"))];

        let report = import_users(&store, rows, &options()).await.unwrap();
        assert_eq!(report.imported, 1);
        assert_eq!(report.skipped_rows, 1);
    }

    #[tokio::test]
    async fn admin_collision_aborts_before_admin_write() {
        let store = MemoryStore::default();
        let rows = vec![row("ADMIN1", Some("student"))];

        let err = import_users(&store, rows, &options()).await.unwrap_err();
        assert!(matches!(err, ImportError::SuperAdminCollision(id) if id == "ADMIN1"));

        // The CSV row stands, but it was never promoted.
        let record = store.find_by_entity_id("ADMIN1").await.unwrap().unwrap();
        assert_eq!(record.role, UserRole::Student);
    }
}
