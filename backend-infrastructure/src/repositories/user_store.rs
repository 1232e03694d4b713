//! SQLite-backed user store.
//!
//! The local database only holds login accounts; all analytics data stays
//! behind the gateway. WAL mode keeps the import CLI and the server safe to
//! run against the same file.

use std::sync::{Arc, Mutex, MutexGuard};

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use rusqlite::{params, Connection, Row};
use tracing::info;

use backend_domain::{UserRecord, UserRole, UserStore};

pub struct SqliteUserStore {
    conn: Arc<Mutex<Connection>>,
}

const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS users (
    entity_id     TEXT PRIMARY KEY,
    name          TEXT,
    role          TEXT NOT NULL,
    email         TEXT,
    department    TEXT,
    student_id    TEXT,
    staff_id      TEXT,
    card_id       TEXT,
    device_hash   TEXT,
    face_id       TEXT,
    password_hash TEXT NOT NULL,
    updated_at    TEXT NOT NULL DEFAULT (datetime('now'))
);
CREATE INDEX IF NOT EXISTS idx_users_email ON users(email);
"#;

const UPSERT: &str = r#"
INSERT INTO users (
    entity_id, name, role, email, department, student_id, staff_id,
    card_id, device_hash, face_id, password_hash, updated_at
) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, datetime('now'))
ON CONFLICT(entity_id) DO UPDATE SET
    name = excluded.name,
    role = excluded.role,
    email = excluded.email,
    department = excluded.department,
    student_id = excluded.student_id,
    staff_id = excluded.staff_id,
    card_id = excluded.card_id,
    device_hash = excluded.device_hash,
    face_id = excluded.face_id,
    password_hash = excluded.password_hash,
    updated_at = excluded.updated_at
"#;

impl SqliteUserStore {
    pub fn open(path: &str) -> Result<Self> {
        if let Some(parent) = std::path::Path::new(path).parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        info!(path, "opening user store");
        let conn = Connection::open(path)?;
        conn.pragma_update(None, "journal_mode", "WAL")?;
        conn.pragma_update(None, "synchronous", "NORMAL")?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    #[cfg(test)]
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    fn lock(&self) -> Result<MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|_| anyhow!("user store mutex poisoned"))
    }
}

fn row_to_record(row: &Row<'_>) -> rusqlite::Result<UserRecord> {
    let role: String = row.get("role")?;
    Ok(UserRecord {
        entity_id: row.get("entity_id")?,
        name: row.get("name")?,
        role: UserRole::from(role.as_str()),
        email: row.get("email")?,
        department: row.get("department")?,
        student_id: row.get("student_id")?,
        staff_id: row.get("staff_id")?,
        card_id: row.get("card_id")?,
        device_hash: row.get("device_hash")?,
        face_id: row.get("face_id")?,
        password_hash: row.get("password_hash")?,
    })
}

fn bind_upsert(conn: &Connection, user: &UserRecord) -> rusqlite::Result<usize> {
    conn.execute(
        UPSERT,
        params![
            user.entity_id,
            user.name,
            user.role.as_str(),
            user.email,
            user.department,
            user.student_id,
            user.staff_id,
            user.card_id,
            user.device_hash,
            user.face_id,
            user.password_hash,
        ],
    )
}

#[async_trait]
impl UserStore for SqliteUserStore {
    async fn ensure_schema(&self) -> Result<()> {
        self.lock()?.execute_batch(SCHEMA)?;
        Ok(())
    }

    async fn upsert_users(&self, users: &[UserRecord]) -> Result<usize> {
        let mut conn = self.lock()?;
        let tx = conn.transaction()?;
        for user in users {
            bind_upsert(&tx, user)?;
        }
        tx.commit()?;
        Ok(users.len())
    }

    async fn upsert_user(&self, user: &UserRecord) -> Result<()> {
        let conn = self.lock()?;
        bind_upsert(&conn, user)?;
        Ok(())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<UserRecord>> {
        let conn = self.lock()?;
        let mut stmt = conn.prepare("SELECT * FROM users WHERE email = ?1")?;
        let mut rows = stmt.query_map(params![email], row_to_record)?;
        rows.next().transpose().map_err(Into::into)
    }

    async fn find_by_entity_id(&self, entity_id: &str) -> Result<Option<UserRecord>> {
        let conn = self.lock()?;
        let mut stmt = conn.prepare("SELECT * FROM users WHERE entity_id = ?1")?;
        let mut rows = stmt.query_map(params![entity_id], row_to_record)?;
        rows.next().transpose().map_err(Into::into)
    }

    async fn count_users(&self) -> Result<u64> {
        let count: u64 =
            self.lock()?
                .query_row("SELECT COUNT(*) FROM users", [], |row| row.get(0))?;
        Ok(count)
    }

    async fn ping(&self) -> Result<()> {
        self.lock()?.query_row("SELECT 1", [], |_| Ok(()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(entity_id: &str, email: Option<&str>, role: UserRole) -> UserRecord {
        UserRecord {
            entity_id: entity_id.to_string(),
            name: Some("Test User".to_string()),
            role,
            email: email.map(str::to_string),
            department: None,
            student_id: None,
            staff_id: None,
            card_id: None,
            device_hash: None,
            face_id: None,
            password_hash: "$argon2id$test".to_string(),
        }
    }

    async fn store() -> SqliteUserStore {
        let store = SqliteUserStore::open_in_memory().unwrap();
        store.ensure_schema().await.unwrap();
        store
    }

    #[tokio::test]
    async fn upsert_replaces_all_fields() {
        let store = store().await;
        let mut record = user("E1", Some("old@example.edu"), UserRole::Student);
        record.department = Some("History".to_string());
        store.upsert_user(&record).await.unwrap();

        // Same key, different payload; department must not survive.
        let replacement = user("E1", Some("new@example.edu"), UserRole::Faculty);
        store.upsert_user(&replacement).await.unwrap();

        let found = store.find_by_entity_id("E1").await.unwrap().unwrap();
        assert_eq!(found.email.as_deref(), Some("new@example.edu"));
        assert_eq!(found.role, UserRole::Faculty);
        assert_eq!(found.department, None);
        assert_eq!(store.count_users().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn batch_upsert_writes_all_rows() {
        let store = store().await;
        let written = store
            .upsert_users(&[
                user("E1", Some("a@example.edu"), UserRole::Student),
                user("E2", Some("b@example.edu"), UserRole::Staff),
                user("E1", Some("c@example.edu"), UserRole::Student),
            ])
            .await
            .unwrap();
        assert_eq!(written, 3);
        // E1 appeared twice; last write wins.
        assert_eq!(store.count_users().await.unwrap(), 2);
        let found = store.find_by_entity_id("E1").await.unwrap().unwrap();
        assert_eq!(found.email.as_deref(), Some("c@example.edu"));
    }

    #[tokio::test]
    async fn find_by_email_misses_cleanly() {
        let store = store().await;
        assert!(store
            .find_by_email("nobody@example.edu")
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn unknown_stored_role_reads_as_student() {
        let store = store().await;
        store
            .upsert_user(&user("E1", None, UserRole::Staff))
            .await
            .unwrap();
        store
            .lock()
            .unwrap()
            .execute("UPDATE users SET role = 'LEGACY' WHERE entity_id = 'E1'", [])
            .unwrap();
        let found = store.find_by_entity_id("E1").await.unwrap().unwrap();
        assert_eq!(found.role, UserRole::Student);
    }
}
