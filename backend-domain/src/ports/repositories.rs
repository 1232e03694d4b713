use async_trait::async_trait;

use crate::entities::UserRecord;

#[async_trait]
pub trait UserStore: Send + Sync {
    async fn ensure_schema(&self) -> anyhow::Result<()>;

    /// Upserts a batch keyed by `entity_id` inside one transaction. A
    /// matched row has all mapped fields replaced, never partially
    /// updated. Returns the number of rows written.
    async fn upsert_users(&self, users: &[UserRecord]) -> anyhow::Result<usize>;

    /// Single-row upsert with the same full-replace semantics.
    async fn upsert_user(&self, user: &UserRecord) -> anyhow::Result<()>;

    async fn find_by_email(&self, email: &str) -> anyhow::Result<Option<UserRecord>>;
    async fn find_by_entity_id(&self, entity_id: &str) -> anyhow::Result<Option<UserRecord>>;
    async fn count_users(&self) -> anyhow::Result<u64>;
    async fn ping(&self) -> anyhow::Result<()>;
}
