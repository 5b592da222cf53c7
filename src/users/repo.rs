use async_trait::async_trait;
use sqlx::PgPool;
use tracing::debug;

use crate::users::repo_types::User;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Single-statement operations against the `users` table.
///
/// Each call is one round trip. `Ok(None)` from `fetch_by_id`/`update_by_id`
/// means no row matched the id.
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn fetch_by_id(&self, id: i32) -> Result<Option<User>, StoreError>;
    async fn insert(&self, name: &str) -> Result<User, StoreError>;
    async fn update_by_id(&self, id: i32, name: &str) -> Result<Option<User>, StoreError>;
    /// Returns the number of deleted rows.
    async fn delete_by_id(&self, id: i32) -> Result<u64, StoreError>;
}

#[derive(Clone)]
pub struct PgUserStore {
    db: PgPool,
}

impl PgUserStore {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn fetch_by_id(&self, id: i32) -> Result<Option<User>, StoreError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, name
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.db)
        .await?;
        Ok(user)
    }

    async fn insert(&self, name: &str) -> Result<User, StoreError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (name)
            VALUES ($1)
            RETURNING id, name
            "#,
        )
        .bind(name)
        .fetch_one(&self.db)
        .await?;
        debug!(user_id = user.id, "user inserted");
        Ok(user)
    }

    async fn update_by_id(&self, id: i32, name: &str) -> Result<Option<User>, StoreError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            UPDATE users
            SET name = $1
            WHERE id = $2
            RETURNING id, name
            "#,
        )
        .bind(name)
        .bind(id)
        .fetch_optional(&self.db)
        .await?;
        Ok(user)
    }

    async fn delete_by_id(&self, id: i32) -> Result<u64, StoreError> {
        let res = sqlx::query(r#"DELETE FROM users WHERE id = $1"#)
            .bind(id)
            .execute(&self.db)
            .await?;
        debug!(user_id = id, rows = res.rows_affected(), "user delete executed");
        Ok(res.rows_affected())
    }
}
