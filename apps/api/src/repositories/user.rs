//! User mirror repository backed by PostgreSQL
//!
//! The auth service owns accounts; this table mirrors them so callers can
//! edit or remove their own profile (and admins anyone's).

use async_trait::async_trait;
use sqlx::PgPool;

use super::utils::USER_COLUMNS;
use super::UserStore;
use crate::models::user::{User, UserChanges, UserProfile};

/// Repository for user mirror operations
#[derive(Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    /// Create a new UserRepository instance
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for UserRepository {
    async fn upsert(&self, profile: &UserProfile) -> Result<User, sqlx::Error> {
        let sql = format!(
            r#"
            INSERT INTO users (id, user_name, email, role)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (id) DO UPDATE SET
                user_name = EXCLUDED.user_name,
                email = EXCLUDED.email,
                role = EXCLUDED.role,
                updated_at = NOW()
            RETURNING {}
            "#,
            USER_COLUMNS
        );
        sqlx::query_as::<_, User>(&sql)
            .bind(&profile.id)
            .bind(&profile.user_name)
            .bind(profile.email.to_lowercase())
            .bind(profile.role)
            .fetch_one(&self.pool)
            .await
    }

    async fn update(&self, id: &str, changes: &UserChanges) -> Result<Option<User>, sqlx::Error> {
        let sql = format!(
            r#"
            UPDATE users SET
                user_name = COALESCE($2, user_name),
                email = COALESCE($3, email),
                updated_at = NOW()
            WHERE id = $1
            RETURNING {}
            "#,
            USER_COLUMNS
        );
        sqlx::query_as::<_, User>(&sql)
            .bind(id)
            .bind(changes.user_name.as_deref())
            .bind(changes.email.as_deref().map(str::to_lowercase))
            .fetch_optional(&self.pool)
            .await
    }

    async fn delete(&self, id: &str) -> Result<Option<User>, sqlx::Error> {
        let sql = format!("DELETE FROM users WHERE id = $1 RETURNING {}", USER_COLUMNS);
        sqlx::query_as::<_, User>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }
}
