//! Cat repository backed by PostgreSQL

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use super::utils::CAT_COLUMNS;
use super::CatStore;
use crate::authorization::CatFilter;
use crate::models::cat::{BoundingBox, Cat, CatChanges, NewCat};

/// Repository for cat database operations
#[derive(Clone)]
pub struct CatRepository {
    pool: PgPool,
}

impl CatRepository {
    /// Create a new CatRepository instance
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CatStore for CatRepository {
    async fn find_all(&self) -> Result<Vec<Cat>, sqlx::Error> {
        let sql = format!("SELECT {} FROM cats ORDER BY created_at ASC", CAT_COLUMNS);
        sqlx::query_as::<_, Cat>(&sql).fetch_all(&self.pool).await
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Cat>, sqlx::Error> {
        let sql = format!("SELECT {} FROM cats WHERE id = $1", CAT_COLUMNS);
        sqlx::query_as::<_, Cat>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    async fn find_in_area(&self, area: BoundingBox) -> Result<Vec<Cat>, sqlx::Error> {
        let sql = format!(
            "SELECT {} FROM cats \
             WHERE lat BETWEEN $1 AND $2 AND lng BETWEEN $3 AND $4 \
             ORDER BY created_at ASC",
            CAT_COLUMNS
        );
        sqlx::query_as::<_, Cat>(&sql)
            .bind(area.min_lat)
            .bind(area.max_lat)
            .bind(area.min_lng)
            .bind(area.max_lng)
            .fetch_all(&self.pool)
            .await
    }

    async fn find_by_owner(&self, owner: &str) -> Result<Vec<Cat>, sqlx::Error> {
        let sql = format!(
            "SELECT {} FROM cats WHERE owner = $1 ORDER BY created_at ASC",
            CAT_COLUMNS
        );
        sqlx::query_as::<_, Cat>(&sql)
            .bind(owner)
            .fetch_all(&self.pool)
            .await
    }

    async fn create(&self, cat: NewCat) -> Result<Option<Cat>, sqlx::Error> {
        let sql = format!(
            "INSERT INTO cats (cat_name, weight, filename, birthdate, lat, lng, owner) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             RETURNING {}",
            CAT_COLUMNS
        );
        sqlx::query_as::<_, Cat>(&sql)
            .bind(&cat.cat_name)
            .bind(cat.weight)
            .bind(&cat.filename)
            .bind(cat.birthdate)
            .bind(cat.location.lat)
            .bind(cat.location.lng)
            .bind(&cat.owner)
            .fetch_optional(&self.pool)
            .await
    }

    async fn update(
        &self,
        filter: &CatFilter<'_>,
        changes: &CatChanges,
    ) -> Result<Option<Cat>, sqlx::Error> {
        let sql = format!(
            r#"
            UPDATE cats SET
                cat_name = COALESCE($3, cat_name),
                weight = COALESCE($4, weight),
                filename = COALESCE($5, filename),
                birthdate = COALESCE($6, birthdate),
                lat = COALESCE($7, lat),
                lng = COALESCE($8, lng)
            WHERE id = $1 AND ($2::text IS NULL OR owner = $2)
            RETURNING {}
            "#,
            CAT_COLUMNS
        );
        sqlx::query_as::<_, Cat>(&sql)
            .bind(filter.id)
            .bind(filter.owner())
            .bind(changes.cat_name.as_deref())
            .bind(changes.weight)
            .bind(changes.filename.as_deref())
            .bind(changes.birthdate)
            .bind(changes.location.map(|l| l.lat))
            .bind(changes.location.map(|l| l.lng))
            .fetch_optional(&self.pool)
            .await
    }

    async fn delete(&self, filter: &CatFilter<'_>) -> Result<Option<Cat>, sqlx::Error> {
        let sql = format!(
            "DELETE FROM cats WHERE id = $1 AND ($2::text IS NULL OR owner = $2) RETURNING {}",
            CAT_COLUMNS
        );
        sqlx::query_as::<_, Cat>(&sql)
            .bind(filter.id)
            .bind(filter.owner())
            .fetch_optional(&self.pool)
            .await
    }
}
