use sqlx::PgPool;
use uuid::Uuid;

use crate::error::{Result, StorageError};
use crate::models::Dancer;

/// Repository for Dancer lookups. Dancer CRUD itself lives in the
/// surrounding registration layer; this core only reads.
pub struct DancerRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> DancerRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Dancer> {
        let dancer = sqlx::query_as::<_, Dancer>(
            r#"
            SELECT dancer_id, first_name, last_name, studio, created_at
            FROM dancers
            WHERE dancer_id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(dancer)
    }

    /// Fetch a roster of dancers. Errors with NotFound if any requested
    /// dancer does not exist, so fee quotes never silently skip a member.
    pub async fn find_by_ids(&self, ids: &[Uuid]) -> Result<Vec<Dancer>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let dancers = sqlx::query_as::<_, Dancer>(
            r#"
            SELECT dancer_id, first_name, last_name, studio, created_at
            FROM dancers
            WHERE dancer_id = ANY($1)
            "#,
        )
        .bind(ids.to_vec())
        .fetch_all(self.pool)
        .await?;

        let distinct: std::collections::HashSet<Uuid> = ids.iter().copied().collect();
        if dancers.len() != distinct.len() {
            return Err(StorageError::NotFound);
        }

        Ok(dancers)
    }
}
