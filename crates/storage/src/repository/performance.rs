use std::collections::HashMap;

use sqlx::{FromRow, PgPool, QueryBuilder};
use uuid::Uuid;

use crate::dto::performance::{CreatePerformanceRequest, UpdatePerformancePatch};
use crate::dto::ranking::RankingFilter;
use crate::error::{Result, StorageError};
use crate::models::Performance;

const PERFORMANCE_COLUMNS: &str = "performance_id, event_id, title, choreographer, age_category, \
     performance_type, dance_style, mastery_level, region, contestant_name, \
     item_number, withdrawn, created_at";

#[derive(FromRow)]
struct ParticipantNameRow {
    performance_id: Uuid,
    first_name: String,
    last_name: String,
}

/// Repository for Performance database operations
pub struct PerformanceRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> PerformanceRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Create a performance from an approved entry, roster included, in one
    /// transaction. Roster order is preserved through the position column.
    pub async fn create(&self, req: &CreatePerformanceRequest) -> Result<Performance> {
        let mut tx = self.pool.begin().await?;

        let performance = sqlx::query_as::<_, Performance>(&format!(
            r#"
            INSERT INTO performances (
                event_id, title, choreographer, age_category, performance_type,
                dance_style, mastery_level, region, contestant_name
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING {PERFORMANCE_COLUMNS}
            "#
        ))
        .bind(req.event_id)
        .bind(&req.title)
        .bind(&req.choreographer)
        .bind(&req.age_category)
        .bind(req.performance_type.as_str())
        .bind(&req.dance_style)
        .bind(req.mastery_level.as_str())
        .bind(&req.region)
        .bind(&req.contestant_name)
        .fetch_one(&mut *tx)
        .await
        .map_err(reference_error)?;

        for (position, dancer_id) in req.participant_ids.iter().enumerate() {
            sqlx::query(
                r#"
                INSERT INTO performance_participants (performance_id, dancer_id, position)
                VALUES ($1, $2, $3)
                "#,
            )
            .bind(performance.performance_id)
            .bind(dancer_id)
            .bind(position as i16)
            .execute(&mut *tx)
            .await
            .map_err(reference_error)?;
        }

        tx.commit().await?;

        Ok(performance)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Performance> {
        let performance = sqlx::query_as::<_, Performance>(&format!(
            r#"
            SELECT {PERFORMANCE_COLUMNS}
            FROM performances
            WHERE performance_id = $1
            "#
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(performance)
    }

    /// List one page of performances, newest first, with the unpaged total.
    pub async fn list_paged(&self, offset: i64, limit: i64) -> Result<(Vec<Performance>, i64)> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM performances")
            .fetch_one(self.pool)
            .await?;

        let performances = sqlx::query_as::<_, Performance>(&format!(
            r#"
            SELECT {PERFORMANCE_COLUMNS}
            FROM performances
            ORDER BY created_at DESC, performance_id
            LIMIT $1 OFFSET $2
            "#
        ))
        .bind(limit)
        .bind(offset)
        .fetch_all(self.pool)
        .await?;

        Ok((performances, total))
    }

    /// Performances matching a ranking filter. Absent filter fields impose
    /// nothing; present ones are ANDed as exact matches.
    pub async fn list_filtered(&self, filter: &RankingFilter) -> Result<Vec<Performance>> {
        let mut query = QueryBuilder::new(format!(
            r#"
            SELECT {PERFORMANCE_COLUMNS}
            FROM performances
            WHERE 1=1
            "#
        ));

        let event_ids = filter.event_id_list();
        if !event_ids.is_empty() {
            query.push(" AND event_id = ANY(");
            query.push_bind(event_ids);
            query.push(")");
        }

        if let Some(ref age_category) = filter.age_category {
            query.push(" AND age_category = ");
            query.push_bind(age_category);
        }

        if let Some(performance_type) = filter.performance_type {
            query.push(" AND performance_type = ");
            query.push_bind(performance_type.as_str());
        }

        if let Some(ref region) = filter.region {
            query.push(" AND region = ");
            query.push_bind(region);
        }

        query.push(" ORDER BY created_at, performance_id");

        let performances: Vec<Performance> = query.build_query_as().fetch_all(self.pool).await?;

        Ok(performances)
    }

    /// Apply a typed patch to the two mutable performance attributes with a
    /// single parameterized update. Absent fields keep their stored value.
    pub async fn apply_patch(
        &self,
        id: Uuid,
        patch: &UpdatePerformancePatch,
    ) -> Result<Performance> {
        if patch.is_empty() {
            return self.find_by_id(id).await;
        }

        let performance = sqlx::query_as::<_, Performance>(&format!(
            r#"
            UPDATE performances
            SET item_number = CASE WHEN $2 THEN $3 ELSE item_number END,
                withdrawn   = CASE WHEN $4 THEN $5 ELSE withdrawn END
            WHERE performance_id = $1
            RETURNING {PERFORMANCE_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(patch.item_number.is_some())
        .bind(patch.item_number)
        .bind(patch.withdrawn.is_some())
        .bind(patch.withdrawn.unwrap_or(false))
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(performance)
    }

    /// Participant display names per performance, in roster order.
    pub async fn participant_names(
        &self,
        performance_ids: &[Uuid],
    ) -> Result<HashMap<Uuid, Vec<String>>> {
        if performance_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows: Vec<ParticipantNameRow> = sqlx::query_as(
            r#"
            SELECT pp.performance_id, d.first_name, d.last_name
            FROM performance_participants pp
            INNER JOIN dancers d ON d.dancer_id = pp.dancer_id
            WHERE pp.performance_id = ANY($1)
            ORDER BY pp.performance_id, pp.position
            "#,
        )
        .bind(performance_ids.to_vec())
        .fetch_all(self.pool)
        .await?;

        let mut names: HashMap<Uuid, Vec<String>> = HashMap::new();
        for row in rows {
            names
                .entry(row.performance_id)
                .or_default()
                .push(format!("{} {}", row.first_name, row.last_name));
        }

        Ok(names)
    }
}

/// Creation references events and dancers owned by the surrounding CRUD
/// layer; a broken reference reads as NotFound rather than a 500.
fn reference_error(e: sqlx::Error) -> StorageError {
    let err = StorageError::from(e);
    if err.is_foreign_key_violation() {
        StorageError::NotFound
    } else {
        err
    }
}
