use std::collections::HashMap;

use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::score::SubmitScoreRequest;
use crate::error::{Result, StorageError};
use crate::models::Score;

const SCORE_COLUMNS: &str = "judge_id, performance_id, technical, musical, performance, \
     styling, overall_impression, comments, submitted_at";

/// Repository for Score database operations
pub struct ScoreRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ScoreRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Insert or replace one judge's score for one performance. The
    /// (judge_id, performance_id) key makes concurrent submissions from
    /// different judges independent; a resubmission by the same judge
    /// overwrites in place, last write wins.
    pub async fn upsert(&self, req: &SubmitScoreRequest) -> Result<Score> {
        let score = sqlx::query_as::<_, Score>(&format!(
            r#"
            INSERT INTO scores (
                judge_id, performance_id, technical, musical, performance,
                styling, overall_impression, comments
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            ON CONFLICT (judge_id, performance_id) DO UPDATE SET
                technical = EXCLUDED.technical,
                musical = EXCLUDED.musical,
                performance = EXCLUDED.performance,
                styling = EXCLUDED.styling,
                overall_impression = EXCLUDED.overall_impression,
                comments = EXCLUDED.comments,
                submitted_at = NOW()
            RETURNING {SCORE_COLUMNS}
            "#
        ))
        .bind(req.judge_id)
        .bind(req.performance_id)
        .bind(req.technical)
        .bind(req.musical)
        .bind(req.performance)
        .bind(req.styling)
        .bind(req.overall_impression)
        .bind(&req.comments)
        .fetch_one(self.pool)
        .await
        .map_err(|e| {
            let err = StorageError::from(e);
            if err.is_foreign_key_violation() {
                StorageError::NotFound
            } else {
                err
            }
        })?;

        Ok(score)
    }

    pub async fn list_for_performance(&self, performance_id: Uuid) -> Result<Vec<Score>> {
        let scores = sqlx::query_as::<_, Score>(&format!(
            r#"
            SELECT {SCORE_COLUMNS}
            FROM scores
            WHERE performance_id = $1
            ORDER BY submitted_at, judge_id
            "#
        ))
        .bind(performance_id)
        .fetch_all(self.pool)
        .await?;

        Ok(scores)
    }

    /// All scores for a set of performances, grouped by performance.
    pub async fn list_for_performances(
        &self,
        performance_ids: &[Uuid],
    ) -> Result<HashMap<Uuid, Vec<Score>>> {
        if performance_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let scores = sqlx::query_as::<_, Score>(&format!(
            r#"
            SELECT {SCORE_COLUMNS}
            FROM scores
            WHERE performance_id = ANY($1)
            ORDER BY performance_id, submitted_at, judge_id
            "#
        ))
        .bind(performance_ids.to_vec())
        .fetch_all(self.pool)
        .await?;

        let mut grouped: HashMap<Uuid, Vec<Score>> = HashMap::new();
        for score in scores {
            grouped.entry(score.performance_id).or_default().push(score);
        }

        Ok(grouped)
    }

    /// Explicit judge-score removal, the only deletion path for scores.
    pub async fn delete(&self, judge_id: Uuid, performance_id: Uuid) -> Result<()> {
        let result = sqlx::query(
            r#"
            DELETE FROM scores
            WHERE judge_id = $1 AND performance_id = $2
            "#,
        )
        .bind(judge_id)
        .bind(performance_id)
        .execute(self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }
}
