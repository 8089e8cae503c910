use sqlx::PgPool;
use storage::{
    dto::score::SubmitScoreRequest, error::Result, models::Score,
    repository::score::ScoreRepository,
};
use uuid::Uuid;

/// Persist one judge's score. The store upserts on
/// (judge_id, performance_id), so a resubmission replaces the prior score.
pub async fn submit_score(pool: &PgPool, request: &SubmitScoreRequest) -> Result<Score> {
    ScoreRepository::new(pool).upsert(request).await
}

pub async fn remove_score(pool: &PgPool, judge_id: Uuid, performance_id: Uuid) -> Result<()> {
    ScoreRepository::new(pool).delete(judge_id, performance_id).await
}
