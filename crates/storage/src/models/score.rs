use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// One judge's evaluation of one performance. Unique per
/// (judge_id, performance_id); a resubmission replaces the stored row.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Score {
    pub judge_id: Uuid,
    pub performance_id: Uuid,
    pub technical: f64,
    pub musical: f64,
    pub performance: f64,
    pub styling: f64,
    pub overall_impression: f64,
    pub comments: Option<String>,
    pub submitted_at: chrono::NaiveDateTime,
}

impl Score {
    pub fn criteria(&self) -> [f64; 5] {
        [
            self.technical,
            self.musical,
            self.performance,
            self.styling,
            self.overall_impression,
        ]
    }

    /// Sum of the five criterion sub-scores, 0-100 per judge.
    pub fn judge_total(&self) -> f64 {
        self.criteria().iter().sum()
    }
}
