use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::ranking::RankingFilter;
use crate::error::Result;
use crate::repository::performance::PerformanceRepository;
use crate::repository::score::ScoreRepository;
use crate::services::ranking::RankingCandidate;

/// Orchestrating read for ranking: eligible performances for a filter plus
/// everything the ranking service needs about them. Store failures
/// propagate as errors; a filter that matches nothing is an empty Ok.
pub struct RankingRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> RankingRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn load_candidates(&self, filter: &RankingFilter) -> Result<Vec<RankingCandidate>> {
        let performance_repo = PerformanceRepository::new(self.pool);
        let performances = performance_repo.list_filtered(filter).await?;

        let performance_ids: Vec<Uuid> =
            performances.iter().map(|p| p.performance_id).collect();

        let mut names = performance_repo.participant_names(&performance_ids).await?;
        let mut scores = ScoreRepository::new(self.pool)
            .list_for_performances(&performance_ids)
            .await?;

        Ok(performances
            .into_iter()
            .map(|performance| {
                let id = performance.performance_id;
                RankingCandidate {
                    performance,
                    participant_names: names.remove(&id).unwrap_or_default(),
                    scores: scores.remove(&id).unwrap_or_default(),
                }
            })
            .collect())
    }
}
