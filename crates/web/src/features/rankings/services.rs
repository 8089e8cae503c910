use sqlx::PgPool;
use storage::{
    dto::ranking::{RankingEntry, RankingFilter},
    error::Result,
    repository::ranking::RankingRepository,
    services::ranking,
};

/// Load eligible performances for the filter and rank them. An empty list
/// is a valid result; only store failures surface as errors.
pub async fn get_rankings(pool: &PgPool, filter: &RankingFilter) -> Result<Vec<RankingEntry>> {
    let candidates = RankingRepository::new(pool).load_candidates(filter).await?;

    Ok(ranking::rank_candidates(candidates, &filter.partition_fields()))
}
