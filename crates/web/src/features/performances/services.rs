use sqlx::PgPool;
use storage::{
    dto::common::PaginationParams,
    dto::performance::{CreatePerformanceRequest, UpdatePerformancePatch},
    error::Result,
    models::Performance,
    repository::performance::PerformanceRepository,
};
use uuid::Uuid;

pub async fn create_performance(
    pool: &PgPool,
    request: &CreatePerformanceRequest,
) -> Result<Performance> {
    PerformanceRepository::new(pool).create(request).await
}

pub async fn list_performances(
    pool: &PgPool,
    pagination: &PaginationParams,
) -> Result<(Vec<Performance>, i64)> {
    PerformanceRepository::new(pool)
        .list_paged(pagination.offset() as i64, pagination.limit() as i64)
        .await
}

pub async fn get_performance(pool: &PgPool, performance_id: Uuid) -> Result<Performance> {
    PerformanceRepository::new(pool).find_by_id(performance_id).await
}

pub async fn patch_performance(
    pool: &PgPool,
    performance_id: Uuid,
    patch: &UpdatePerformancePatch,
) -> Result<Performance> {
    PerformanceRepository::new(pool).apply_patch(performance_id, patch).await
}
