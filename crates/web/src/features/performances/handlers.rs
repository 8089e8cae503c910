use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::common::{PaginatedResponse, PaginationParams},
    dto::performance::{CreatePerformanceRequest, UpdatePerformancePatch},
    models::Performance,
};
use uuid::Uuid;
use validator::Validate;

use crate::error::{WebError, WebResult};

use super::services;

#[utoipa::path(
    post,
    path = "/api/performances",
    request_body = CreatePerformanceRequest,
    responses(
        (status = 201, description = "Entry approved as a performance", body = Performance),
        (status = 400, description = "Invalid entry payload"),
        (status = 404, description = "Unknown event or dancer")
    ),
    tag = "performances"
)]
pub async fn create_performance(
    State(db): State<Database>,
    Json(request): Json<CreatePerformanceRequest>,
) -> WebResult<Response> {
    request.validate()?;

    let performance = services::create_performance(db.pool(), &request).await?;

    Ok((StatusCode::CREATED, Json(performance)).into_response())
}

#[utoipa::path(
    get,
    path = "/api/performances",
    params(PaginationParams),
    responses(
        (status = 200, description = "Performances retrieved successfully", body = PaginatedResponse<Performance>),
        (status = 400, description = "Invalid pagination parameters")
    ),
    tag = "performances"
)]
pub async fn list_performances(
    State(db): State<Database>,
    Query(pagination): Query<PaginationParams>,
) -> WebResult<Response> {
    pagination.validate().map_err(WebError::BadRequest)?;

    let (performances, total_items) = services::list_performances(db.pool(), &pagination).await?;

    let response = PaginatedResponse::new(
        performances,
        pagination.page,
        pagination.page_size,
        total_items,
    );

    Ok(Json(response).into_response())
}

#[utoipa::path(
    get,
    path = "/api/performances/{performance_id}",
    params(("performance_id" = Uuid, Path, description = "Performance identifier")),
    responses(
        (status = 200, description = "Performance retrieved successfully", body = Performance),
        (status = 404, description = "Performance not found")
    ),
    tag = "performances"
)]
pub async fn get_performance(
    State(db): State<Database>,
    Path(performance_id): Path<Uuid>,
) -> WebResult<Response> {
    let performance = services::get_performance(db.pool(), performance_id).await?;

    Ok(Json(performance).into_response())
}

#[utoipa::path(
    patch,
    path = "/api/performances/{performance_id}",
    params(("performance_id" = Uuid, Path, description = "Performance identifier")),
    request_body = UpdatePerformancePatch,
    responses(
        (status = 200, description = "Performance updated", body = Performance),
        (status = 404, description = "Performance not found")
    ),
    tag = "performances"
)]
pub async fn patch_performance(
    State(db): State<Database>,
    Path(performance_id): Path<Uuid>,
    Json(patch): Json<UpdatePerformancePatch>,
) -> WebResult<Response> {
    let performance = services::patch_performance(db.pool(), performance_id, &patch).await?;

    Ok(Json(performance).into_response())
}
