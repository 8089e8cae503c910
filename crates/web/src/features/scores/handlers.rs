use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{Database, dto::score::SubmitScoreRequest, models::Score};
use uuid::Uuid;
use validator::Validate;

use crate::error::WebResult;

use super::services;

#[utoipa::path(
    put,
    path = "/api/scores",
    request_body = SubmitScoreRequest,
    responses(
        (status = 200, description = "Score submitted successfully", body = Score),
        (status = 400, description = "Criterion score out of range"),
        (status = 404, description = "Performance not found")
    ),
    tag = "scores"
)]
pub async fn submit_score(
    State(db): State<Database>,
    Json(request): Json<SubmitScoreRequest>,
) -> WebResult<Response> {
    request.validate()?;

    let score = services::submit_score(db.pool(), &request).await?;

    Ok(Json(score).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/scores/{judge_id}/{performance_id}",
    params(
        ("judge_id" = Uuid, Path, description = "Judge identifier"),
        ("performance_id" = Uuid, Path, description = "Performance identifier")
    ),
    responses(
        (status = 204, description = "Score removed"),
        (status = 404, description = "No score for this judge and performance")
    ),
    tag = "scores"
)]
pub async fn remove_score(
    State(db): State<Database>,
    Path((judge_id, performance_id)): Path<(Uuid, Uuid)>,
) -> WebResult<Response> {
    services::remove_score(db.pool(), judge_id, performance_id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}
