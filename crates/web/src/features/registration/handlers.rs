use axum::{
    Json,
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use storage::{Database, dto::registration::MarkPaidRequest, models::RegistrationFeeRecord};
use uuid::Uuid;

use crate::error::WebResult;

use super::services;

#[utoipa::path(
    get,
    path = "/api/registration-fees/{dancer_id}",
    params(("dancer_id" = Uuid, Path, description = "Dancer identifier")),
    responses(
        (status = 200, description = "Current registration-fee status", body = RegistrationFeeRecord)
    ),
    tag = "registration-fees"
)]
pub async fn get_status(
    State(db): State<Database>,
    Path(dancer_id): Path<Uuid>,
) -> WebResult<Response> {
    let record = services::get_status(db.pool(), dancer_id).await?;

    Ok(Json(record).into_response())
}

#[utoipa::path(
    put,
    path = "/api/registration-fees/{dancer_id}/paid",
    params(("dancer_id" = Uuid, Path, description = "Dancer identifier")),
    request_body = MarkPaidRequest,
    responses(
        (status = 200, description = "Registration fee recorded as paid", body = RegistrationFeeRecord),
        (status = 401, description = "Missing or invalid API key"),
        (status = 404, description = "Dancer not found")
    ),
    security(("bearer_auth" = [])),
    tag = "registration-fees"
)]
pub async fn mark_paid(
    State(db): State<Database>,
    Path(dancer_id): Path<Uuid>,
    Json(request): Json<MarkPaidRequest>,
) -> WebResult<Response> {
    let record = services::mark_paid(db.pool(), dancer_id, request.mastery_level).await?;

    Ok(Json(record).into_response())
}

#[utoipa::path(
    put,
    path = "/api/registration-fees/{dancer_id}/unpaid",
    params(("dancer_id" = Uuid, Path, description = "Dancer identifier")),
    responses(
        (status = 200, description = "Registration fee cleared", body = RegistrationFeeRecord),
        (status = 401, description = "Missing or invalid API key"),
        (status = 404, description = "Dancer not found")
    ),
    security(("bearer_auth" = [])),
    tag = "registration-fees"
)]
pub async fn mark_unpaid(
    State(db): State<Database>,
    Path(dancer_id): Path<Uuid>,
) -> WebResult<Response> {
    let record = services::mark_unpaid(db.pool(), dancer_id).await?;

    Ok(Json(record).into_response())
}
