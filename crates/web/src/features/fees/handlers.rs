use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::fee::{FeeBreakdown, FeeQuoteRequest},
};
use validator::Validate;

use crate::error::WebResult;

use super::services;

#[utoipa::path(
    post,
    path = "/api/fees/quote",
    request_body = FeeQuoteRequest,
    responses(
        (status = 200, description = "Fee breakdown computed", body = FeeBreakdown),
        (status = 400, description = "Invalid roster or solo count"),
        (status = 404, description = "Unknown dancer in roster")
    ),
    tag = "fees"
)]
pub async fn quote_fee(
    State(db): State<Database>,
    Json(request): Json<FeeQuoteRequest>,
) -> WebResult<Response> {
    request.validate()?;

    let breakdown = services::quote_fee(db.pool(), &request).await?;

    Ok(Json(breakdown).into_response())
}
