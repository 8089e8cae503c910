use axum::{
    Json,
    extract::{Query, State},
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::ranking::{RankingEntry, RankingFilter},
};

use crate::error::WebResult;

use super::services;

#[utoipa::path(
    get,
    path = "/api/rankings",
    params(RankingFilter),
    responses(
        (status = 200, description = "Ranked results retrieved successfully", body = Vec<RankingEntry>),
        (status = 500, description = "Ranking computation failed")
    ),
    tag = "rankings"
)]
pub async fn get_rankings(
    State(db): State<Database>,
    Query(filter): Query<RankingFilter>,
) -> WebResult<Response> {
    let entries = services::get_rankings(db.pool(), &filter).await?;

    Ok(Json(entries).into_response())
}
