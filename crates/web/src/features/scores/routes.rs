use axum::{
    Router,
    routing::{delete, put},
};
use storage::Database;

use super::handlers::{remove_score, submit_score};

pub fn routes() -> Router<Database> {
    Router::new()
        .route("/", put(submit_score))
        .route("/:judge_id/:performance_id", delete(remove_score))
}
