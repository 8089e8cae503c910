use axum::{
    Router,
    routing::{get, post},
};
use storage::Database;

use super::handlers::{create_performance, get_performance, list_performances, patch_performance};

pub fn routes() -> Router<Database> {
    Router::new()
        .route("/", post(create_performance).get(list_performances))
        .route("/:performance_id", get(get_performance).patch(patch_performance))
}
