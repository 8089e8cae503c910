use axum::{Router, routing::post};
use storage::Database;

use super::handlers::quote_fee;

pub fn routes() -> Router<Database> {
    Router::new().route("/quote", post(quote_fee))
}
