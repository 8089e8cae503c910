use axum::{
    Router, middleware,
    routing::{get, put},
};
use storage::Database;

use crate::middleware::auth::{ApiKeys, require_api_key};

use super::handlers::{get_status, mark_paid, mark_unpaid};

/// Status reads are open; the paid/unpaid mutations are admin-only and sit
/// behind the API-key gate.
pub fn routes(api_keys: ApiKeys) -> Router<Database> {
    let admin = Router::new()
        .route("/:dancer_id/paid", put(mark_paid))
        .route("/:dancer_id/unpaid", put(mark_unpaid))
        .route_layer(middleware::from_fn_with_state(api_keys, require_api_key));

    Router::new().route("/:dancer_id", get(get_status)).merge(admin)
}
