pub mod health;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};

use crate::simplify::handlers;
use crate::state::AppState;

/// Every response carries `x-request-id` (echoed if the client sent one), so a
/// client with overlapping requests can drop responses it has superseded.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/simplify", post(handlers::handle_simplify))
        .with_state(state)
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
}
