pub mod health;
pub mod page;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::catch_panic::CatchPanicLayer;

use crate::errors::panic_response;
use crate::sourcing::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(page::index_page))
        .route("/health", get(health::health_handler))
        .route("/api/v1/sourcing", post(handlers::handle_sourcing))
        .layer(CatchPanicLayer::custom(panic_response))
        .with_state(state)
}
