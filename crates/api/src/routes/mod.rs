//! Route handlers for the API server.

pub mod health;
pub mod share;
pub mod summaries;

use axum::routing::{get, post};
use axum::Router;

use crate::state::AppState;

/// Build the router with all routes.
pub fn router() -> Router<AppState> {
    Router::new()
        // Health check
        .route("/api/health", get(health::health))
        // Sharing
        .route("/api/summary/shared/:token", get(share::shared_summary))
        .route("/api/summary/:id/share", post(share::share_summary))
        // CRUD
        .route("/api/summary/generate", post(summaries::generate_summary))
        .route("/api/summary", get(summaries::list_summaries))
        .route(
            "/api/summary/:id",
            get(summaries::get_summary)
                .put(summaries::update_summary)
                .delete(summaries::delete_summary),
        )
        .route("/api/summary/:id/improve", post(summaries::improve_summary))
}
