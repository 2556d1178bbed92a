use crate::handlers;
use crate::state::AppState;
use axum::{Router, routing::get};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/booths", get(handlers::get_booths))
        .route("/api/dashboard-summary", get(handlers::get_dashboard_summary))
        .route("/api/leadership", get(handlers::get_leadership))
        .route("/api/insights", get(handlers::get_insights))
        .route("/api/constituencies", get(handlers::get_constituencies))
        .route("/api/constituencies/:id", get(handlers::get_constituency))
        .route("/api/turnout-simulation", get(handlers::get_turnout_simulation))
        .with_state(state)
}
