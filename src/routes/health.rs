use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
struct RootHealth {
    status: &'static str,
    version: &'static str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ApiHealth {
    status: &'static str,
    version: &'static str,
    environment: &'static str,
    roster_url: String,
    open_pages: usize,
}

/// `GET /health`
pub fn root_router() -> Router<AppState> {
    Router::new().route("/health", get(root_health))
}

/// `GET /api/v1/health`
pub fn api_router() -> Router<AppState> {
    Router::new().route("/health", get(api_health))
}

async fn root_health() -> Json<RootHealth> {
    Json(RootHealth {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
    })
}

async fn api_health(State(state): State<AppState>) -> Json<ApiHealth> {
    Json(ApiHealth {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        environment: state.config.environment.as_str(),
        roster_url: state.config.roster_url(),
        open_pages: state.pages.len(),
    })
}
