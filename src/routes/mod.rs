mod health;
mod pages;

use axum::Router;

use crate::state::AppState;

/// Build the complete application router.
///
/// Structure:
/// - `GET /health`: lightweight health check
/// - `GET /api/v1/health`: detailed health check with the number of open pages
/// - `GET /` and `/pages/...`: the roster pages served to the browser
pub fn router() -> Router<AppState> {
    let api_v1 = Router::new().merge(health::api_router());

    Router::new()
        .merge(health::root_router())
        .merge(pages::router())
        .nest("/api/v1", api_v1)
}
