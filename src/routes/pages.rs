use std::collections::HashMap;
use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{Html, Redirect};
use axum::routing::{get, post};
use axum::{Form, Router};
use uuid::Uuid;

use crate::dom::Event;
use crate::error::AppError;
use crate::page::Page;
use crate::state::AppState;

// ─────────────────────────────────────────────────────────────────────────────
// Router
// ─────────────────────────────────────────────────────────────────────────────

/// Build the page route group: `/` and `/pages/...`
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(open_page))
        .route("/pages/{page_id}", get(show_page).delete(close_page))
        .route("/pages/{page_id}/events/click/{element_id}", post(click))
        .route("/pages/{page_id}/events/submit/{element_id}", post(submit))
}

// ─────────────────────────────────────────────────────────────────────────────
// Helpers
// ─────────────────────────────────────────────────────────────────────────────

/// URL path of a page; also the base its event routes hang off.
#[must_use]
pub fn page_path(page_id: Uuid) -> String {
    format!("/pages/{page_id}")
}

fn find_page(state: &AppState, page_id: Uuid) -> Result<Arc<Page>, AppError> {
    state
        .pages
        .get(page_id)
        .ok_or_else(|| AppError::NotFound(format!("Page {page_id} is not open")))
}

// ─────────────────────────────────────────────────────────────────────────────
// Handlers
// ─────────────────────────────────────────────────────────────────────────────

/// `GET /`: a page load. Bootstrap a fresh page and send the browser to it.
async fn open_page(State(state): State<AppState>) -> Redirect {
    let page = state.pages.open(state.api.clone()).await;
    Redirect::to(&page_path(page.id()))
}

/// `GET /pages/{page_id}`
async fn show_page(
    State(state): State<AppState>,
    Path(page_id): Path<Uuid>,
) -> Result<Html<String>, AppError> {
    let page = find_page(&state, page_id)?;
    Ok(Html(page.render_html(&page_path(page_id)).await))
}

/// `DELETE /pages/{page_id}`: the page was unloaded.
async fn close_page(
    State(state): State<AppState>,
    Path(page_id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    if state.pages.close(page_id) {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound(format!("Page {page_id} is not open")))
    }
}

/// `POST /pages/{page_id}/events/click/{element_id}`
async fn click(
    State(state): State<AppState>,
    Path((page_id, element_id)): Path<(Uuid, String)>,
) -> Result<Redirect, AppError> {
    let page = find_page(&state, page_id)?;
    page.dispatch(Event::Click { target: element_id }).await;
    Ok(Redirect::to(&page_path(page_id)))
}

/// `POST /pages/{page_id}/events/submit/{element_id}` with the form fields url-encoded.
async fn submit(
    State(state): State<AppState>,
    Path((page_id, element_id)): Path<(Uuid, String)>,
    Form(fields): Form<HashMap<String, String>>,
) -> Result<Redirect, AppError> {
    let page = find_page(&state, page_id)?;
    page.dispatch(Event::Submit {
        target: element_id,
        fields,
    })
    .await;
    Ok(Redirect::to(&page_path(page_id)))
}
