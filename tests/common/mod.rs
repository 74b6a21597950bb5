#![allow(dead_code)]

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use axum::body::Body;
use axum::extract::{Path, State};
use axum::http::{Request, StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing;
use axum::{Json, Router};
use http_body_util::BodyExt;
use serde_json::json;
use tower::ServiceExt;

use puppy_bowl::client::PuppyBowlClient;
use puppy_bowl::models::{NewPlayerRequest, Player, PlayerId};

pub const COHORT: &str = "test-cohort";

/// Test helper: send a GET request to the app and return (status, body).
pub async fn get(app: &Router, uri: &str) -> (StatusCode, String) {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap_or_default();

    let (status, _location, body) = send(app, request).await;
    (status, body)
}

/// Test helper: POST with no body, return (status, `Location` header).
pub async fn post_empty(app: &Router, uri: &str) -> (StatusCode, Option<String>) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .body(Body::empty())
        .unwrap_or_default();

    let (status, location, _body) = send(app, request).await;
    (status, location)
}

/// Test helper: POST an url-encoded form, return (status, `Location` header).
pub async fn post_form(app: &Router, uri: &str, form: &str) -> (StatusCode, Option<String>) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(form.to_string()))
        .unwrap_or_default();

    let (status, location, _body) = send(app, request).await;
    (status, location)
}

/// Test helper: send a DELETE request and return the status.
pub async fn delete(app: &Router, uri: &str) -> StatusCode {
    let request = Request::builder()
        .method("DELETE")
        .uri(uri)
        .body(Body::empty())
        .unwrap_or_default();

    send(app, request).await.0
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Option<String>, String) {
    let response = app.clone().oneshot(request).await.unwrap_or_default();

    let status = response.status();
    let location = response
        .headers()
        .get(header::LOCATION)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned);
    let body = response
        .into_body()
        .collect()
        .await
        .map(http_body_util::Collected::to_bytes)
        .unwrap_or_default();
    let body_str = String::from_utf8(body.to_vec()).unwrap_or_default();

    (status, location, body_str)
}

// ──────────────────────────────────────────────────────────────────────────────
// Fake Puppy Bowl API
// ──────────────────────────────────────────────────────────────────────────────

#[derive(Default)]
struct FakeApiState {
    players: Mutex<Vec<Player>>,
    requests: Mutex<Vec<String>>,
    fail_list: AtomicBool,
    fail_list_bare: AtomicBool,
    malformed_list: AtomicBool,
    fail_delete: AtomicBool,
    refuse_delete: AtomicBool,
    empty_delete: AtomicBool,
}

/// In-process stand-in for the remote API, bound to an ephemeral port.
#[derive(Clone)]
pub struct FakeApi {
    pub roster_url: String,
    state: Arc<FakeApiState>,
}

impl FakeApi {
    /// Serve `players` under `/api/test-cohort/players`.
    pub async fn spawn(players: Vec<Player>) -> anyhow::Result<Self> {
        let state = Arc::new(FakeApiState {
            players: Mutex::new(players),
            ..FakeApiState::default()
        });

        let app = Router::new()
            .route(
                "/api/{cohort}/players",
                routing::get(list_players).post(create_player),
            )
            .route(
                "/api/{cohort}/players/{id}",
                routing::get(get_player).delete(delete_player),
            )
            .with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, app).await {
                eprintln!("fake Puppy Bowl API stopped: {e}");
            }
        });

        Ok(Self {
            roster_url: format!("http://{addr}/api/{COHORT}/"),
            state,
        })
    }

    pub fn client(&self) -> anyhow::Result<PuppyBowlClient> {
        Ok(PuppyBowlClient::new(self.roster_url.clone())?)
    }

    /// Requests seen so far, as `"METHOD /players[/id]"`.
    pub fn requests(&self) -> Vec<String> {
        self.state
            .requests
            .lock()
            .map(|r| r.clone())
            .unwrap_or_default()
    }

    pub fn players(&self) -> Vec<Player> {
        self.state
            .players
            .lock()
            .map(|p| p.clone())
            .unwrap_or_default()
    }

    pub fn fail_list(&self, fail: bool) {
        self.state.fail_list.store(fail, Ordering::SeqCst);
    }

    /// Answer the list call with a 2xx failure envelope whose error has no message.
    pub fn fail_list_bare(&self, fail: bool) {
        self.state.fail_list_bare.store(fail, Ordering::SeqCst);
    }

    pub fn malformed_list(&self, malformed: bool) {
        self.state.malformed_list.store(malformed, Ordering::SeqCst);
    }

    pub fn fail_delete(&self, fail: bool) {
        self.state.fail_delete.store(fail, Ordering::SeqCst);
    }

    /// Answer deletes with `200` and a `success: false` envelope.
    pub fn refuse_delete(&self, refuse: bool) {
        self.state.refuse_delete.store(refuse, Ordering::SeqCst);
    }

    /// Answer successful deletes with `204` and no body.
    pub fn empty_delete(&self, empty: bool) {
        self.state.empty_delete.store(empty, Ordering::SeqCst);
    }
}

/// Sample roster entry.
pub fn player(id: PlayerId, name: &str, breed: &str) -> Player {
    Player {
        id,
        name: name.to_string(),
        breed: breed.to_string(),
        image_url: Some(format!("https://img.example/{id}.jpg")),
        status: "field".to_string(),
        team_id: Some(7),
    }
}

pub fn sample_roster() -> Vec<Player> {
    vec![
        player(1, "Anise", "Havanese"),
        player(2, "Biscuit", "Beagle"),
        player(3, "Crumpet", "American Staffordshire terrier"),
    ]
}

fn record(state: &FakeApiState, line: String) {
    if let Ok(mut requests) = state.requests.lock() {
        requests.push(line);
    }
}

fn not_found(id: PlayerId) -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(json!({
            "success": false,
            "error": { "name": "NotFoundError", "message": format!("Player #{id} not found") },
            "data": null
        })),
    )
        .into_response()
}

async fn list_players(State(state): State<Arc<FakeApiState>>) -> Response {
    record(&state, "GET /players".to_string());

    if state.malformed_list.load(Ordering::SeqCst) {
        return "<html>not json</html>".into_response();
    }
    if state.fail_list.load(Ordering::SeqCst) {
        return Json(json!({
            "success": false,
            "error": { "name": "CohortError", "message": "Cohort not found" },
            "data": null
        }))
        .into_response();
    }
    if state.fail_list_bare.load(Ordering::SeqCst) {
        return Json(json!({
            "success": false,
            "error": { "name": "CohortError" },
            "data": null
        }))
        .into_response();
    }

    let players = state.players.lock().map(|p| p.clone()).unwrap_or_default();
    Json(json!({ "success": true, "error": null, "data": { "players": players } })).into_response()
}

async fn get_player(
    State(state): State<Arc<FakeApiState>>,
    Path((_cohort, id)): Path<(String, PlayerId)>,
) -> Response {
    record(&state, format!("GET /players/{id}"));

    let found = state
        .players
        .lock()
        .ok()
        .and_then(|players| players.iter().find(|p| p.id == id).cloned());
    match found {
        Some(player) => {
            Json(json!({ "success": true, "error": null, "data": { "player": player } }))
                .into_response()
        }
        None => not_found(id),
    }
}

async fn create_player(
    State(state): State<Arc<FakeApiState>>,
    Json(request): Json<NewPlayerRequest>,
) -> Response {
    record(&state, "POST /players".to_string());

    let Ok(mut players) = state.players.lock() else {
        return StatusCode::INTERNAL_SERVER_ERROR.into_response();
    };
    let player = Player {
        id: players.iter().map(|p| p.id).max().unwrap_or(0) + 1,
        name: request.name,
        breed: request.breed,
        image_url: None,
        status: "bench".to_string(),
        team_id: None,
    };
    players.push(player.clone());
    drop(players);

    Json(json!({ "success": true, "error": null, "data": { "newPlayer": player } }))
        .into_response()
}

async fn delete_player(
    State(state): State<Arc<FakeApiState>>,
    Path((_cohort, id)): Path<(String, PlayerId)>,
) -> Response {
    record(&state, format!("DELETE /players/{id}"));

    if state.fail_delete.load(Ordering::SeqCst) {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({
                "success": false,
                "error": { "name": "DeleteError", "message": "Could not delete player" },
                "data": null
            })),
        )
            .into_response();
    }
    if state.refuse_delete.load(Ordering::SeqCst) {
        return Json(json!({
            "success": false,
            "error": { "name": "LockedError", "message": "Player is locked" },
            "data": {}
        }))
        .into_response();
    }

    let Ok(mut players) = state.players.lock() else {
        return StatusCode::INTERNAL_SERVER_ERROR.into_response();
    };
    let before = players.len();
    players.retain(|p| p.id != id);
    let removed = players.len() != before;
    drop(players);

    if removed && state.empty_delete.load(Ordering::SeqCst) {
        StatusCode::NO_CONTENT.into_response()
    } else if removed {
        Json(json!({ "success": true, "error": null, "data": null })).into_response()
    } else {
        not_found(id)
    }
}
