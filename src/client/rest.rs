use async_trait::async_trait;
use reqwest::header::{self, HeaderMap, HeaderValue};
use reqwest::{Method, StatusCode};

use super::{ClientError, RosterApi, TransportError};
use crate::models::{Envelope, NewPlayerRequest, Player, PlayerData, PlayerId, RosterData};

const USER_AGENT: &str = concat!("puppy-bowl/", env!("CARGO_PKG_VERSION"));

/// `reqwest` client bound to one cohort's roster.
#[derive(Debug, Clone)]
pub struct PuppyBowlClient {
    http: reqwest::Client,
    roster_url: String,
}

impl PuppyBowlClient {
    /// Build a client for `roster_url` (`{api}/{cohort}/`).
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be constructed.
    pub fn new(roster_url: impl Into<String>) -> Result<Self, ClientError> {
        let mut default_headers = HeaderMap::new();
        default_headers.insert(header::USER_AGENT, HeaderValue::from_static(USER_AGENT));
        default_headers.insert(header::ACCEPT, HeaderValue::from_static("application/json"));
        let http = reqwest::Client::builder()
            .default_headers(default_headers)
            .build()?;
        Ok(Self::with_client(http, roster_url))
    }

    /// Wrap an existing `reqwest::Client`.
    #[must_use]
    pub fn with_client(http: reqwest::Client, roster_url: impl Into<String>) -> Self {
        let mut roster_url = roster_url.into();
        if !roster_url.ends_with('/') {
            roster_url.push('/');
        }
        Self { http, roster_url }
    }

    #[must_use]
    pub fn roster_url(&self) -> &str {
        &self.roster_url
    }

    fn players_url(&self) -> String {
        format!("{}players", self.roster_url)
    }

    fn player_url(&self, id: PlayerId) -> String {
        format!("{}players/{id}", self.roster_url)
    }

    /// One round trip; returns the status and the raw body.
    async fn round_trip(
        &self,
        method: Method,
        url: String,
        body: Option<&NewPlayerRequest>,
    ) -> Result<(StatusCode, String), ClientError> {
        let mut request = self.http.request(method, url);
        if let Some(body) = body {
            // `json` also sets `Content-Type: application/json`
            request = request.json(body);
        }
        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;
        Ok((status, body))
    }

    async fn envelope(
        &self,
        method: Method,
        url: String,
        body: Option<&NewPlayerRequest>,
    ) -> Result<Envelope, ClientError> {
        let (status, body) = self.round_trip(method, url, body).await?;
        parse_envelope(status, &body)
    }
}

/// Interpret a response body as an envelope.
///
/// A non-2xx status is a transport failure even when the body is a well-formed failure
/// envelope; the envelope's message is kept as the diagnostic.
fn parse_envelope(status: StatusCode, body: &str) -> Result<Envelope, ClientError> {
    if !status.is_success() {
        let message = serde_json::from_str::<Envelope>(body).map_or_else(
            |_| {
                status
                    .canonical_reason()
                    .unwrap_or("Network response was not ok")
                    .to_string()
            },
            |envelope| envelope.error_message(),
        );
        return Err(TransportError::Status {
            status: status.as_u16(),
            message,
        }
        .into());
    }

    Ok(serde_json::from_str(body)?)
}

#[async_trait]
impl RosterApi for PuppyBowlClient {
    async fn fetch_all_players(&self) -> Result<Vec<Player>, ClientError> {
        self.envelope(Method::GET, self.players_url(), None)
            .await
            .and_then(Envelope::into_data::<RosterData>)
            .map(|data| data.players)
            .inspect(|players| tracing::debug!(count = players.len(), "fetched roster"))
            .inspect_err(|error| tracing::warn!(%error, "trouble fetching players"))
    }

    async fn fetch_single_player(&self, id: PlayerId) -> Result<Player, ClientError> {
        self.envelope(Method::GET, self.player_url(id), None)
            .await
            .and_then(Envelope::into_data::<PlayerData>)
            .map(|data| data.player)
            .inspect_err(|error| tracing::warn!(player_id = id, %error, "trouble fetching player"))
    }

    async fn add_new_player(&self, request: &NewPlayerRequest) -> Result<Player, ClientError> {
        self.envelope(Method::POST, self.players_url(), Some(request))
            .await
            .and_then(Envelope::into_data::<PlayerData>)
            .map(|data| data.player)
            .inspect(|player| tracing::info!(player_id = player.id, name = %player.name, "player added"))
            .inspect_err(|error| {
                tracing::warn!(name = %request.name, %error, "something went wrong adding player");
            })
    }

    async fn remove_player(&self, id: PlayerId) -> Result<(), ClientError> {
        let result = match self.round_trip(Method::DELETE, self.player_url(id), None).await {
            Ok((status, body)) if status.is_success() && body.trim().is_empty() => Ok(()),
            Ok((status, body)) => {
                parse_envelope(status, &body).and_then(Envelope::into_ack)
            }
            Err(error) => Err(error),
        };

        result
            .inspect(|_| tracing::info!(player_id = id, "player removed from roster"))
            .inspect_err(|error| tracing::warn!(player_id = id, %error, "failed to delete player"))
    }
}
