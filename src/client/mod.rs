//! Client side of the Puppy Bowl API.
//!
//! [`RosterApi`] is the seam every page flow talks through; [`PuppyBowlClient`] is the
//! `reqwest` implementation used by the binary.

mod rest;

use async_trait::async_trait;

pub use rest::PuppyBowlClient;

use crate::models::{NewPlayerRequest, Player, PlayerId};

/// Failure of a single API round trip.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// Network failure or non-2xx status.
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),
    /// 2xx response whose envelope reports `success: false`.
    #[error("remote error: {0}")]
    Remote(String),
    /// Body is not the expected envelope.
    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("network failure: {0}")]
    Network(#[from] reqwest::Error),
    #[error("unexpected status {status}: {message}")]
    Status { status: u16, message: String },
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(TransportError::Network(err))
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        Self::MalformedResponse(err.to_string())
    }
}

/// The four remote roster operations.
#[async_trait]
pub trait RosterApi: Send + Sync {
    /// `GET /players`, in server order.
    async fn fetch_all_players(&self) -> Result<Vec<Player>, ClientError>;

    /// `GET /players/{id}`.
    async fn fetch_single_player(&self, id: PlayerId) -> Result<Player, ClientError>;

    /// `POST /players`, returning the player the server created.
    async fn add_new_player(&self, request: &NewPlayerRequest) -> Result<Player, ClientError>;

    /// `DELETE /players/{id}`.
    async fn remove_player(&self, id: PlayerId) -> Result<(), ClientError>;
}
