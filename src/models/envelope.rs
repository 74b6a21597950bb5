//! The `{ success, data, error }` wrapper around every Puppy Bowl response.

use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::client::ClientError;
use crate::models::Player;

/// Message used when a failure envelope carries no diagnostic of its own.
pub const UNKNOWN_ERROR: &str = "Unknown error occurred";

/// Response wrapper. `data` is only meaningful when `success` is true, so it stays raw JSON
/// until [`Envelope::into_data`] has checked the flag.
#[derive(Debug, Deserialize)]
pub struct Envelope {
    pub success: bool,
    #[serde(default)]
    pub data: Option<Value>,
    #[serde(default)]
    pub error: Option<ErrorBody>,
}

/// Diagnostic attached to a failure envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// `data` of the list-players call.
#[derive(Debug, Deserialize)]
pub struct RosterData {
    pub players: Vec<Player>,
}

/// `data` of the single-player calls. Creation answers with `newPlayer`.
#[derive(Debug, Deserialize)]
pub struct PlayerData {
    #[serde(alias = "newPlayer")]
    pub player: Player,
}

impl Envelope {
    /// Server-supplied message, or the generic one.
    #[must_use]
    pub fn error_message(&self) -> String {
        self.error
            .as_ref()
            .and_then(|e| e.message.clone())
            .unwrap_or_else(|| UNKNOWN_ERROR.to_string())
    }

    /// Check `success` before handing out `data`.
    ///
    /// # Errors
    ///
    /// [`ClientError::Remote`] if the envelope reports failure,
    /// [`ClientError::MalformedResponse`] if a success envelope has no payload or the payload
    /// does not have the shape of `T`.
    pub fn into_data<T: DeserializeOwned>(self) -> Result<T, ClientError> {
        if !self.success {
            return Err(ClientError::Remote(self.error_message()));
        }
        let data = self
            .data
            .ok_or_else(|| ClientError::MalformedResponse("success envelope without data".into()))?;
        Ok(serde_json::from_value(data)?)
    }

    /// Like [`Envelope::into_data`] for calls whose payload is irrelevant.
    ///
    /// # Errors
    ///
    /// [`ClientError::Remote`] if the envelope reports failure.
    pub fn into_ack(self) -> Result<(), ClientError> {
        if self.success {
            Ok(())
        } else {
            Err(ClientError::Remote(self.error_message()))
        }
    }
}
