pub mod envelope;
pub mod player;

pub use envelope::{Envelope, ErrorBody, PlayerData, RosterData, UNKNOWN_ERROR};
pub use player::{NewPlayerRequest, Player, PlayerId};
