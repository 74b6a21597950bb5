use std::collections::HashMap;

use crate::models::PlayerId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    Click,
    Submit,
}

/// What a listener does when its event fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    RemovePlayer(PlayerId),
    ShowPlayerStats(PlayerId),
    SubmitNewPlayer,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Listener {
    pub kind: EventKind,
    pub action: Action,
}

/// A user interaction aimed at one element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Click {
        target: String,
    },
    /// Form submission with the submitted field values keyed by field name.
    Submit {
        target: String,
        fields: HashMap<String, String>,
    },
}

impl Event {
    #[must_use]
    pub const fn kind(&self) -> EventKind {
        match self {
            Self::Click { .. } => EventKind::Click,
            Self::Submit { .. } => EventKind::Submit,
        }
    }

    #[must_use]
    pub fn target(&self) -> &str {
        match self {
            Self::Click { target } | Self::Submit { target, .. } => target,
        }
    }
}
