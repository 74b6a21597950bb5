//! Everything that builds or reads elements of the page: roster cards, the new-player form,
//! the detail popup text and the HTML serialization handed to the browser.

pub mod detail;
pub mod form;
pub mod html;
pub mod render;

use crate::dom::{FORM_CONTAINER_ID, ROSTER_CONTAINER_ID};

/// The host page is missing a container the page expects to mount into.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("container #{0} is not on the page")]
pub struct MissingContainer(pub String);

/// Ids of the containers a page renders into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mounts {
    pub roster: String,
    pub form: String,
}

impl Default for Mounts {
    fn default() -> Self {
        Self {
            roster: ROSTER_CONTAINER_ID.to_string(),
            form: FORM_CONTAINER_ID.to_string(),
        }
    }
}
