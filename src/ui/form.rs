//! The new-player form.

use std::collections::HashMap;

use super::MissingContainer;
use crate::dom::{Action, Document, Element, EventKind};
use crate::models::NewPlayerRequest;

pub const FORM_ID: &str = "add-player";
pub const NAME_FIELD: &str = "player-name";
pub const BREED_FIELD: &str = "player-breed";
pub const STATS_FIELD: &str = "player-stats";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("field `{0}` is required")]
    MissingField(&'static str),
}

fn labelled_field(tag: &str, name: &str, label: &str) -> [Element; 2] {
    let label = Element::new("label")
        .with_attribute("for", name)
        .with_text(label);
    let mut field = Element::new(tag)
        .with_id(name)
        .with_attribute("name", name);
    if tag == "input" {
        field.set_attribute("type", "text");
    }
    [label, field.with_attribute("required", "")]
}

/// `form#add-player` with its submit listener attached.
#[must_use]
pub fn new_player_form() -> Element {
    let mut form = Element::new("form")
        .with_id(FORM_ID)
        .with_listener(EventKind::Submit, Action::SubmitNewPlayer);

    for child in [
        labelled_field("input", NAME_FIELD, "Name:"),
        labelled_field("input", BREED_FIELD, "Breed:"),
        labelled_field("textarea", STATS_FIELD, "Stats:"),
    ]
    .into_iter()
    .flatten()
    {
        form.append_child(child);
    }

    form.with_child(
        Element::new("button")
            .with_attribute("type", "submit")
            .with_text("Add Player"),
    )
}

/// Mount the form into `container`, replacing whatever was there.
///
/// # Errors
///
/// [`MissingContainer`] if `container` is not on the page.
pub fn render_new_player_form(
    document: &mut Document,
    container: &str,
) -> Result<(), MissingContainer> {
    let surface = document
        .get_element_by_id_mut(container)
        .ok_or_else(|| MissingContainer(container.to_string()))?;
    surface.clear_children();
    surface.append_child(new_player_form());
    Ok(())
}

/// Assemble the request from submitted field values. Every field is required.
///
/// # Errors
///
/// [`FormError::MissingField`] for the first absent or blank field.
pub fn read_new_player(fields: &HashMap<String, String>) -> Result<NewPlayerRequest, FormError> {
    let field = |name: &'static str| {
        fields
            .get(name)
            .filter(|value| !value.trim().is_empty())
            .cloned()
            .ok_or(FormError::MissingField(name))
    };

    Ok(NewPlayerRequest {
        name: field(NAME_FIELD)?,
        breed: field(BREED_FIELD)?,
        stats: field(STATS_FIELD)?,
    })
}
