//! Roster cards.

use super::MissingContainer;
use crate::dom::{Action, Document, Element, EventKind};
use crate::models::{Player, PlayerId};

pub const CARD_CLASS: &str = "player-card";
pub const DELETE_CLASS: &str = "delete-btn";

/// Element id of a player's card.
#[must_use]
pub fn card_id(id: PlayerId) -> String {
    format!("player-{id}")
}

#[must_use]
pub fn image_id(id: PlayerId) -> String {
    format!("player-{id}-image")
}

#[must_use]
pub fn delete_button_id(id: PlayerId) -> String {
    format!("player-{id}-delete")
}

/// Build one card with its listeners attached.
///
/// This is the only place card listeners are wired, whichever path renders the card.
#[must_use]
pub fn player_card(player: &Player) -> Element {
    let mut card = Element::new("div")
        .with_id(card_id(player.id))
        .with_class(CARD_CLASS)
        .with_child(Element::new("h3").with_text(&player.name));

    if let Some(image_url) = &player.image_url {
        card.append_child(
            Element::new("img")
                .with_id(image_id(player.id))
                .with_attribute("src", image_url)
                .with_attribute("alt", format!("Image of {}", player.name))
                .with_listener(EventKind::Click, Action::ShowPlayerStats(player.id)),
        );
    }

    card.with_child(
        Element::new("button")
            .with_id(delete_button_id(player.id))
            .with_class(DELETE_CLASS)
            .with_attribute("data-player-id", player.id.to_string())
            .with_text("Delete")
            .with_listener(EventKind::Click, Action::RemovePlayer(player.id)),
    )
}

/// Replace the roster container's contents with one card per player, in input order.
///
/// # Errors
///
/// [`MissingContainer`] if `container` is not on the page; nothing is touched then.
pub fn render_all_players(
    document: &mut Document,
    container: &str,
    players: &[Player],
) -> Result<(), MissingContainer> {
    let surface = document
        .get_element_by_id_mut(container)
        .ok_or_else(|| MissingContainer(container.to_string()))?;

    surface.clear_children();
    for player in players {
        surface.append_child(player_card(player));
    }
    Ok(())
}

/// Remove a single card, leaving every other card in place.
pub fn remove_player_card(document: &mut Document, id: PlayerId) -> bool {
    document.remove_element(&card_id(id)).is_some()
}
