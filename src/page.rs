//! One page load: a document plus the flows its listeners trigger.
//!
//! Every flow follows the same shape: one API call, then either a scoped DOM patch or a
//! full re-fetch and re-render. Failures are logged and the page is left usable. The
//! document lock is only held while mutating, never across a network call.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::Mutex;
use uuid::Uuid;

use crate::client::RosterApi;
use crate::dom::{Action, Document, Event};
use crate::models::{Player, PlayerId};
use crate::ui::detail::player_stats_message;
use crate::ui::{Mounts, form, html, render};

pub struct Page {
    id: Uuid,
    api: Arc<dyn RosterApi>,
    document: Mutex<Document>,
    mounts: Mounts,
}

impl Page {
    /// A fresh host page with the well-known containers.
    #[must_use]
    pub fn new(api: Arc<dyn RosterApi>) -> Self {
        Self::with_document(api, Document::host_page(), Mounts::default())
    }

    #[must_use]
    pub fn with_document(api: Arc<dyn RosterApi>, document: Document, mounts: Mounts) -> Self {
        Self {
            id: Uuid::new_v4(),
            api,
            document: Mutex::new(document),
            mounts,
        }
    }

    #[must_use]
    pub const fn id(&self) -> Uuid {
        self.id
    }

    /// Copy of the current document.
    pub async fn snapshot(&self) -> Document {
        self.document.lock().await.clone()
    }

    /// Bootstrap: paint the roster if it loads, then always mount the form.
    pub async fn init(&self) {
        match self.api.fetch_all_players().await {
            Ok(players) => self.paint_roster(&players).await,
            Err(error) => {
                tracing::error!(page_id = %self.id, %error, "roster not loaded during initialization");
            }
        }

        let mut document = self.document.lock().await;
        if let Err(error) = form::render_new_player_form(&mut document, &self.mounts.form) {
            tracing::error!(page_id = %self.id, %error, "cannot mount new player form");
        }
    }

    /// Route an event to the listener attached on its target.
    ///
    /// Returns `false` when the target no longer exists or has no listener for the event.
    pub async fn dispatch(&self, event: Event) -> bool {
        let action = self
            .document
            .lock()
            .await
            .listener_for(event.target(), event.kind());

        let Some(action) = action else {
            tracing::debug!(page_id = %self.id, element = event.target(), kind = ?event.kind(), "no listener for event");
            return false;
        };

        match (action, &event) {
            (Action::RemovePlayer(id), _) => self.remove_player(id).await,
            (Action::ShowPlayerStats(id), _) => self.show_player_stats(id).await,
            (Action::SubmitNewPlayer, Event::Submit { fields, .. }) => {
                self.submit_new_player(fields).await;
            }
            (Action::SubmitNewPlayer, Event::Click { .. }) => return false,
        }
        true
    }

    /// Delete flow: on success drop only that player's card.
    pub async fn remove_player(&self, id: PlayerId) {
        match self.api.remove_player(id).await {
            Ok(()) => {
                let mut document = self.document.lock().await;
                if !render::remove_player_card(&mut document, id) {
                    tracing::debug!(page_id = %self.id, player_id = id, "card already gone");
                }
            }
            Err(error) => {
                tracing::error!(page_id = %self.id, player_id = id, %error, "trouble removing player from the roster");
            }
        }
    }

    /// Detail flow: one fetch, presented as a blocking alert. Nothing is shown on failure.
    pub async fn show_player_stats(&self, id: PlayerId) {
        match self.api.fetch_single_player(id).await {
            Ok(player) => {
                self.document
                    .lock()
                    .await
                    .alert(player_stats_message(&player));
            }
            Err(error) => {
                tracing::error!(page_id = %self.id, player_id = id, %error, "trouble fetching player details");
            }
        }
    }

    /// Form flow: add, then re-fetch and re-render whatever the add outcome was.
    pub async fn submit_new_player(&self, fields: &HashMap<String, String>) {
        let request = match form::read_new_player(fields) {
            Ok(request) => request,
            Err(error) => {
                tracing::warn!(page_id = %self.id, %error, "new player submission rejected");
                return;
            }
        };

        if let Err(error) = self.api.add_new_player(&request).await {
            tracing::error!(page_id = %self.id, name = %request.name, %error, "something went wrong adding that player");
        }

        self.refresh_roster().await;
    }

    /// Full re-fetch and re-render. A failed fetch keeps the current cards.
    pub async fn refresh_roster(&self) {
        match self.api.fetch_all_players().await {
            Ok(players) => self.paint_roster(&players).await,
            Err(error) => {
                tracing::error!(page_id = %self.id, %error, "trouble refreshing the roster");
            }
        }
    }

    async fn paint_roster(&self, players: &[Player]) {
        let mut document = self.document.lock().await;
        match render::render_all_players(&mut document, &self.mounts.roster, players) {
            Ok(()) => tracing::debug!(page_id = %self.id, count = players.len(), "roster rendered"),
            Err(error) => tracing::error!(page_id = %self.id, %error, "cannot render roster"),
        }
    }

    /// Serialize the page for the browser, showing and draining pending alerts.
    pub async fn render_html(&self, base: &str) -> String {
        let mut document = self.document.lock().await;
        let alerts = document.take_alerts();
        html::render_page(&document, &alerts, base)
    }
}
