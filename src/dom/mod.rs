//! In-memory display surface.
//!
//! A [`Document`] is the page a user is looking at: a tree of [`Element`]s, some carrying
//! listeners, plus a queue of pending blocking alerts. It is a derived view of the remote
//! roster and is never authoritative.

mod element;
mod event;

pub use element::Element;
pub use event::{Action, Event, EventKind, Listener};

/// Container the roster cards are rendered into.
pub const ROSTER_CONTAINER_ID: &str = "all-players-container";
/// Container the new-player form is mounted into.
pub const FORM_CONTAINER_ID: &str = "new-player-form";

#[derive(Debug, Clone)]
pub struct Document {
    body: Element,
    alerts: Vec<String>,
}

impl Document {
    /// An empty document.
    #[must_use]
    pub fn new() -> Self {
        Self {
            body: Element::new("body"),
            alerts: Vec::new(),
        }
    }

    /// The host page: a heading plus the two well-known, initially empty containers.
    #[must_use]
    pub fn host_page() -> Self {
        let body = Element::new("body")
            .with_child(Element::new("h1").with_text("Puppy Bowl"))
            .with_child(Element::new("div").with_id(FORM_CONTAINER_ID))
            .with_child(Element::new("div").with_id(ROSTER_CONTAINER_ID));
        Self {
            body,
            alerts: Vec::new(),
        }
    }

    #[must_use]
    pub const fn body(&self) -> &Element {
        &self.body
    }

    #[must_use]
    pub fn get_element_by_id(&self, id: &str) -> Option<&Element> {
        self.body.find(id)
    }

    pub fn get_element_by_id_mut(&mut self, id: &str) -> Option<&mut Element> {
        self.body.find_mut(id)
    }

    /// Detach the element with `id` (and its subtree, listeners included).
    pub fn remove_element(&mut self, id: &str) -> Option<Element> {
        self.body.remove_descendant(id)
    }

    #[must_use]
    pub fn elements_by_class(&self, class: &str) -> Vec<&Element> {
        let mut found = Vec::new();
        self.body.collect_by_class(class, &mut found);
        found
    }

    /// The action bound to `kind` on element `target`, if both exist.
    #[must_use]
    pub fn listener_for(&self, target: &str, kind: EventKind) -> Option<Action> {
        self.get_element_by_id(target)?
            .listeners()
            .iter()
            .find(|listener| listener.kind == kind)
            .map(|listener| listener.action)
    }

    /// Queue a blocking notification for the user.
    pub fn alert(&mut self, message: impl Into<String>) {
        self.alerts.push(message.into());
    }

    #[must_use]
    pub fn alerts(&self) -> &[String] {
        &self.alerts
    }

    /// Drain pending notifications once they have been shown.
    pub fn take_alerts(&mut self) -> Vec<String> {
        std::mem::take(&mut self.alerts)
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}
