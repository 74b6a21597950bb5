//! Registry of open pages.
//!
//! Each browser visit to `/` opens a page whose document lives here until it is closed,
//! evicted as the least recently seen page when the registry is full, or swept after sitting
//! idle. A served page has no way to announce its unload, so the last two are what bound the
//! registry.

use std::sync::Arc;
use std::time::{Duration, Instant};

use dashmap::DashMap;
use tokio::task::JoinHandle;
use uuid::Uuid;

use crate::client::RosterApi;
use crate::page::Page;

pub const DEFAULT_MAX_PAGES: usize = 256;
pub const DEFAULT_IDLE_TIMEOUT: Duration = Duration::from_secs(30 * 60);

struct OpenPage {
    page: Arc<Page>,
    last_seen: Instant,
}

#[derive(Clone)]
pub struct PageRegistry {
    pages: Arc<DashMap<Uuid, OpenPage>>,
    max_pages: usize,
    idle_timeout: Duration,
}

impl Default for PageRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl PageRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::with_limits(DEFAULT_MAX_PAGES, DEFAULT_IDLE_TIMEOUT)
    }

    /// Registry holding at most `max_pages` pages (at least one), each forgotten once it has
    /// not been requested for `idle_timeout`.
    #[must_use]
    pub fn with_limits(max_pages: usize, idle_timeout: Duration) -> Self {
        Self {
            pages: Arc::new(DashMap::new()),
            max_pages: max_pages.max(1),
            idle_timeout,
        }
    }

    /// Open a page, run its bootstrap and register it.
    pub async fn open(&self, api: Arc<dyn RosterApi>) -> Arc<Page> {
        self.sweep_idle();

        let page = Arc::new(Page::new(api));
        page.init().await;
        self.pages.insert(
            page.id(),
            OpenPage {
                page: page.clone(),
                last_seen: Instant::now(),
            },
        );

        while self.pages.len() > self.max_pages {
            if !self.evict_least_recent() {
                break;
            }
        }

        tracing::info!(page_id = %page.id(), open_pages = self.pages.len(), "page opened");
        page
    }

    /// Look a page up and mark it as seen.
    #[must_use]
    pub fn get(&self, id: Uuid) -> Option<Arc<Page>> {
        self.pages.get_mut(&id).map(|mut entry| {
            entry.last_seen = Instant::now();
            entry.page.clone()
        })
    }

    /// Forget a page. Returns whether it was open.
    pub fn close(&self, id: Uuid) -> bool {
        let closed = self.pages.remove(&id).is_some();
        if closed {
            tracing::info!(page_id = %id, "page closed");
        }
        closed
    }

    /// Drop every page not seen within the idle timeout. Returns how many went.
    pub fn sweep_idle(&self) -> usize {
        let before = self.pages.len();
        self.pages
            .retain(|_, entry| entry.last_seen.elapsed() < self.idle_timeout);
        let swept = before.saturating_sub(self.pages.len());
        if swept > 0 {
            tracing::info!(swept, open_pages = self.pages.len(), "idle pages swept");
        }
        swept
    }

    /// Sweep idle pages every `period` until the runtime shuts down.
    pub fn spawn_sweeper(&self, period: Duration) -> JoinHandle<()> {
        let registry = self.clone();
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(period);
            loop {
                ticker.tick().await;
                registry.sweep_idle();
            }
        })
    }

    fn evict_least_recent(&self) -> bool {
        let oldest = self
            .pages
            .iter()
            .min_by_key(|entry| entry.value().last_seen)
            .map(|entry| *entry.key());

        let Some(id) = oldest else {
            return false;
        };
        let evicted = self.pages.remove(&id).is_some();
        if evicted {
            tracing::info!(page_id = %id, "page evicted, registry full");
        }
        evicted
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}

impl std::fmt::Debug for PageRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PageRegistry")
            .field("open_pages", &self.pages.len())
            .field("max_pages", &self.max_pages)
            .field("idle_timeout", &self.idle_timeout)
            .finish()
    }
}
