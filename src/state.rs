use std::sync::Arc;

use crate::client::RosterApi;
use crate::config::Config;
use crate::pages::PageRegistry;

/// Shared application state available to all request handlers via Axum's `State` extractor.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub api: Arc<dyn RosterApi>,
    pub pages: PageRegistry,
}
