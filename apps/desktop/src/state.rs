//! Global application state using Dioxus signals.

use std::time::Duration;

use bookfinder_core::config::DEFAULT_DEBOUNCE_MS;
use bookfinder_core::{CatalogClient, Config, SearchController};
use dioxus::core::Task;
use dioxus::prelude::*;

/// Configuration and HTTP client — built once before launch.
#[derive(Clone)]
pub struct AppContext {
    pub config: Config,
    pub client: CatalogClient,
}

impl AppContext {
    pub fn new(config: Config) -> Result<Self, bookfinder_core::SearchError> {
        let client = CatalogClient::new(&config)?;
        Ok(AppContext { config, client })
    }
}

// ---------------------------------------------------------------------------
// Global signals
// ---------------------------------------------------------------------------

/// Set once on first render from the pre-launch context.
pub static CORE: GlobalSignal<Option<AppContext>> = Signal::global(|| None);

/// Query, page, results and fetch phase. Only mutated through controller methods.
pub static SEARCH: GlobalSignal<SearchController> = Signal::global(SearchController::new);

/// Pending debounce timer. At most one at a time.
pub static PENDING_TIMER: GlobalSignal<Option<Task>> = Signal::global(|| None);

// ---------------------------------------------------------------------------
// Accessors
// ---------------------------------------------------------------------------

pub fn debounce_delay() -> Duration {
    CORE.peek()
        .as_ref()
        .map(|ctx| ctx.config.debounce())
        .unwrap_or(Duration::from_millis(DEFAULT_DEBOUNCE_MS))
}

pub fn page_size() -> u32 {
    CORE.read()
        .as_ref()
        .map(|ctx| ctx.config.page_size)
        .unwrap_or(bookfinder_core::config::DEFAULT_PAGE_SIZE)
}

pub fn covers_base() -> String {
    CORE.read()
        .as_ref()
        .map(|ctx| ctx.config.covers_url.clone())
        .unwrap_or_else(|| bookfinder_core::types::DEFAULT_COVERS_URL.to_string())
}
