//! Search state machine: owns the query, the page, and everything derived from
//! the last search outcome.
//!
//! Frontends never mutate the view state directly. Each input change returns an
//! optional [`FetchTicket`]; the frontend arms its debounce timer for that ticket
//! (cancelling any earlier timer), then calls [`SearchController::begin_fetch`]
//! when the timer fires and [`SearchController::finish`] with the outcome.
//!
//! Tickets carry a sequence number. Only the most recently issued ticket can
//! start a fetch or apply a response, so a slow response for a superseded query
//! never overwrites newer state.

use tracing::debug;

use crate::client::{SearchError, SearchRequest};
use crate::types::{Book, SearchResponse};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Blank query, nothing scheduled.
    Idle,
    /// Debounce timer running.
    Waiting,
    /// Request in flight.
    Fetching,
    /// Last request failed.
    Error,
    /// Last request succeeded.
    Done,
}

/// Handle for one debounce cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    seq: u64,
}

impl FetchTicket {
    pub fn seq(&self) -> u64 {
        self.seq
    }
}

#[derive(Debug, Clone)]
pub struct SearchController {
    query: String,
    page: u32,
    results: Vec<Book>,
    num_found: u64,
    loading: bool,
    error: Option<String>,
    selected: Option<usize>,
    phase: Phase,
    /// Sequence number of the latest ticket issued (or invalidation).
    seq: u64,
}

impl Default for SearchController {
    fn default() -> Self {
        Self {
            query: String::new(),
            page: 1,
            results: Vec::new(),
            num_found: 0,
            loading: false,
            error: None,
            selected: None,
            phase: Phase::Idle,
            seq: 0,
        }
    }
}

impl SearchController {
    pub fn new() -> Self {
        Self::default()
    }

    // -----------------------------------------------------------------------
    // Read access
    // -----------------------------------------------------------------------

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn results(&self) -> &[Book] {
        &self.results
    }

    pub fn num_found(&self) -> u64 {
        self.num_found
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn has_query(&self) -> bool {
        !self.query.trim().is_empty()
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected_book(&self) -> Option<&Book> {
        self.selected.and_then(|i| self.results.get(i))
    }

    // -----------------------------------------------------------------------
    // Input
    // -----------------------------------------------------------------------

    /// Replace the query. The page always goes back to 1.
    pub fn set_query(&mut self, text: impl Into<String>) -> Option<FetchTicket> {
        let text = text.into();
        if text == self.query && self.page == 1 {
            return None;
        }
        self.query = text;
        self.page = 1;
        self.trigger()
    }

    /// Blank the query (clear button).
    pub fn clear(&mut self) -> Option<FetchTicket> {
        self.set_query(String::new())
    }

    /// Move to `page`, clamped to at least 1.
    pub fn set_page(&mut self, page: u32) -> Option<FetchTicket> {
        let page = page.max(1);
        if page == self.page {
            return None;
        }
        self.page = page;
        self.trigger()
    }

    pub fn prev_page(&mut self) -> Option<FetchTicket> {
        self.set_page(self.page.saturating_sub(1))
    }

    /// No upper bound: past the last page the service returns no docs.
    pub fn next_page(&mut self) -> Option<FetchTicket> {
        self.set_page(self.page.saturating_add(1))
    }

    pub fn select(&mut self, index: Option<usize>) {
        self.selected = index.filter(|i| *i < self.results.len());
    }

    // -----------------------------------------------------------------------
    // Fetch cycle
    // -----------------------------------------------------------------------

    fn trigger(&mut self) -> Option<FetchTicket> {
        // Any change invalidates whatever ticket is outstanding.
        self.seq += 1;

        if !self.has_query() {
            self.results.clear();
            self.num_found = 0;
            self.error = None;
            self.loading = false;
            self.selected = None;
            self.phase = Phase::Idle;
            debug!(seq = self.seq, "Query blank, search state cleared");
            return None;
        }

        self.loading = true;
        self.error = None;
        self.phase = Phase::Waiting;
        debug!(query = self.query.as_str(), page = self.page, seq = self.seq, "Search scheduled");
        Some(FetchTicket { seq: self.seq })
    }

    fn is_current(&self, ticket: FetchTicket) -> bool {
        ticket.seq == self.seq
    }

    /// Debounce timer fired. Returns the request to send, or `None` when the
    /// ticket has been superseded.
    pub fn begin_fetch(&mut self, ticket: FetchTicket) -> Option<SearchRequest> {
        if !self.is_current(ticket) || self.phase != Phase::Waiting {
            debug!(seq = ticket.seq, latest = self.seq, "Skipping superseded search");
            return None;
        }
        self.phase = Phase::Fetching;
        Some(SearchRequest {
            query: self.query.clone(),
            page: self.page,
        })
    }

    /// Apply a search outcome. Returns `false` if the response was stale and
    /// was dropped.
    pub fn finish(
        &mut self,
        ticket: FetchTicket,
        outcome: Result<SearchResponse, SearchError>,
    ) -> bool {
        if !self.is_current(ticket) || self.phase != Phase::Fetching {
            debug!(seq = ticket.seq, latest = self.seq, "Discarding stale search response");
            return false;
        }

        self.loading = false;
        self.selected = None;
        match outcome {
            Ok(resp) => {
                self.results = resp.docs;
                self.num_found = resp.num_found;
                self.error = None;
                self.phase = Phase::Done;
            }
            Err(e) => {
                self.error = Some(e.to_string());
                self.results.clear();
                self.num_found = 0;
                self.phase = Phase::Error;
            }
        }
        true
    }
}
