//! Search panel — input field + status/pagination strip, and the debounced
//! fetch cycle that drives them.

mod metadata_strip;
mod search_input;

use bookfinder_core::{FetchTicket, SearchError, SearchRequest};
use dioxus::prelude::*;
use metadata_strip::MetadataStrip;
use search_input::SearchInput;
use tracing::warn;

use crate::state::*;

/// Search panel spanning the full width of the content area.
#[component]
pub fn SearchPanel() -> Element {
    rsx! {
        div {
            class: "search-panel",
            SearchInput {}
            MetadataStrip {}
        }
    }
}

/// Re-arm the debounce timer for `ticket`, cancelling the pending one.
/// `None` just cancels.
pub fn schedule_search(ticket: Option<FetchTicket>) {
    if let Some(task) = PENDING_TIMER.write().take() {
        task.cancel();
    }
    let Some(ticket) = ticket else {
        return;
    };

    let delay = debounce_delay();
    let task = spawn(async move {
        tokio::time::sleep(delay).await;
        let request = SEARCH.write().begin_fetch(ticket);
        *PENDING_TIMER.write() = None;
        if let Some(request) = request {
            // Separate task: re-arming the timer must not cancel a request in flight.
            spawn(run_fetch(ticket, request));
        }
    });
    *PENDING_TIMER.write() = Some(task);
}

async fn run_fetch(ticket: FetchTicket, request: SearchRequest) {
    let client = CORE.peek().as_ref().map(|ctx| ctx.client.clone());
    let outcome = match client {
        Some(client) => client.execute(&request).await,
        None => {
            warn!(query = request.query.as_str(), "No catalog client, failing search");
            Err(SearchError::Unavailable)
        }
    };
    SEARCH.write().finish(ticket, outcome);
}
