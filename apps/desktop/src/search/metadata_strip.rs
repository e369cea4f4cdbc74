//! Metadata strip showing the result count and pagination controls.

use bookfinder_core::view::{status_line, Pagination};
use dioxus::prelude::*;

use super::schedule_search;
use crate::state::*;

#[component]
pub fn MetadataStrip() -> Element {
    let search = SEARCH.read();
    let status = status_line(&search);
    let pagination = Pagination::of(&search, page_size());

    rsx! {
        div {
            class: "metadata-strip",
            span {
                class: if search.loading() { "metadata-count loading" } else { "metadata-count" },
                "{status}"
            }
            div {
                class: "pager",
                button {
                    class: "pager-btn",
                    disabled: !pagination.prev_enabled,
                    onclick: move |_| {
                        let ticket = SEARCH.write().prev_page();
                        schedule_search(ticket);
                    },
                    "Prev"
                }
                span { class: "pager-label", "{pagination.label()}" }
                button {
                    class: "pager-btn",
                    disabled: !pagination.next_enabled,
                    onclick: move |_| {
                        let ticket = SEARCH.write().next_page();
                        schedule_search(ticket);
                    },
                    "Next"
                }
            }
        }
    }
}
