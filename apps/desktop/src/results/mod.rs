//! Results panel — error banner, empty state, card grid, loading indicator.

mod book_card;

pub use book_card::CoverImage;

use bookfinder_core::view::{show_empty_state, BookCard, EMPTY_STATE_MESSAGE};
use dioxus::prelude::*;

use crate::state::*;
use book_card::BookCardView;

#[component]
pub fn ResultsPanel() -> Element {
    let search = SEARCH.read();
    let covers = covers_base();
    let size = CORE
        .read()
        .as_ref()
        .map(|ctx| ctx.config.cover_size)
        .unwrap_or_default();
    let selected = search.selected();
    let error = search.error().map(str::to_string);
    let cards: Vec<BookCard> = search
        .results()
        .iter()
        .map(|b| BookCard::from_book(b, &covers, size))
        .collect();
    // Keyed by work so a new page never reuses the previous page's nodes.
    let keyed: Vec<(usize, String, BookCard)> = cards
        .into_iter()
        .enumerate()
        .map(|(i, card)| (i, card.key.clone(), card))
        .collect();

    if !search.has_query() && keyed.is_empty() {
        return rsx! {
            div {
                class: "results-panel results-idle",
                span { "Type a title to search..." }
            }
        };
    }

    rsx! {
        div {
            class: "results-panel",

            {error.map(|err| rsx! {
                div { class: "error-banner", "Error: {err}" }
            })}

            if show_empty_state(&search) {
                div { class: "empty-state", "{EMPTY_STATE_MESSAGE}" }
            }

            div {
                class: "results-grid",
                for (i, key, card) in keyed {
                    BookCardView {
                        key: "{key}",
                        index: i,
                        selected: selected == Some(i),
                        card,
                    }
                }
            }

            if search.loading() {
                div { class: "loading-indicator", "Loading..." }
            }
        }
    }
}
