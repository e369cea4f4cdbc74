//! Result card and cover image components.

use bookfinder_core::view::BookCard;
use dioxus::prelude::*;

use crate::state::*;

#[component]
pub fn BookCardView(index: usize, selected: bool, card: BookCard) -> Element {
    rsx! {
        div {
            class: if selected { "book-card active" } else { "book-card" },
            onclick: move |_| {
                SEARCH.write().select(Some(index));
            },
            div {
                class: "cover-wrapper",
                CoverImage { url: card.cover_url.clone(), title: card.title.clone() }
            }
            div {
                class: "card-body",
                div { class: "book-title", "{card.title}" }
                div { class: "book-meta", "{card.authors}" }
                div { class: "book-meta-small", "First published: {card.year}" }
            }
        }
    }
}

/// Cover scaled to fit its box, or a placeholder when the book has none.
#[component]
pub fn CoverImage(url: Option<String>, title: String) -> Element {
    match url {
        Some(src) => rsx! {
            img { class: "cover", src: "{src}", alt: "{title}" }
        },
        None => rsx! {
            div { class: "no-cover", "No cover" }
        },
    }
}
