//! Detail panel — larger cover and full metadata for the selected card.

mod info;

use bookfinder_core::CoverSize;
use dioxus::prelude::*;

use crate::results::CoverImage;
use crate::state::*;
use info::BookInfo;

/// Detail panel — shows the selected book, or a hint when nothing is selected.
#[component]
pub fn DetailPanel() -> Element {
    let search = SEARCH.read();
    let covers = covers_base();

    match search.selected_book().cloned() {
        Some(book) => {
            let cover =
                bookfinder_core::types::cover_url_with_base(&covers, book.cover_i, CoverSize::Large);
            rsx! {
                div {
                    class: "detail-panel",

                    div {
                        class: "detail-header",
                        span { class: "detail-key", "{book.key}" }
                        button {
                            class: "detail-close",
                            title: "Close",
                            onclick: move |_| SEARCH.write().select(None),
                            "\u{00D7}"
                        }
                    }

                    div {
                        class: "detail-cover",
                        CoverImage { url: cover, title: book.title.clone() }
                    }

                    BookInfo { book }
                }
            }
        }
        None => {
            rsx! {
                div {
                    class: "detail-panel detail-empty",
                    div {
                        class: "detail-empty-content",
                        svg {
                            width: "48",
                            height: "48",
                            view_box: "0 0 24 24",
                            fill: "none",
                            stroke: "currentColor",
                            stroke_width: "1",
                            opacity: "0.3",
                            path { d: "M4 19.5A2.5 2.5 0 016.5 17H20" }
                            path { d: "M6.5 2H20v20H6.5A2.5 2.5 0 014 19.5v-15A2.5 2.5 0 016.5 2z" }
                        }
                        span { "Select a book to see details" }
                    }
                }
            }
        }
    }
}
