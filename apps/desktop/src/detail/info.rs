//! Metadata list for a single book.

use bookfinder_core::view::year_label;
use bookfinder_core::Book;
use dioxus::prelude::*;

#[component]
pub fn BookInfo(book: Book) -> Element {
    let authors = book.authors().to_vec();
    let year = year_label(&book);
    let work_url = book.work_url();

    rsx! {
        div {
            class: "detail-info",
            h2 { class: "detail-title", "{book.title}" }

            dl {
                class: "detail-fields",
                dt { "Authors" }
                dd {
                    if authors.is_empty() {
                        span { class: "detail-missing", "Unknown" }
                    }
                    for name in authors {
                        div { class: "detail-author", "{name}" }
                    }
                }
                dt { "First published" }
                dd { "{year}" }
                dt { "Open Library" }
                dd {
                    a { href: "{work_url}", target: "_blank", "{work_url}" }
                }
            }
        }
    }
}
