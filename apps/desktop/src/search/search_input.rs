//! Hero search input component with debounced search.

use dioxus::prelude::*;

use super::schedule_search;
use crate::state::*;

#[component]
pub fn SearchInput() -> Element {
    let search = SEARCH.read();
    let query = search.query().to_string();
    let has_query = search.has_query();

    rsx! {
        div {
            class: if has_query { "search-field has-query" } else { "search-field" },

            // Input row
            div {
                class: "search-input-row",

                // Search icon
                svg {
                    class: "search-icon",
                    width: "16",
                    height: "16",
                    view_box: "0 0 24 24",
                    fill: "none",
                    stroke: "currentColor",
                    stroke_width: "2",
                    circle { cx: "11", cy: "11", r: "8" }
                    line { x1: "21", y1: "21", x2: "16.65", y2: "16.65" }
                }

                input {
                    class: "search-input",
                    r#type: "text",
                    placeholder: "Search by book title (e.g. 'Pride and Prejudice')",
                    value: "{query}",
                    autofocus: true,
                    oninput: move |e: Event<FormData>| {
                        let ticket = SEARCH.write().set_query(e.value());
                        schedule_search(ticket);
                    },
                }

                // Clear button
                if has_query {
                    button {
                        class: "search-clear",
                        title: "Clear",
                        onclick: move |_| {
                            let ticket = SEARCH.write().clear();
                            schedule_search(ticket);
                        },
                        "\u{00D7}"
                    }
                }
            }

            div {
                class: "search-help",
                strong { "Tip:" }
                " Try \"harry potter\", \"tolkien\", or \"machine learning\"."
            }
        }
    }
}
