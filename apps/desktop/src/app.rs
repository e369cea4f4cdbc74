//! Root application component — header, search panel, results + detail split.

use dioxus::prelude::*;

use crate::detail::DetailPanel;
use crate::results::ResultsPanel;
use crate::search::SearchPanel;
use crate::state::*;
use crate::INITIAL_STATE;

static VARIABLES_CSS: Asset = asset!("/assets/styles/variables.css");
static APP_CSS: Asset = asset!("/assets/styles/app.css");

#[component]
pub fn App() -> Element {
    use_hook(|| {
        let initial = INITIAL_STATE.lock().ok().and_then(|mut slot| slot.take());
        if let Some(ctx) = initial {
            *CORE.write() = Some(ctx);
        }
    });

    rsx! {
        document::Stylesheet { href: VARIABLES_CSS }
        document::Stylesheet { href: APP_CSS }

        div {
            class: "app-shell",

            header {
                class: "app-header",
                h1 { class: "app-title", "Book Finder" }
                p { class: "app-subtitle", "Search books using Open Library" }
            }

            main {
                class: "content-area",

                SearchPanel {}

                div {
                    class: "split-panel",
                    ResultsPanel {}
                    DetailPanel {}
                }
            }

            StatusBar {}
        }
    }
}

/// Status bar at the bottom of the app
#[component]
fn StatusBar() -> Element {
    let search = SEARCH.read();
    let host = CORE
        .read()
        .as_ref()
        .map(|ctx| ctx.config.search_url.clone())
        .unwrap_or_else(|| "not connected".to_string());
    let shown = search.results().len();

    rsx! {
        div {
            class: "statusbar",
            span { class: "statusbar-source", "{host}" }
            if search.has_query() {
                span { class: "statusbar-sep", "|" }
                span { class: "statusbar-results", "{shown} shown of {search.num_found()}" }
            }
        }
    }
}
