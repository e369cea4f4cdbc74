//! Book Finder Desktop — Dioxus-powered Open Library search.

use std::path::Path;
use std::sync::Mutex;

use bookfinder_core::config::{Config, CONFIG_FILE_NAME};
use dioxus::prelude::*;
use tracing::{error, info};

mod app;
mod detail;
mod results;
mod search;
mod state;

use app::App;
use state::AppContext;

/// Pre-runtime storage — built before Dioxus launches, consumed on first render.
pub static INITIAL_STATE: Mutex<Option<AppContext>> = Mutex::new(None);

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("bookfinder=info".parse().unwrap()),
        )
        .with_target(false)
        .init();

    let config = Config::load_or_default(Path::new(CONFIG_FILE_NAME));
    info!(search_url = config.search_url.as_str(), debounce_ms = config.debounce_ms, "Starting Book Finder");

    let context = match AppContext::new(config) {
        Ok(ctx) => ctx,
        Err(e) => {
            error!(error = %e, "Could not create HTTP client");
            std::process::exit(1);
        }
    };
    if let Ok(mut slot) = INITIAL_STATE.lock() {
        *slot = Some(context);
    }

    #[cfg(feature = "desktop")]
    {
        use dioxus::desktop::{Config, LogicalSize, WindowBuilder};

        LaunchBuilder::new()
            .with_cfg(
                Config::default()
                    .with_menu(None)
                    .with_background_color((245, 245, 247, 255))
                    .with_disable_context_menu(true)
                    .with_window(
                        WindowBuilder::new()
                            .with_title("Book Finder")
                            .with_inner_size(LogicalSize::new(1100.0, 800.0))
                            .with_min_inner_size(LogicalSize::new(640.0, 480.0))
                            .with_resizable(true)
                            .with_decorations(true),
                    ),
            )
            .launch(App);
    }

    #[cfg(not(feature = "desktop"))]
    {
        dioxus::launch(App);
    }
}
