//! Book Finder CLI — search Open Library by title from the terminal.
//!
//! Runs the same search state machine as the desktop app, minus the debounce.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use bookfinder_core::view::{show_empty_state, BookCard, Pagination, EMPTY_STATE_MESSAGE};
use bookfinder_core::{CatalogClient, Config, CoverSize, SearchController};

/// Book Finder CLI — title search against the Open Library catalog.
#[derive(Parser)]
#[command(name = "bf", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output as JSON instead of human-readable text
    #[arg(long, global = true)]
    json: bool,

    /// Load settings from a TOML config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Search books by title
    Search {
        /// Title to search for (sent as typed)
        title: String,

        /// Result page (1-indexed)
        #[arg(long, default_value = "1")]
        page: u32,
    },
    /// Print the cover image URL for a cover id
    Cover {
        /// Cover identifier (`cover_i` in search results)
        id: i64,

        /// Cover size: S, M or L
        #[arg(long, default_value = "M")]
        size: CoverSize,
    },
}

fn load_config(path: Option<&PathBuf>) -> Config {
    match path {
        Some(p) => Config::load(p).unwrap_or_else(|e| {
            eprintln!("Could not load config: {e}");
            std::process::exit(1);
        }),
        None => Config::default(),
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("bookfinder=warn".parse().unwrap()),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_ref());

    match cli.command {
        Commands::Search { title, page } => run_search(&config, &title, page, cli.json).await,
        Commands::Cover { id, size } => {
            let client = CatalogClient::new(&config).unwrap_or_else(|e| {
                eprintln!("Error: {e}");
                std::process::exit(1);
            });
            if let Some(url) = client.cover_url(Some(id), size) {
                if cli.json {
                    println!("{}", serde_json::json!({ "id": id, "size": size, "url": url }));
                } else {
                    println!("{url}");
                }
            }
        }
    }
}

async fn run_search(config: &Config, title: &str, page: u32, json: bool) {
    let client = CatalogClient::new(config).unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });

    let mut controller = SearchController::new();
    let mut ticket = controller.set_query(title);
    if page > 1 {
        ticket = controller.set_page(page).or(ticket);
    }
    let Some(ticket) = ticket else {
        eprintln!("Nothing to search for: the title is blank");
        std::process::exit(1);
    };
    let Some(request) = controller.begin_fetch(ticket) else {
        return;
    };
    let outcome = client.execute(&request).await;
    controller.finish(ticket, outcome);

    if let Some(err) = controller.error() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }

    let cards: Vec<BookCard> = controller
        .results()
        .iter()
        .map(|b| BookCard::from_book(b, &config.covers_url, config.cover_size))
        .collect();
    let pagination = Pagination::of(&controller, config.page_size);

    if json {
        let output = serde_json::json!({
            "query": controller.query(),
            "page": pagination.page,
            "total_pages": pagination.total_pages,
            "num_found": controller.num_found(),
            "results": cards,
        });
        println!("{}", serde_json::to_string_pretty(&output).unwrap_or_default());
    }

    if let Some(code) = no_results_exit(&controller) {
        eprintln!("{EMPTY_STATE_MESSAGE}");
        std::process::exit(code);
    }
    if json {
        return;
    }

    for card in &cards {
        if card.authors.is_empty() {
            println!("{} ({})", card.title, card.year);
        } else {
            println!("{} — {} ({})", card.title, card.authors, card.year);
        }
        match &card.cover_url {
            Some(url) => println!("    {url}"),
            None => println!("    no cover"),
        }
    }
    eprintln!(
        "\n{} results \u{00B7} {}",
        controller.num_found(),
        pagination.label().to_lowercase()
    );
}

/// Exit status for a settled search with nothing to show, in either output mode.
fn no_results_exit(controller: &SearchController) -> Option<i32> {
    show_empty_state(controller).then_some(1)
}
