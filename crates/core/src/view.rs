//! Presentation helpers shared by the desktop UI and the CLI.

use serde::Serialize;

use crate::controller::SearchController;
use crate::types::{cover_url_with_base, Book, CoverSize};

/// Authors shown on a result card.
pub const MAX_CARD_AUTHORS: usize = 2;

pub const EMPTY_STATE_MESSAGE: &str = "No results found. Try a different title.";

/// Text for one result card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookCard {
    pub key: String,
    pub title: String,
    pub authors: String,
    pub year: String,
    pub cover_url: Option<String>,
}

impl BookCard {
    pub fn from_book(book: &Book, covers_base: &str, size: CoverSize) -> Self {
        BookCard {
            key: book.key.clone(),
            title: book.title.clone(),
            authors: author_line(book),
            year: year_label(book),
            cover_url: cover_url_with_base(covers_base, book.cover_i, size),
        }
    }
}

/// Up to [`MAX_CARD_AUTHORS`] names joined with ", ".
pub fn author_line(book: &Book) -> String {
    book.authors()
        .iter()
        .take(MAX_CARD_AUTHORS)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

/// First publish year, or "-".
pub fn year_label(book: &Book) -> String {
    match book.first_publish_year {
        Some(year) => year.to_string(),
        None => "-".to_string(),
    }
}

/// Number of pages for `num_found` records, never less than 1.
pub fn total_pages(num_found: u64, page_size: u32) -> u64 {
    if page_size == 0 {
        return 1;
    }
    num_found.div_ceil(page_size as u64).max(1)
}

/// "Searching..." while loading, otherwise the match count.
pub fn status_line(c: &SearchController) -> String {
    if c.loading() {
        "Searching...".to_string()
    } else {
        format!("{} results", c.num_found())
    }
}

/// Whether to show the "no results" message.
pub fn show_empty_state(c: &SearchController) -> bool {
    !c.loading() && c.results().is_empty() && c.has_query()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: u32,
    pub total_pages: u64,
    pub prev_enabled: bool,
    /// Not bounded by `total_pages`; only loading disables it.
    pub next_enabled: bool,
}

impl Pagination {
    pub fn of(c: &SearchController, page_size: u32) -> Self {
        Pagination {
            page: c.page(),
            total_pages: total_pages(c.num_found(), page_size),
            prev_enabled: c.page() > 1 && !c.loading(),
            next_enabled: !c.loading(),
        }
    }

    pub fn label(&self) -> String {
        format!("Page {} of {}", self.page, self.total_pages)
    }
}
