//! Book Finder core — title search against the Open Library catalog.
//!
//! Everything here is independent of the UI toolkit:
//!
//! - [`types`] — search results, response envelope, cover URLs
//! - [`client`] — HTTP search client and its error type
//! - [`controller`] — query/page state machine with debounce tickets
//! - [`view`] — card text, page count, status line, pagination state
//! - [`config`] — `bookfinder.toml` loading

pub mod client;
pub mod config;
pub mod controller;
pub mod types;
pub mod view;

pub use client::{CatalogClient, SearchError, SearchRequest};
pub use config::Config;
pub use controller::{FetchTicket, Phase, SearchController};
pub use types::{cover_url, Book, CoverSize, SearchResponse};
