//! Catalog types: search results as returned by the Open Library search API,
//! the response envelope, and cover image URL derivation.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Base URL of the Open Library cover image service.
pub const DEFAULT_COVERS_URL: &str = "https://covers.openlibrary.org";

/// Base URL for work pages (a book's `key` is appended as-is).
pub const OPEN_LIBRARY_URL: &str = "https://openlibrary.org";

// ---------------------------------------------------------------------------
// Search results
// ---------------------------------------------------------------------------

/// One document from the `docs` array of a search response.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Book {
    #[serde(default)]
    pub key: String,
    #[serde(default)]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_name: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_publish_year: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_i: Option<i64>,
}

impl Book {
    /// Author names, or an empty slice when the record has none.
    pub fn authors(&self) -> &[String] {
        self.author_name.as_deref().unwrap_or(&[])
    }

    /// Link to the work page on openlibrary.org.
    pub fn work_url(&self) -> String {
        format!("{OPEN_LIBRARY_URL}{}", self.key)
    }
}

/// Envelope returned by `search.json`. Both fields are optional on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SearchResponse {
    #[serde(rename = "numFound", default)]
    pub num_found: u64,
    #[serde(default)]
    pub docs: Vec<Book>,
}

// ---------------------------------------------------------------------------
// Covers
// ---------------------------------------------------------------------------

/// Size codes understood by the cover service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CoverSize {
    #[serde(rename = "S")]
    Small,
    #[default]
    #[serde(rename = "M")]
    Medium,
    #[serde(rename = "L")]
    Large,
}

impl CoverSize {
    pub fn code(self) -> &'static str {
        match self {
            CoverSize::Small => "S",
            CoverSize::Medium => "M",
            CoverSize::Large => "L",
        }
    }
}

impl fmt::Display for CoverSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for CoverSize {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "S" | "s" => Ok(CoverSize::Small),
            "M" | "m" => Ok(CoverSize::Medium),
            "L" | "l" => Ok(CoverSize::Large),
            other => Err(format!("unknown cover size '{other}' (expected S, M or L)")),
        }
    }
}

/// Cover image URL on the default cover service, or `None` without an id.
pub fn cover_url(cover_id: Option<i64>, size: CoverSize) -> Option<String> {
    cover_url_with_base(DEFAULT_COVERS_URL, cover_id, size)
}

/// Cover image URL relative to a configurable cover service base.
pub fn cover_url_with_base(base: &str, cover_id: Option<i64>, size: CoverSize) -> Option<String> {
    let id = cover_id?;
    Some(format!("{}/b/id/{id}-{}.jpg", base.trim_end_matches('/'), size.code()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cover_url_uses_medium_pattern() {
        assert_eq!(
            cover_url(Some(12345), CoverSize::default()).as_deref(),
            Some("https://covers.openlibrary.org/b/id/12345-M.jpg")
        );
    }

    #[test]
    fn cover_url_without_id_is_none() {
        assert_eq!(cover_url(None, CoverSize::Medium), None);
    }

    #[test]
    fn cover_url_trims_trailing_slash_on_base() {
        assert_eq!(
            cover_url_with_base("http://localhost:9000/", Some(7), CoverSize::Large).as_deref(),
            Some("http://localhost:9000/b/id/7-L.jpg")
        );
    }

    #[test]
    fn response_fields_default_when_missing() {
        let resp: SearchResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(resp.num_found, 0);
        assert!(resp.docs.is_empty());
    }

    #[test]
    fn book_decodes_optional_fields() {
        let json = r#"{
            "numFound": 2,
            "docs": [
                {"key": "/works/OL1W", "title": "The Hobbit", "author_name": ["J.R.R. Tolkien"],
                 "first_publish_year": 1937, "cover_i": 14627509, "edition_count": 400},
                {"key": "/works/OL2W", "title": "Untitled"}
            ]
        }"#;
        let resp: SearchResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.num_found, 2);
        assert_eq!(resp.docs[0].authors(), ["J.R.R. Tolkien".to_string()]);
        assert_eq!(resp.docs[0].first_publish_year, Some(1937));
        assert_eq!(resp.docs[1].authors().len(), 0);
        assert_eq!(resp.docs[1].cover_i, None);
        assert_eq!(resp.docs[1].work_url(), "https://openlibrary.org/works/OL2W");
    }

    #[test]
    fn cover_size_parses_codes() {
        assert_eq!("l".parse::<CoverSize>(), Ok(CoverSize::Large));
        assert!("XL".parse::<CoverSize>().is_err());
    }
}
