//! Client configuration, loaded from an optional `bookfinder.toml`.
//!
//! Every key is optional; anything not set keeps its default. Unknown keys are
//! reported with a suggestion for the closest known key.

use std::path::Path;
use std::time::Duration;

use thiserror::Error;
use tracing::{debug, warn};

use crate::types::{CoverSize, DEFAULT_COVERS_URL};

/// Name of the config file looked up by the desktop app.
pub const CONFIG_FILE_NAME: &str = "bookfinder.toml";

pub const DEFAULT_SEARCH_URL: &str = "https://openlibrary.org/search.json";
pub const DEFAULT_PAGE_SIZE: u32 = 10;
pub const DEFAULT_DEBOUNCE_MS: u64 = 450;

const KNOWN_CONFIG_KEYS: &[&str] = &[
    "search_url",
    "covers_url",
    "page_size",
    "debounce_ms",
    "cover_size",
    "user_agent",
    "request_timeout_secs",
];

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("could not parse config: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("invalid value for '{key}': {reason}")]
    Invalid { key: &'static str, reason: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Search endpoint; query parameters are appended by the client.
    pub search_url: String,
    /// Cover image service base URL.
    pub covers_url: String,
    /// `limit` sent with each request, also the divisor for the page count.
    pub page_size: u32,
    /// Quiet period before a search is issued.
    pub debounce_ms: u64,
    pub cover_size: CoverSize,
    pub user_agent: String,
    /// No deadline unless set.
    pub request_timeout_secs: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            search_url: DEFAULT_SEARCH_URL.to_string(),
            covers_url: DEFAULT_COVERS_URL.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            cover_size: CoverSize::Medium,
            user_agent: concat!("bookfinder/", env!("CARGO_PKG_VERSION")).to_string(),
            request_timeout_secs: None,
        }
    }
}

impl Config {
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }

    /// Parse a TOML document, merging its keys over the defaults.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let table: toml::Table = content.parse()?;
        let mut config = Config::default();

        for key in table.keys() {
            if !KNOWN_CONFIG_KEYS.contains(&key.as_str()) {
                warn_unknown_key(key);
            }
        }

        if let Some(v) = table.get("search_url") {
            config.search_url = string_value(v, "search_url")?;
        }
        if let Some(v) = table.get("covers_url") {
            config.covers_url = string_value(v, "covers_url")?;
        }
        if let Some(v) = table.get("page_size") {
            config.page_size = u32::try_from(positive_int(v, "page_size")?).map_err(|_| {
                ConfigError::Invalid {
                    key: "page_size",
                    reason: format!("must be at most {}", u32::MAX),
                }
            })?;
        }
        if let Some(v) = table.get("debounce_ms") {
            let ms = v.as_integer().filter(|n| *n >= 0).ok_or(ConfigError::Invalid {
                key: "debounce_ms",
                reason: "expected a non-negative integer".into(),
            })?;
            config.debounce_ms = ms as u64;
        }
        if let Some(v) = table.get("cover_size") {
            let code = v.as_str().ok_or(ConfigError::Invalid {
                key: "cover_size",
                reason: "expected one of \"S\", \"M\", \"L\"".into(),
            })?;
            config.cover_size = code
                .parse()
                .map_err(|reason| ConfigError::Invalid { key: "cover_size", reason })?;
        }
        if let Some(v) = table.get("user_agent") {
            config.user_agent = string_value(v, "user_agent")?;
        }
        if let Some(v) = table.get("request_timeout_secs") {
            config.request_timeout_secs = Some(positive_int(v, "request_timeout_secs")? as u64);
        }

        Ok(config)
    }

    /// Load a config file. A missing or malformed file is an error.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        debug!(path = %path.display(), "Loading config");
        Self::from_toml_str(&content)
    }

    /// Load a config file if it exists, falling back to defaults with a warning
    /// when it cannot be used.
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Ignoring config file, using defaults");
                Self::default()
            }
        }
    }
}

fn positive_int(value: &toml::Value, key: &'static str) -> Result<i64, ConfigError> {
    value.as_integer().filter(|n| *n > 0).ok_or(ConfigError::Invalid {
        key,
        reason: "expected a positive integer".into(),
    })
}

fn string_value(value: &toml::Value, key: &'static str) -> Result<String, ConfigError> {
    value.as_str().map(str::to_string).ok_or(ConfigError::Invalid {
        key,
        reason: "expected a string".into(),
    })
}

/// Closest known key within an edit distance of 3, if any.
pub(crate) fn suggest_key(key: &str) -> Option<&'static str> {
    KNOWN_CONFIG_KEYS
        .iter()
        .map(|k| (*k, edit_distance(key, k)))
        .min_by_key(|(_, d)| *d)
        .filter(|(_, d)| *d <= 3)
        .map(|(k, _)| k)
}

fn warn_unknown_key(key: &str) {
    match suggest_key(key) {
        Some(suggestion) => {
            warn!(key, suggestion, "Unknown key in {CONFIG_FILE_NAME} — did you mean '{suggestion}'?");
        }
        _ => {
            warn!(
                key,
                "Unknown key in {CONFIG_FILE_NAME} (known keys: {})",
                KNOWN_CONFIG_KEYS.join(", ")
            );
        }
    }
}

/// Levenshtein distance, used for typo suggestions.
pub(crate) fn edit_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];
    for (i, ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let cost = if ca == cb { 0 } else { 1 };
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[b.len()]
}
