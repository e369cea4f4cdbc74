//! Test harness for client integration tests.
//!
//! Serves a canned Open Library search endpoint on an ephemeral local port and
//! records the query parameters of every request it receives.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use bookfinder_core::Config;

/// What the fake endpoint answers with.
#[derive(Clone)]
pub enum Reply {
    Json(String),
    Status(u16),
    Raw(String),
}

struct FakeState {
    reply: Reply,
    requests: Mutex<Vec<HashMap<String, String>>>,
}

pub struct FakeCatalog {
    addr: SocketAddr,
    state: Arc<FakeState>,
}

impl FakeCatalog {
    pub async fn start(reply: Reply) -> Self {
        let state = Arc::new(FakeState {
            reply,
            requests: Mutex::new(Vec::new()),
        });
        let app = Router::new()
            .route("/search.json", get(search))
            .with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind fake catalog");
        let addr = listener.local_addr().expect("No local addr");
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("Fake catalog server failed");
        });

        FakeCatalog { addr, state }
    }

    /// Config pointing the client at this server.
    pub fn config(&self) -> Config {
        Config {
            search_url: format!("http://{}/search.json", self.addr),
            covers_url: format!("http://{}", self.addr),
            ..Config::default()
        }
    }

    /// Decoded query parameters of every request so far.
    pub fn requests(&self) -> Vec<HashMap<String, String>> {
        self.state.requests.lock().unwrap().clone()
    }
}

async fn search(
    State(state): State<Arc<FakeState>>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    state.requests.lock().unwrap().push(params);
    match &state.reply {
        Reply::Json(body) => {
            ([(header::CONTENT_TYPE, "application/json")], body.clone()).into_response()
        }
        Reply::Status(code) => StatusCode::from_u16(*code)
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
            .into_response(),
        Reply::Raw(body) => body.clone().into_response(),
    }
}

/// A page of two Tolkien works in the shape `search.json` returns.
pub fn tolkien_body() -> String {
    serde_json::json!({
        "numFound": 1234,
        "start": 0,
        "docs": [
            {
                "key": "/works/OL27482W",
                "title": "The Hobbit",
                "author_name": ["J.R.R. Tolkien"],
                "first_publish_year": 1937,
                "cover_i": 14627509
            },
            {
                "key": "/works/OL27448W",
                "title": "The Lord of the Rings",
                "author_name": ["J.R.R. Tolkien", "Alan Lee", "Christopher Tolkien"],
                "cover_i": 14625765
            },
            {
                "key": "/works/OL1W",
                "title": "Tolkien: A Biography"
            }
        ]
    })
    .to_string()
}
