//! Stub TVMaze server for pipeline and HTTP-surface tests.
//!
//! Binds an axum router on `127.0.0.1:0` serving scripted responses for the
//! two endpoints the client calls, with per-endpoint call counters so tests
//! can assert exactly how often the upstream was hit.

use axum::Router;
use axum::body::Body;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// A scripted endpoint: responses are served front-to-back, and the final
/// one repeats forever.
#[derive(Clone)]
pub struct Endpoint {
    responses: Arc<Mutex<VecDeque<(StatusCode, String)>>>,
    calls: Arc<AtomicUsize>,
}

impl Endpoint {
    pub fn always(status: StatusCode, body: impl Into<String>) -> Self {
        Self::sequence(vec![(status, body.into())])
    }

    pub fn sequence(responses: Vec<(StatusCode, String)>) -> Self {
        assert!(!responses.is_empty(), "endpoint needs at least one response");
        Self {
            responses: Arc::new(Mutex::new(responses.into())),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn next(&self) -> (StatusCode, String) {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let mut queue = self.responses.lock().unwrap();
        if queue.len() > 1 {
            queue.pop_front().unwrap()
        } else {
            queue.front().cloned().unwrap()
        }
    }

    fn respond(&self) -> Response {
        let (status, body) = self.next();
        (
            status,
            [(header::CONTENT_TYPE, "application/json")],
            Body::from(body),
        )
            .into_response()
    }
}

/// Spawn the stub server and return its base URL.
pub async fn spawn_stub(search: Endpoint, credits: Endpoint) -> String {
    let router = Router::new()
        .route(
            "/search/people",
            get(move || {
                let search = search.clone();
                async move { search.respond() }
            }),
        )
        .route(
            "/people/{id}/castcredits",
            get(move || {
                let credits = credits.clone();
                async move { credits.respond() }
            }),
        );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

/// Search response resolving to Bryan Cranston's person id.
pub fn cranston_search_body() -> String {
    serde_json::json!([
        {"score": 0.91, "person": {"id": 123, "name": "Bryan Cranston"}},
        {"score": 0.40, "person": {"id": 456, "name": "Bryan Cranston Impersonator"}}
    ])
    .to_string()
}

/// Credits fixture: two scripted shows, one movie (filtered), one credit
/// missing its TVDB id (dropped), one duplicate (deduplicated).
pub fn cranston_credits_body() -> String {
    serde_json::json!([
        {"_embedded": {"show": {
            "name": "Breaking Bad", "type": "Scripted",
            "externals": {"tvrage": 18164, "thetvdb": 81189, "imdb": "tt0903747"}
        }}},
        {"_embedded": {"show": {
            "name": "Malcolm in the Middle", "type": "Scripted",
            "externals": {"tvrage": 3838, "thetvdb": 73838, "imdb": "tt0212671"}
        }}},
        {"_embedded": {"show": {
            "name": "Godzilla", "type": "Movie",
            "externals": {"thetvdb": 999999}
        }}},
        {"_embedded": {"show": {
            "name": "Untracked Pilot", "type": "Scripted",
            "externals": {"imdb": "tt0000000"}
        }}},
        {"_embedded": {"show": {
            "name": "Breaking Bad", "type": "Scripted",
            "externals": {"thetvdb": 81189}
        }}}
    ])
    .to_string()
}
