//! TVMaze API client: person search and cast-credit retrieval.
//!
//! Stateless beyond the pooled HTTP connection — caching lives entirely in
//! the lookup pipeline, so calls here always hit the network.

pub mod errors;
pub mod json;
pub mod models;

pub use errors::TvMazeApiError;
pub use models::ShowRecord;

use crate::tvmaze::models::{CastCredit, PersonSearchResult};
use anyhow::Context;
use std::collections::HashSet;
use std::time::Duration;
use tracing::{debug, trace};

/// Per-request timeout; the upstream is untrusted, so every call is bounded.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// TVMaze show types that map onto Sonarr's idea of a series. Movies, sports
/// events and award ceremonies carry TVDB ids too, but are useless downstream.
const SERIES_TYPES: &[&str] = &[
    "Scripted",
    "Reality",
    "Talk Show",
    "Game Show",
    "Documentary",
    "Animation",
];

/// A resolved TVMaze person id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PersonId(pub i64);

pub struct TvMazeApi {
    http: reqwest::Client,
    base_url: String,
}

impl TvMazeApi {
    /// Build a client against the given API root (no trailing slash).
    pub fn new(base_url: String) -> Result<Self, anyhow::Error> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context("Failed to build TVMaze HTTP client")?;
        Ok(Self { http, base_url })
    }

    /// Search people by name and return the best-ranked match.
    ///
    /// TVMaze orders results by relevance score, so the first element is the
    /// match. An empty result set (or an upstream 404) means the name resolves
    /// to nobody.
    pub async fn resolve_person(&self, name: &str) -> Result<PersonId, TvMazeApiError> {
        let url = format!("{}/search/people", self.base_url);
        let response = self
            .http
            .get(&url)
            .query(&[("q", name)])
            .send()
            .await
            .with_context(|| format!("People search request failed for '{name}'"))?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(TvMazeApiError::PersonNotFound(name.to_string()));
        }
        if !status.is_success() {
            return Err(anyhow::anyhow!("People search returned {status} for '{name}'").into());
        }

        let body = response
            .text()
            .await
            .context("Failed to read people search response body")?;
        let results: Vec<PersonSearchResult> =
            json::parse_json(&body).map_err(|source| TvMazeApiError::ParseFailed {
                status: status.as_u16(),
                url,
                source,
            })?;

        let Some(best) = results.first() else {
            return Err(TvMazeApiError::PersonNotFound(name.to_string()));
        };

        trace!(
            person_id = best.person.id,
            person_name = best.person.name.as_deref().unwrap_or("?"),
            query = name,
            "resolved person"
        );
        Ok(PersonId(best.person.id))
    }

    /// Fetch all cast credits for a person and shape them into show records.
    ///
    /// Credits missing a TVDB id, carrying a non-series show type, or
    /// duplicating an id already seen are dropped; upstream order is
    /// preserved for the rest.
    pub async fn cast_credits(&self, person: PersonId) -> Result<Vec<ShowRecord>, TvMazeApiError> {
        let url = format!("{}/people/{}/castcredits", self.base_url, person.0);
        let response = self
            .http
            .get(&url)
            .query(&[("embed", "show")])
            .send()
            .await
            .with_context(|| format!("Cast credits request failed for person {}", person.0))?;

        let status = response.status();
        if !status.is_success() {
            return Err(
                anyhow::anyhow!("Cast credits returned {status} for person {}", person.0).into(),
            );
        }

        let body = response
            .text()
            .await
            .context("Failed to read cast credits response body")?;
        let credits: Vec<CastCredit> =
            json::parse_json(&body).map_err(|source| TvMazeApiError::ParseFailed {
                status: status.as_u16(),
                url,
                source,
            })?;

        let total = credits.len();
        let mut seen = HashSet::new();
        let mut shows = Vec::new();

        for credit in credits {
            let Some(show) = credit.embedded.and_then(|e| e.show) else {
                continue;
            };
            let is_series = show
                .show_type
                .as_deref()
                .is_some_and(|t| SERIES_TYPES.contains(&t));
            let Some(tvdb_id) = show.externals.and_then(|e| e.thetvdb) else {
                continue;
            };
            if !is_series {
                continue;
            }

            let tvdb_id = tvdb_id.to_string();
            if seen.insert(tvdb_id.clone()) {
                shows.push(ShowRecord { tvdb_id });
            }
        }

        debug!(
            person_id = person.0,
            credits = total,
            shows = shows.len(),
            "shaped cast credits"
        );
        Ok(shows)
    }
}
