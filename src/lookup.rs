//! The lookup pipeline: normalize, consult the cache, hit TVMaze on a miss.

use crate::cache::ShowCache;
use crate::tvmaze::{ShowRecord, TvMazeApi, TvMazeApiError};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

/// How long a resolved show list stays servable from memory.
pub const CACHE_TTL: Duration = Duration::from_secs(3600);

#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    /// The name resolved to no TVMaze person. Distinct from "person found
    /// with zero qualifying credits", which is a successful empty result.
    #[error("actor '{0}' not found")]
    NotFound(String),
    /// Upstream transport or parse failure. Nothing is cached; the next
    /// request retries.
    #[error("TVMaze lookup failed")]
    Upstream(#[source] TvMazeApiError),
}

/// Canonicalize an actor name for use as both cache key and search term.
///
/// Trims, collapses whitespace runs, and lowercases. URL-path style names
/// like `bryan-cranston` carry hyphens in place of spaces, so when a name
/// contains no whitespace at all its hyphens become spaces. Names that
/// already contain spaces keep their hyphens (`Jean-Claude Van Damme`).
pub fn normalize_actor_name(raw: &str) -> String {
    let collapsed = raw.split_whitespace().collect::<Vec<_>>().join(" ");
    let separated = if !collapsed.contains(' ') && collapsed.contains('-') {
        collapsed.replace('-', " ")
    } else {
        collapsed
    };
    separated.to_lowercase()
}

/// Read-through lookup over an injected cache and upstream client.
pub struct ShowLookup {
    api: Arc<TvMazeApi>,
    cache: ShowCache,
    ttl: Duration,
}

impl ShowLookup {
    pub fn new(api: Arc<TvMazeApi>, cache: ShowCache) -> Self {
        Self::with_ttl(api, cache, CACHE_TTL)
    }

    /// Like [`ShowLookup::new`] with a custom TTL. Tests shrink the window to
    /// exercise expiry without waiting an hour.
    pub fn with_ttl(api: Arc<TvMazeApi>, cache: ShowCache, ttl: Duration) -> Self {
        Self { api, cache, ttl }
    }

    /// Resolve an actor name to its show list, serving from cache when fresh.
    ///
    /// On a miss, performs the two-step TVMaze round trip and caches the
    /// shaped result for [`CACHE_TTL`]. Not-found and transport failures
    /// never write to the cache. Concurrent misses for the same key may both
    /// reach upstream; the last writer wins with equivalent data.
    pub async fn lookup(&self, raw_query: &str) -> Result<Arc<Vec<ShowRecord>>, LookupError> {
        let key = normalize_actor_name(raw_query);

        if let Some(shows) = self.cache.get(&key) {
            debug!(actor = %key, shows = shows.len(), "cache hit");
            return Ok(shows);
        }
        debug!(actor = %key, "cache miss");

        let person = match self.api.resolve_person(&key).await {
            Ok(id) => id,
            Err(TvMazeApiError::PersonNotFound(_)) => {
                return Err(LookupError::NotFound(key));
            }
            Err(e) => return Err(LookupError::Upstream(e)),
        };

        let shows = self
            .api
            .cast_credits(person)
            .await
            .map_err(LookupError::Upstream)?;

        info!(actor = %key, shows = shows.len(), "resolved from TVMaze");
        let shows = Arc::new(shows);
        self.cache.put(key, shows.clone(), self.ttl);
        Ok(shows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hyphenated_single_token_becomes_spaced() {
        assert_eq!(normalize_actor_name("bryan-cranston"), "bryan cranston");
    }

    #[test]
    fn spaced_name_case_folds_to_same_key() {
        assert_eq!(
            normalize_actor_name("Bryan Cranston"),
            normalize_actor_name("bryan-cranston")
        );
    }

    #[test]
    fn hyphen_survives_when_name_has_spaces() {
        assert_eq!(
            normalize_actor_name("Jean-Claude Van Damme"),
            "jean-claude van damme"
        );
    }

    #[test]
    fn whitespace_is_trimmed_and_collapsed() {
        assert_eq!(normalize_actor_name("  Bryan   Cranston "), "bryan cranston");
    }
}
