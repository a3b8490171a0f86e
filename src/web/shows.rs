//! Show lookup handler.

use axum::extract::{Path, State};
use axum::response::Response;
use regex::Regex;
use std::sync::LazyLock;
use tracing::info;

use crate::state::AppState;
use crate::web::error::ApiError;
use crate::web::routes::{cache, with_cache_control};

/// Accepted actor-name shape: letters, digits, spaces, hyphens, apostrophes
/// and periods. Anything else is rejected before it reaches the pipeline.
static ACTOR_NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9\s\-'.]+$").unwrap());

fn validate_actor_name(name: &str) -> bool {
    !name.is_empty() && name.len() <= 100 && ACTOR_NAME_RE.is_match(name)
}

/// `GET /shows/{actor_name}`
///
/// Returns the TVDB ids of TV shows featuring the actor, shaped like a TVDB
/// person list so Sonarr can consume it as an import list. Results are cached
/// in-process for an hour.
pub(super) async fn get_shows(
    State(state): State<AppState>,
    Path(actor_name): Path<String>,
) -> Result<Response, ApiError> {
    if !validate_actor_name(&actor_name) {
        return Err(ApiError::invalid_actor_name());
    }

    let shows = state.lookup.lookup(&actor_name).await?;

    info!(actor = %actor_name, shows = shows.len(), "returning shows");
    Ok(with_cache_control(shows.as_slice(), cache::SHOWS))
}
