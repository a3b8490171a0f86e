//! serde models for TVMaze payloads and the shaped output record.

use serde::{Deserialize, Serialize};

/// A single show identifier in the downstream (Sonarr/TVDB) numbering scheme.
///
/// Immutable once produced; TVDB ids are serialized as strings because that
/// is what *arr import lists expect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShowRecord {
    #[serde(rename = "tvdbId")]
    pub tvdb_id: String,
}

/// One element of `GET /search/people?q=...` — TVMaze wraps each person in a
/// relevance-scored envelope.
#[derive(Debug, Deserialize)]
pub struct PersonSearchResult {
    pub person: Person,
}

#[derive(Debug, Deserialize)]
pub struct Person {
    pub id: i64,
    #[serde(default)]
    pub name: Option<String>,
}

/// One element of `GET /people/{id}/castcredits?embed=show`.
#[derive(Debug, Deserialize)]
pub struct CastCredit {
    #[serde(rename = "_embedded", default)]
    pub embedded: Option<CreditEmbed>,
}

#[derive(Debug, Deserialize)]
pub struct CreditEmbed {
    #[serde(default)]
    pub show: Option<Show>,
}

#[derive(Debug, Deserialize)]
pub struct Show {
    #[serde(default)]
    pub name: Option<String>,
    /// TVMaze's content classification ("Scripted", "Movie", "Sports", ...).
    #[serde(rename = "type", default)]
    pub show_type: Option<String>,
    #[serde(default)]
    pub externals: Option<Externals>,
}

/// Cross-catalog identifiers TVMaze knows for a show.
#[derive(Debug, Deserialize)]
pub struct Externals {
    #[serde(default)]
    pub thetvdb: Option<i64>,
}
