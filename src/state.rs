//! Application state shared across request handlers.

use crate::cache::ShowCache;
use crate::lookup::ShowLookup;
use crate::tvmaze::TvMazeApi;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub lookup: Arc<ShowLookup>,
}

impl AppState {
    pub fn new(api: Arc<TvMazeApi>) -> Self {
        Self {
            lookup: Arc::new(ShowLookup::new(api, ShowCache::new())),
        }
    }
}
