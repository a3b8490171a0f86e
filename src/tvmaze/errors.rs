//! Error types for the TVMaze API client.

#[derive(Debug, thiserror::Error)]
pub enum TvMazeApiError {
    /// The people search matched nobody (empty result set or upstream 404).
    #[error("no person matched '{0}'")]
    PersonNotFound(String),
    /// The response arrived but its body did not match the expected shape.
    #[error("failed to parse TVMaze response")]
    ParseFailed {
        status: u16,
        url: String,
        #[source]
        source: anyhow::Error,
    },
    /// Network failure, timeout, or non-success status.
    #[error(transparent)]
    RequestFailed(#[from] anyhow::Error),
}
