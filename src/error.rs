use thiserror::Error;

#[derive(Error, Debug)]
pub enum StarWatchError {
    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Malformed API response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("GitHub API error: {0}")]
    Api(String),

    #[error("Resource not found: {0}")]
    NotFound(String),
}

impl StarWatchError {
    /// Whether the watch loop must terminate instead of retrying at the next
    /// tick. A decode failure means the API contract changed; a 404 means the
    /// watched user does not exist. Both need operator attention.
    pub fn is_fatal(&self) -> bool {
        matches!(self, StarWatchError::Decode(_) | StarWatchError::NotFound(_))
    }
}

pub type Result<T> = std::result::Result<T, StarWatchError>;
