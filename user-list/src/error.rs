use reqwest::StatusCode;
use thiserror::Error;

/// Errors surfaced while fetching a page from the user service
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Failed to reach user service: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("User service responded with status {status}: {detail}")]
    Server { status: StatusCode, detail: String },

    #[error("Failed to decode page: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("User service returned an invalid page: {0}")]
    InvalidPage(String),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),
}

impl FetchError {
    /// Whether the service was never reached (as opposed to answering badly)
    pub fn is_transport(&self) -> bool {
        matches!(self, FetchError::Transport(_))
    }
}

/// Errors raised while building an in-memory user collection
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid user collection: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Duplicate user id {0}")]
    DuplicateId(u64),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unsupported locale: {0}")]
pub struct UnknownLocale(pub String);
