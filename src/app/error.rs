use thiserror::Error;

#[derive(Error, Debug)]
pub enum HltbError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("search request failed with status {status}: {body}")]
    SearchFailed { status: u16, body: String },

    #[error("no API token found in site scripts")]
    TokenNotFound,

    #[error("error fetching the detail page: {0}")]
    DetailFetch(String),

    #[error("unexpected search response: {0}")]
    SearchResponse(#[from] serde_json::Error),

    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

pub type Result<T> = std::result::Result<T, HltbError>;
