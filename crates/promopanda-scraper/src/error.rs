use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScraperError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    #[error("API at {url} rejected the request with HTTP {status}: {body}")]
    Rejected {
        status: u16,
        url: String,
        body: String,
    },
}
