use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScraperError {
    #[error("invalid request: {reason}")]
    Validation { reason: String },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid URL \"{url}\": {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("no product found for article {article}")]
    ItemNotFound { article: i64 },
}
