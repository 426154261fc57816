use stockcheck_core::FetchErrorKind;
use thiserror::Error;

/// Errors returned by the IOWS availability client.
#[derive(Debug, Error)]
pub enum IowsError {
    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// HTTP 404: the service does not know this product at this store.
    #[error("availability not found: {url}")]
    NotFound { url: String },

    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("malformed availability response for {context}: {reason}")]
    MalformedResponse { context: String, reason: String },

    #[error("invalid IOWS base URL \"{base_url}\": {reason}")]
    InvalidBaseUrl { base_url: String, reason: String },

    #[error("invalid availability request: {0}")]
    InvalidRequest(String),
}

impl FetchErrorKind for IowsError {
    fn is_not_found(&self) -> bool {
        matches!(self, IowsError::NotFound { .. })
    }
}
