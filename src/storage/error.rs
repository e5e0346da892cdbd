use reqwest::StatusCode;

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Unexpected status {status}: {body}")]
    Status { status: StatusCode, body: String },
    #[error("Serde error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Auth error: {0}")]
    Auth(String),
    #[error("Invalid path: {0}")]
    Url(String),
}

impl From<jsonwebtoken::errors::Error> for StorageError {
    fn from(error: jsonwebtoken::errors::Error) -> Self {
        StorageError::Auth(error.to_string())
    }
}
