use thiserror::Error;

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("Network error")]
    Network(#[from] reqwest::Error),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ResolveError {
    #[error("Invalid upload time {upload_time:?} for version {version}")]
    InvalidUploadTime {
        version: String,
        upload_time: String,
        source: chrono::ParseError,
    },
}
