use std::path::PathBuf;

use thiserror::Error;

/// Fatal conditions that abort a comparison run
#[derive(Debug, Error)]
pub enum CheckError {
    #[error("you must set the environment variable {var}")]
    MissingToken { var: &'static str },

    #[error("failed to read {}: {source}", path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to list {}: {source}", path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("GitHub 404. Did you use the correct token? ({url})")]
    NotFound { url: String },

    #[error("Invalid base64 content: {0}")]
    Decode(#[from] base64::DecodeError),

    #[error("failed to write report: {0}")]
    Output(#[source] std::io::Error),
}
