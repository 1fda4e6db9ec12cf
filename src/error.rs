use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AgentError {
    #[error("cannot resolve password '{id}' from store {path}: {reason}")]
    CredentialResolution {
        id: String,
        path: PathBuf,
        reason: String,
    },

    #[error("{entity} without a 'name' cannot be piggybacked")]
    MissingIdentity { entity: &'static str },

    #[error("malformed {endpoint} response: {reason}")]
    MalformedResponse {
        endpoint: &'static str,
        reason: String,
    },

    #[error("cannot load certificate {path}: {reason}")]
    Certificate { path: PathBuf, reason: String },

    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("invalid pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("invalid parameters: {0}")]
    InvalidParams(String),
}

pub type Result<T> = std::result::Result<T, AgentError>;
