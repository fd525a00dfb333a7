use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum Error {
    /// Error reported by the identity provider, passed through unmodified.
    #[error("{code}: {message}")]
    Provider { code: String, message: String },
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("invalid provider response: {0}")]
    Response(String),
    #[error("invalid json")]
    Json(#[from] serde_json::Error),
    #[error("authentication challenge required: {0}")]
    ChallengeRequired(String),
    #[error("cannot derive tenant from host: {0:?}")]
    InvalidHost(String),
    #[error("configuration error: {0}")]
    Config(String),
    #[error("storage error: {0}")]
    Storage(String),
}

impl Error {
    /// Provider error code (`UsernameExistsException`, `CodeMismatchException`, ...).
    #[must_use]
    pub fn provider_code(&self) -> Option<&str> {
        match self {
            Self::Provider { code, .. } => Some(code),
            _ => None,
        }
    }
}
