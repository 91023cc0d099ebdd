use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Request timed out")]
    Timeout,

    #[error("Transport error")]
    Transport(#[source] reqwest::Error),

    #[error("HTTP {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("Malformed response body")]
    Decode(#[source] serde_json::Error),

    #[error("Could not encode request field")]
    Encode(#[source] serde_json::Error),

    #[error("Invalid client configuration: {0}")]
    Config(String),

    #[error("I/O error")]
    Io(#[from] std::io::Error),
}

impl ClientError {
    pub fn status_code(&self) -> Option<StatusCode> {
        match self {
            ClientError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status_code() == Some(StatusCode::NOT_FOUND)
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, ClientError::Timeout)
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ClientError::Timeout
        } else if err.is_builder() {
            ClientError::Config(err.to_string())
        } else {
            ClientError::Transport(err)
        }
    }
}

pub type ClientResult<T> = Result<T, ClientError>;
