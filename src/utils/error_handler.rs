use std::path::PathBuf;

use thiserror::Error;

/// Fatal problems with the process configuration. The run stops before any I/O.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} is not set")]
    Missing(&'static str),
    #[error("{0} is set but empty")]
    Empty(&'static str),
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{path} is not a valid reminder list: {source}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to serialize reminders: {0}")]
    Serialize(#[source] serde_json::Error),
}

impl StoreError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Soft failures of a single delivery attempt.
#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("request timed out")]
    Timeout,
    #[error("http error {status}: {body}")]
    Http { status: u16, body: String },
    #[error("telegram rejected the message: {0}")]
    Rejected(String),
    #[error("transport error: {0}")]
    Transport(String),
}

impl From<reqwest::Error> for NotifyError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else {
            // the request url carries the bot token
            Self::Transport(err.without_url().to_string())
        }
    }
}
