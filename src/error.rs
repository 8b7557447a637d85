//! Error handling for rquests

use thiserror::Error;

/// Main error type for rquests operations
#[derive(Error, Debug)]
pub enum RquestsError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Configurator error: {0}")]
    Configurator(String),

    #[error("Invalid method: {0}")]
    InvalidMethod(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Invalid header: {0}")]
    InvalidHeader(String),

    #[error("Proxy error: {0}")]
    Proxy(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Network timeout")]
    Timeout,

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON encoding error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Encoding error: {0}")]
    Encoding(String),
}

/// Coarse classification of a failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The request could not be assembled from the supplied configuration.
    Configurator,
    /// The request was assembled but sending it or reading the reply failed.
    Transport,
    /// A body could not be serialized.
    Encoding,
}

impl RquestsError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            RquestsError::Configurator(_)
            | RquestsError::InvalidMethod(_)
            | RquestsError::InvalidUrl(_)
            | RquestsError::InvalidHeader(_)
            | RquestsError::Proxy(_)
            | RquestsError::Config(_) => ErrorKind::Configurator,
            RquestsError::Http(err) if err.is_builder() => ErrorKind::Configurator,
            RquestsError::Http(_)
            | RquestsError::Timeout
            | RquestsError::Transport(_)
            | RquestsError::Io(_) => ErrorKind::Transport,
            RquestsError::Json(_) | RquestsError::Encoding(_) => ErrorKind::Encoding,
        }
    }

    /// Map a reqwest failure, lifting deadline expiry into [`RquestsError::Timeout`].
    pub(crate) fn from_send(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            RquestsError::Timeout
        } else {
            RquestsError::Http(err)
        }
    }
}

/// Result type alias for rquests operations
pub type Result<T> = std::result::Result<T, RquestsError>;

#[cfg(test)]
mod tests {
    use super::{ErrorKind, RquestsError};

    #[test]
    fn kind_groups_errors() {
        assert_eq!(
            RquestsError::Configurator("bad".to_string()).kind(),
            ErrorKind::Configurator
        );
        assert_eq!(
            RquestsError::Proxy("::".to_string()).kind(),
            ErrorKind::Configurator
        );
        assert_eq!(RquestsError::Timeout.kind(), ErrorKind::Transport);
        assert_eq!(
            RquestsError::Transport("refused".to_string()).kind(),
            ErrorKind::Transport
        );
        assert_eq!(
            RquestsError::Encoding("bad".to_string()).kind(),
            ErrorKind::Encoding
        );
    }

    #[test]
    fn display_includes_detail() {
        let err = RquestsError::InvalidUrl("Invalid URL 'x': relative URL".to_string());
        assert_eq!(err.to_string(), "Invalid URL: Invalid URL 'x': relative URL");
        assert_eq!(RquestsError::Timeout.to_string(), "Network timeout");
    }
}
