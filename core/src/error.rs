//! Error types for the JustCMS client.
//!
//! # Design
//! Every public operation fails with exactly one `JustCmsError` kind.
//! `Api` carries whatever the remote side reported; `Transport` is used when
//! the exchange produced no status at all, so the status is a fixed
//! server-error value. `Decoding` is kept apart from `Api` because the HTTP
//! exchange itself succeeded.

/// Status reported for failures where the transport produced no response.
pub const TRANSPORT_FAILURE_STATUS: u16 = 500;

/// Message reported for failures where the transport produced no response.
pub const TRANSPORT_FAILURE_MESSAGE: &str = "JustCMS API error";

pub type Result<T> = std::result::Result<T, JustCmsError>;

/// Errors returned by `JustCmsClient` and `JustCms`.
#[derive(Debug, thiserror::Error)]
pub enum JustCmsError {
    /// The client could not be constructed.
    #[error("JustCMS configuration error: {0}")]
    Configuration(#[from] ConfigError),

    /// The API answered with a non-2xx status.
    #[error("JustCMS API error {status}: {message}")]
    Api { status: u16, message: String },

    /// The transport could not complete the exchange.
    #[error("JustCMS API error")]
    Transport {
        status: u16,
        #[source]
        source: TransportFailure,
    },

    /// The body was not JSON, or lacked fields the expected shape requires.
    #[error("failed to decode JustCMS response: {0}")]
    Decoding(#[source] serde_json::Error),
}

impl JustCmsError {
    /// HTTP status associated with the failure, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            JustCmsError::Api { status, .. } | JustCmsError::Transport { status, .. } => Some(*status),
            JustCmsError::Configuration(_) | JustCmsError::Decoding(_) => None,
        }
    }
}

/// Construction-time failures. Never retried.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("JustCMS API token is required")]
    MissingToken,

    #[error("JustCMS project ID is required")]
    MissingProjectId,

    #[error("invalid JustCMS base URL `{0}`")]
    InvalidBaseUrl(String),
}

/// Failure reported by a `Transport` when no HTTP status is available
/// (connection refused, DNS failure, timeout).
#[derive(Debug, thiserror::Error)]
#[error("{message}")]
pub struct TransportFailure {
    message: String,
    #[source]
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl TransportFailure {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    /// Wrap the underlying client's error, keeping its text as the message.
    pub fn from_source<E>(source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self {
            message: source.to_string(),
            source: Some(Box::new(source)),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_display_includes_status_and_message() {
        let err = JustCmsError::Api {
            status: 404,
            message: "Not Found".to_string(),
        };
        assert_eq!(err.to_string(), "JustCMS API error 404: Not Found");
        assert_eq!(err.status(), Some(404));
    }

    #[test]
    fn transport_error_uses_generic_message() {
        let err = JustCmsError::Transport {
            status: TRANSPORT_FAILURE_STATUS,
            source: TransportFailure::new("connection refused"),
        };
        assert_eq!(err.to_string(), TRANSPORT_FAILURE_MESSAGE);
        assert_eq!(err.status(), Some(TRANSPORT_FAILURE_STATUS));
        let source = std::error::Error::source(&err).unwrap();
        assert_eq!(source.to_string(), "connection refused");
    }

    #[test]
    fn configuration_error_has_no_status() {
        let err = JustCmsError::from(ConfigError::MissingToken);
        assert_eq!(err.status(), None);
        assert_eq!(err.to_string(), "JustCMS configuration error: JustCMS API token is required");
    }
}
