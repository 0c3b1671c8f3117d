//! Error types and result alias for the multiversion compute layer.
//!
//! Backend errors are carried through unchanged so callers can inspect the
//! HTTP status the API returned. Everything the dispatcher and the wait loop
//! decide on their own has a dedicated variant.

use std::time::Duration;

use crate::multiversion::ScopeType;
use crate::version::ApiVersion;

/// The result type used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by dispatch, conversion generation and operation waits.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The requested version is not served for this resource, or the client
    /// for that version was not configured.
    #[error("unknown API version {version} for {resource}")]
    UnknownVersion {
        resource: String,
        version: ApiVersion,
    },

    /// An operation wait was requested with a scope that cannot be resolved.
    #[error("awaited operation with unknown scope: {scope:?} {qualifier:?}")]
    UnknownScope {
        scope: ScopeType,
        qualifier: Option<String>,
    },

    /// Two schema fields share a name but not a shape. Only raised while
    /// generating code, never by the runtime converters.
    #[error("cannot convert {type_name}.{field}: {reason}")]
    ConversionMismatch {
        type_name: String,
        field: String,
        reason: String,
    },

    /// The backend answered with a non-success status.
    #[error("API request failed: {status} {message}")]
    Api { status: u16, message: String },

    /// The request never got an answer.
    #[error("failed to send request: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("authentication failed: {message}")]
    Auth {
        message: String,
        #[source]
        source: Option<gcp_auth::Error>,
    },

    #[error("failed to decode JSON: {0}")]
    Decode(#[from] serde_json::Error),

    /// The operation reached DONE carrying an error payload.
    #[error("operation {name} failed: {}", errors.join("; "))]
    OperationFailed { name: String, errors: Vec<String> },

    #[error("timeout while waiting for operation {name} ({activity}) to become DONE after {timeout:?}")]
    WaitTimeout {
        activity: String,
        name: String,
        timeout: Duration,
    },

    #[error("instance group {name} isn't shrinking during delete ({size} >= {previous})")]
    NotShrinking {
        name: String,
        size: i64,
        previous: i64,
    },

    #[error("invalid schema: {0}")]
    Schema(String),

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    pub fn unknown_version(resource: impl Into<String>, version: ApiVersion) -> Self {
        Self::UnknownVersion {
            resource: resource.into(),
            version,
        }
    }

    /// Errors worth polling through: rate limiting, server side failures and
    /// dropped connections.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Api { status, .. } => *status == 429 || (500..600).contains(status),
            Self::Transport(_) => true,
            _ => false,
        }
    }

    /// Errors that came back from an actual call to the backend. Local
    /// failures such as an unsupported version or a bad scope are not.
    pub fn is_backend_call(&self) -> bool {
        matches!(self, Self::Api { .. } | Self::Transport(_))
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::WaitTimeout { .. })
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Api { status: 404, .. })
    }
}
