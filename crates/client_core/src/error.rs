use thiserror::Error;

use crate::provider::ProviderError;

/// Everything an invocation or connect attempt can fail with.
///
/// The first six variants are unrecoverable for the current action and
/// are surfaced immediately; `UserDenied`, `ContractRejected` and
/// `TransportError` are expected operational outcomes and carry the
/// provider's text verbatim. Nothing here is retried automatically.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("no wallet provider is available")]
    ProviderMissing,
    #[error("account access was denied by the user")]
    UserDenied,
    #[error("malformed service manifest: {0}")]
    ManifestMalformed(String),
    #[error("unknown operation '{0}'")]
    UnknownOperation(String),
    #[error("operation '{operation}' expects {expected} arguments, got {actual}")]
    ArityMismatch {
        operation: String,
        expected: usize,
        actual: usize,
    },
    #[error("wallet session is not connected")]
    NotConnected,
    #[error("rejected by service: {reason}")]
    ContractRejected { reason: String },
    #[error("transport failure: {message}")]
    TransportError { message: String },
}

impl ClientError {
    /// Stable discriminant name, used by the presentation layer to
    /// prefix failure text.
    pub fn kind(&self) -> &'static str {
        match self {
            ClientError::ProviderMissing => "ProviderMissing",
            ClientError::UserDenied => "UserDenied",
            ClientError::ManifestMalformed(_) => "ManifestMalformed",
            ClientError::UnknownOperation(_) => "UnknownOperation",
            ClientError::ArityMismatch { .. } => "ArityMismatch",
            ClientError::NotConnected => "NotConnected",
            ClientError::ContractRejected { .. } => "ContractRejected",
            ClientError::TransportError { .. } => "TransportError",
        }
    }
}

impl From<ProviderError> for ClientError {
    /// Classification of remote failures. A structured revert reason is
    /// preferred over the generic message because revert reasons are
    /// actionable to the end user and transport messages usually are
    /// not.
    fn from(err: ProviderError) -> Self {
        match err {
            ProviderError::Denied => ClientError::UserDenied,
            ProviderError::Reverted { reason } => ClientError::ContractRejected { reason },
            ProviderError::Transport { message } => ClientError::TransportError { message },
        }
    }
}
