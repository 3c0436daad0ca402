use thiserror::Error;

/// Failure reported by a collaborator adapter (access control, remote APIs).
#[derive(Error, Clone, Debug, PartialEq)]
pub enum ProviderError {
    #[error("{message} (status {status})")]
    Api { status: u64, message: String },

    #[error("Failed to send request: {0}")]
    Request(String),

    #[error("Failed to decode response: {0}")]
    Decode(String),
}
