//! Unified error type for Starbot.

use starbot_protocol::{ErrorKind, ProtocolError};
use starbot_transport::TransportError;

/// Top-level error that wraps all crate-specific errors.
///
/// When using the `starbot` meta-crate, you deal with this single error
/// type instead of importing errors from each sub-crate. The `#[from]`
/// attribute on each variant auto-generates `From` impls, so the `?`
/// operator converts sub-crate errors automatically.
#[derive(Debug, thiserror::Error)]
pub enum BotError {
    /// A transport-level error (read, write, oversized line).
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// A protocol-level error (empty line, bad JSON, bad vector, unknown variant).
    #[error(transparent)]
    Protocol(#[from] ProtocolError),
}

impl BotError {
    /// The failure category. A broken stream counts as a protocol failure.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Transport(_) => ErrorKind::Protocol,
            Self::Protocol(err) => err.kind(),
        }
    }
}
