//! Protocol-boundary failures.
//!
//! None of these are fatal: the offending input is rejected and prior state
//! is preserved. `Desync` is the one unrecoverable condition — the engines
//! no longer agree — but recovery is out of scope for this layer, so it too
//! is just reported.

use thiserror::Error;

use crate::board::{Player, Position};

/// Errors surfaced at the message-handling boundary.
#[derive(Debug, Error)]
pub enum ProtocolError {
    /// Inbound payload was not a well-formed message. The payload is dropped
    /// with no partial application.
    #[error("malformed payload dropped: {0}")]
    Decode(#[source] serde_json::Error),

    /// Outbound message failed to serialize.
    #[error("failed to encode message: {0}")]
    Encode(#[source] serde_json::Error),

    /// A remote move failed local re-validation. The two engines have
    /// diverged; local state is left as it was.
    #[error("remote move {from} -> {to} is illegal here: peers have diverged")]
    Desync { from: Position, to: Position },

    /// A local move was attempted while the opponent is to move.
    #[error("{local} attempted to move on the opponent's turn")]
    NotYourTurn { local: Player },
}
