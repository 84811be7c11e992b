//! The wire contract.
//!
//! Payloads are JSON with an adjacent `type`/`data` tagging:
//!
//! ```json
//! {"type":"move","data":{"from":{"row":5,"col":0},"to":{"row":4,"col":1}}}
//! {"type":"chat","data":{"text":"hi"}}
//! {"type":"reset","data":{}}
//! ```
//!
//! There is no versioning field; both peers are assumed to run identical
//! protocol logic. A `move` deliberately carries no jump flag or captured
//! square — transmitting effect fields would invite one peer to trust the
//! other's derivation, and each peer is an independent authority.

use serde::{Deserialize, Serialize};

use crate::board::Position;

use super::error::ProtocolError;

/// A protocol message.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "lowercase")]
pub enum Message {
    /// Move intent. The receiver re-derives the full move by looking up
    /// `from → to` in its own valid-move set.
    Move { from: Position, to: Position },
    /// Opaque text with no protocol meaning beyond display.
    Chat { text: String },
    /// Reinitialize the engine and clear chat history.
    Reset {},
}

impl Message {
    /// Encode to a wire payload.
    pub fn encode(&self) -> Result<Vec<u8>, ProtocolError> {
        serde_json::to_vec(self).map_err(ProtocolError::Encode)
    }

    /// Decode a wire payload.
    pub fn decode(payload: &[u8]) -> Result<Self, ProtocolError> {
        serde_json::from_slice(payload).map_err(ProtocolError::Decode)
    }
}
