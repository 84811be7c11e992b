//! Peer synchronization protocol.
//!
//! Two peers each run a private [`CheckersEngine`](crate::rules::CheckersEngine);
//! the only coordination between them is the message stream. The wire format
//! carries intent, not effect: a `move` message is just `from → to`, and the
//! receiver re-derives the capture and promotion outcome against its own
//! engine. Convergence is therefore a property of protocol discipline — each
//! message delivered exactly once, in order, always legal on the sender's
//! side — over a channel the transport collaborator guarantees to be ordered
//! and reliable.
//!
//! There is no acknowledgement, retry, or reconciliation. A remote move that
//! fails local re-validation means the engines have already diverged; it is
//! surfaced as [`ProtocolError::Desync`] and never repaired.

pub mod error;
pub mod message;
pub mod session;
pub mod transport;

pub use error::ProtocolError;
pub use message::Message;
pub use session::{ChatEntry, ChatSender, Event, Session};
pub use transport::{QueueTransport, Transport};
