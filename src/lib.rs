//! # p2p-checkers
//!
//! The core of a serverless two-player checkers match: a deterministic rule
//! engine and the peer synchronization protocol that keeps two independently
//! running copies of it convergent over an ordered, reliable channel.
//!
//! ## Design Principles
//!
//! 1. **Each peer is an authority**: the wire carries move intent
//!    (`from → to`), never computed effect. Every move — local or remote —
//!    is re-validated against current engine state before it is applied.
//!
//! 2. **Convergence by discipline, not locking**: the mover applies first
//!    and then transmits; the receiver replays. Both engines run the same
//!    deterministic rules over the same message sequence, so turn ownership
//!    and board state are derived, not transmitted.
//!
//! 3. **Errors are data**: illegal moves are rejected via
//!    `MoveResult::success`, never panics; protocol-boundary failures are a
//!    [`sync::ProtocolError`] that leaves prior state intact.
//!
//! ## Modules
//!
//! - `board`: positions, pieces, and the 8×8 grid
//! - `rules`: legal-move generation (mandatory capture, multi-jump chains,
//!   promotion) and terminal-state detection
//! - `sync`: the `move`/`chat`/`reset` wire contract, session replay, and
//!   the transport seam

pub mod board;
pub mod rules;
pub mod sync;

// Re-export commonly used types
pub use crate::board::{Board, Piece, Player, Position, BOARD_SIZE};
pub use crate::rules::{CheckersEngine, Move, MoveResult};
pub use crate::sync::{
    ChatEntry, ChatSender, Event, Message, ProtocolError, QueueTransport, Session, Transport,
};
