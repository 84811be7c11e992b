//! One peer's end of a match.
//!
//! A [`Session`] ties a private [`CheckersEngine`] to an outbound
//! [`Transport`], injected once at construction. Local intent flows through
//! `play`/`send_chat`/`restart`, which mutate the engine first and transmit
//! only what succeeded; remote payloads flow through `handle_payload`, which
//! decodes and replays them against the same engine. Both directions run to
//! completion before the next input, so there are no overlapping mutations.

use tracing::{debug, warn};

use crate::board::{Player, Position};
use crate::rules::{CheckersEngine, Move, MoveResult};

use super::error::ProtocolError;
use super::message::Message;
use super::transport::Transport;

/// Who authored a chat line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChatSender {
    Local,
    Remote,
}

/// One line of match chat.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatEntry {
    pub sender: ChatSender,
    pub text: String,
}

/// What an inbound payload did, for the UI to render.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event {
    /// A remote move was replayed and applied.
    Moved(MoveResult),
    /// A chat line arrived (already appended to the log).
    Chat(String),
    /// The opponent restarted the match; engine and chat are reinitialized.
    Reset,
}

/// One peer's session: engine, side, chat log, and outbound transport.
///
/// ```
/// use p2p_checkers::board::{Player, Position};
/// use p2p_checkers::sync::{QueueTransport, Session};
///
/// let mut session = Session::new(Player::One, QueueTransport::new());
/// let result = session.play(Position::new(5, 0), Position::new(4, 1)).unwrap();
/// assert!(result.success);
/// // The successful move is queued for the peer
/// assert!(!session.transport_mut().is_empty());
/// ```
pub struct Session<T: Transport> {
    engine: CheckersEngine,
    transport: T,
    local: Player,
    chat: Vec<ChatEntry>,
}

impl<T: Transport> Session<T> {
    /// Create a session playing as `local`. By convention the host plays
    /// `Player::One` and the guest `Player::Two`.
    #[must_use]
    pub fn new(local: Player, transport: T) -> Self {
        Self {
            engine: CheckersEngine::new(),
            transport,
            local,
            chat: Vec::new(),
        }
    }

    #[must_use]
    pub fn engine(&self) -> &CheckersEngine {
        &self.engine
    }

    /// The side this peer plays.
    #[must_use]
    pub fn local_player(&self) -> Player {
        self.local
    }

    /// Chat history, oldest first.
    #[must_use]
    pub fn chat(&self) -> &[ChatEntry] {
        &self.chat
    }

    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    /// Apply a local move and, if it succeeded, transmit it.
    ///
    /// The mover applies first, then sends: the wire only ever carries moves
    /// that were legal on the sender's board. An illegal attempt returns
    /// `success == false` and sends nothing.
    pub fn play(&mut self, from: Position, to: Position) -> Result<MoveResult, ProtocolError> {
        if self.engine.turn() != self.local {
            return Err(ProtocolError::NotYourTurn { local: self.local });
        }
        let result = self.engine.apply_move(&Move::intent(from, to));
        if result.success {
            self.send(&Message::Move { from, to })?;
        }
        Ok(result)
    }

    /// Append a local chat line and transmit it.
    pub fn send_chat(&mut self, text: &str) -> Result<(), ProtocolError> {
        self.chat.push(ChatEntry {
            sender: ChatSender::Local,
            text: text.to_owned(),
        });
        self.send(&Message::Chat { text: text.to_owned() })
    }

    /// Restart the match locally and tell the peer to do the same.
    /// Clears the chat log on both sides.
    pub fn restart(&mut self) -> Result<(), ProtocolError> {
        self.engine.reset();
        self.chat.clear();
        self.send(&Message::Reset {})
    }

    /// Decode and apply one inbound payload.
    ///
    /// Malformed payloads are dropped whole; a move that fails re-validation
    /// leaves state untouched and reports [`ProtocolError::Desync`].
    pub fn handle_payload(&mut self, payload: &[u8]) -> Result<Event, ProtocolError> {
        let message = Message::decode(payload).inspect_err(|err| {
            warn!(%err, len = payload.len(), "dropping inbound payload");
        })?;
        match message {
            Message::Move { from, to } => {
                let result = self.engine.apply_move(&Move::intent(from, to));
                if !result.success {
                    warn!(%from, %to, "remote move failed re-validation");
                    return Err(ProtocolError::Desync { from, to });
                }
                debug!(%from, %to, turn_changed = result.turn_changed, "applied remote move");
                Ok(Event::Moved(result))
            }
            Message::Chat { text } => {
                self.chat.push(ChatEntry {
                    sender: ChatSender::Remote,
                    text: text.clone(),
                });
                Ok(Event::Chat(text))
            }
            Message::Reset {} => {
                debug!("peer restarted the match");
                self.engine.reset();
                self.chat.clear();
                Ok(Event::Reset)
            }
        }
    }

    fn send(&mut self, message: &Message) -> Result<(), ProtocolError> {
        let payload = message.encode()?;
        self.transport.send(&payload);
        Ok(())
    }
}
