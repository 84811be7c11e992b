//! Players and pieces.
//!
//! ## Player
//!
//! Exactly two sides. `One` starts on the high-numbered rows and advances
//! toward row 0; `Two` starts on the low-numbered rows and advances toward
//! row 7. Reaching the far edge crowns the piece.
//!
//! ## Piece
//!
//! `{ owner, king }`. Ownership never changes (capture removes the piece
//! outright), and `king` only ever goes false → true.

use serde::{Deserialize, Serialize};

/// One of the two sides in a match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    One,
    Two,
}

impl Player {
    /// The other side.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Row delta for this side's forward direction.
    #[must_use]
    pub const fn forward(self) -> i8 {
        match self {
            Player::One => -1,
            Player::Two => 1,
        }
    }

    /// The row on which this side's men are crowned.
    #[must_use]
    pub const fn crowning_row(self) -> u8 {
        match self {
            Player::One => 0,
            Player::Two => 7,
        }
    }

    /// 0-based index, for per-player arrays.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Player::One => 0,
            Player::Two => 1,
        }
    }

    /// Both sides, in turn order.
    #[must_use]
    pub const fn both() -> [Player; 2] {
        [Player::One, Player::Two]
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::One => write!(f, "Player 1"),
            Player::Two => write!(f, "Player 2"),
        }
    }
}

/// A single checker on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub owner: Player,
    pub king: bool,
}

impl Piece {
    /// An uncrowned piece.
    #[must_use]
    pub const fn man(owner: Player) -> Self {
        Self { owner, king: false }
    }

    /// A crowned piece.
    #[must_use]
    pub const fn king(owner: Player) -> Self {
        Self { owner, king: true }
    }

    /// Crown this piece. Idempotent; kings never revert.
    pub fn crown(&mut self) {
        self.king = true;
    }
}
