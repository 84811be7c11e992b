//! Move descriptors and apply results.

use serde::{Deserialize, Serialize};

use crate::board::{Player, Position};

/// A fully resolved move: origin, destination, and capture effect.
///
/// `jump` and `captured` are derived by the engine that generated the move.
/// [`CheckersEngine::apply_move`](crate::rules::CheckersEngine::apply_move)
/// re-derives them from `from`/`to` against its own state and never trusts
/// the values it is handed; a `Move` built with [`Move::intent`] applies
/// identically to one returned from move generation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub from: Position,
    pub to: Position,
    /// True when this move captures the piece between `from` and `to`.
    pub jump: bool,
    /// The captured square, set iff `jump`.
    pub captured: Option<Position>,
}

impl Move {
    /// A simple diagonal step.
    #[must_use]
    pub const fn step(from: Position, to: Position) -> Self {
        Self {
            from,
            to,
            jump: false,
            captured: None,
        }
    }

    /// A jump capturing the piece at `captured`.
    #[must_use]
    pub const fn capture(from: Position, to: Position, captured: Position) -> Self {
        Self {
            from,
            to,
            jump: true,
            captured: Some(captured),
        }
    }

    /// A bare `from → to` intent with no effect fields, as carried on the
    /// wire. The engine fills in the effect during validation.
    #[must_use]
    pub const fn intent(from: Position, to: Position) -> Self {
        Self::step(from, to)
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.jump {
            write!(f, "{} x {}", self.from, self.to)
        } else {
            write!(f, "{} -> {}", self.from, self.to)
        }
    }
}

/// Outcome of an [`apply_move`](crate::rules::CheckersEngine::apply_move) call.
///
/// `success == false` means the move was rejected and the board is untouched.
/// `turn_changed == false` on success means the mover must continue jumping
/// with the same piece.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveResult {
    pub success: bool,
    pub turn_changed: bool,
    pub winner: Option<Player>,
}

impl MoveResult {
    pub(crate) const fn rejected(winner: Option<Player>) -> Self {
        Self {
            success: false,
            turn_changed: false,
            winner,
        }
    }
}
