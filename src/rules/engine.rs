//! Move legality, application, and terminal-state detection.
//!
//! ## Mandatory capture
//!
//! If any piece of the side to move has a legal jump anywhere on the board,
//! simple steps are illegal for that whole turn. Evaluating this requires a
//! full-board scan, not just the queried piece.
//!
//! ## Forced continuation
//!
//! A jump that leaves the moved piece with a further jump does not pass the
//! turn; the engine records that piece and every other piece's move set is
//! empty until the chain ends. Promotion happens before the continuation
//! check, so a man crowned by a jump may keep jumping backward as a king.
//!
//! ## Re-validation
//!
//! `apply_move` never trusts the move it is handed, even one constructed from
//! a prior `valid_moves_from` query: state may have shifted the
//! forced-continuation constraints in between. The destination is looked up
//! in a freshly computed move set and the engine's own derived move (jump
//! flag, captured square) is the one applied.

use smallvec::SmallVec;

use crate::board::{Board, Piece, Player, Position};

use super::moves::{Move, MoveResult};

/// Per-piece move lists: at most 4 directions, each yielding a step or a jump.
pub type MoveList = SmallVec<[Move; 8]>;

const DIAGONALS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// One peer's authoritative copy of the match state.
///
/// Deterministic and synchronous: two engines fed the same move sequence from
/// the same start hold identical state, which is what the sync protocol
/// relies on.
///
/// ```
/// use p2p_checkers::board::{Player, Position};
/// use p2p_checkers::rules::{CheckersEngine, Move};
///
/// let mut engine = CheckersEngine::new();
/// let moves = engine.valid_moves_from(Position::new(5, 0));
/// assert!(moves.iter().any(|m| m.to == Position::new(4, 1)));
///
/// let result = engine.apply_move(&Move::intent(Position::new(5, 0), Position::new(4, 1)));
/// assert!(result.success);
/// assert!(result.turn_changed);
/// assert_eq!(engine.turn(), Player::Two);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CheckersEngine {
    board: Board,
    turn: Player,
    forced_from: Option<Position>,
    winner: Option<Player>,
    captures: [u32; 2],
}

impl CheckersEngine {
    /// A fresh match: standard layout, `Player::One` to move.
    #[must_use]
    pub fn new() -> Self {
        Self {
            board: Board::standard(),
            turn: Player::One,
            forced_from: None,
            winner: None,
            captures: [0, 0],
        }
    }

    /// Start from an arbitrary position. Terminal states are detected
    /// immediately, so a board where `turn` has no move is born finished.
    #[must_use]
    pub fn with_board(board: Board, turn: Player) -> Self {
        let mut engine = Self {
            board,
            turn,
            forced_from: None,
            winner: None,
            captures: [0, 0],
        };
        engine.recompute_winner();
        engine
    }

    /// Reinitialize to the standard starting layout and clear all derived
    /// state. Never fails.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The side to move. Unchanged once the game is over.
    #[must_use]
    pub fn turn(&self) -> Player {
        self.turn
    }

    /// The piece that must continue its jump chain, if any.
    #[must_use]
    pub fn forced_from(&self) -> Option<Position> {
        self.forced_from
    }

    #[must_use]
    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.winner.is_some()
    }

    /// Pieces this player has captured so far in the match.
    #[must_use]
    pub fn captures(&self, player: Player) -> u32 {
        self.captures[player.index()]
    }

    /// Legal moves for the piece at `pos`.
    ///
    /// Empty if there is no piece at `pos`, the piece does not belong to the
    /// side to move, the game is over, or a forced-continuation piece is set
    /// and `pos` is not it. Subject to the mandatory-capture rule: when any
    /// friendly piece can jump, only jumps are returned.
    #[must_use]
    pub fn valid_moves_from(&self, pos: Position) -> MoveList {
        if self.winner.is_some() {
            return MoveList::new();
        }
        let piece = match self.board.get(pos) {
            Some(piece) if piece.owner == self.turn => piece,
            _ => return MoveList::new(),
        };
        if let Some(forced) = self.forced_from {
            if forced != pos {
                return MoveList::new();
            }
            // Mid-chain, only further jumps are legal
            return self.moves_for_piece(pos, piece, true);
        }
        let jumps_only = self.has_jump_anywhere(self.turn);
        self.moves_for_piece(pos, piece, jumps_only)
    }

    /// All legal moves for the side to move.
    #[must_use]
    pub fn legal_moves(&self) -> Vec<Move> {
        self.board
            .pieces_of(self.turn)
            .flat_map(|(pos, _)| self.valid_moves_from(pos))
            .collect()
    }

    /// Validate and apply a move.
    ///
    /// Only `from` and `to` are consulted; the effect (jump flag, captured
    /// square) is re-derived against current state. On rejection the board is
    /// untouched and `success` is false; this is also how moves after game
    /// over fail. Never panics.
    pub fn apply_move(&mut self, mv: &Move) -> MoveResult {
        let chosen = self
            .valid_moves_from(mv.from)
            .into_iter()
            .find(|m| m.to == mv.to);
        let Some(chosen) = chosen else {
            return MoveResult::rejected(self.winner);
        };
        let Some(mut piece) = self.board.get(chosen.from) else {
            // Unreachable: validation found a piece here
            return MoveResult::rejected(self.winner);
        };

        self.board.set(chosen.from, None);
        if let Some(captured) = chosen.captured {
            self.board.set(captured, None);
            self.captures[piece.owner.index()] += 1;
        }
        if chosen.to.row == piece.owner.crowning_row() {
            piece.crown();
        }
        self.board.set(chosen.to, Some(piece));

        let mut turn_changed = true;
        if chosen.jump && !self.moves_for_piece(chosen.to, piece, true).is_empty() {
            self.forced_from = Some(chosen.to);
            turn_changed = false;
        } else {
            self.forced_from = None;
            self.turn = self.turn.opponent();
        }

        self.recompute_winner();
        MoveResult {
            success: true,
            turn_changed,
            winner: self.winner,
        }
    }

    /// Steps and jumps for one piece, ignoring the global capture rule.
    fn moves_for_piece(&self, pos: Position, piece: Piece, jumps_only: bool) -> MoveList {
        let mut moves = MoveList::new();
        for (d_row, d_col) in DIAGONALS {
            if !piece.king && d_row != piece.owner.forward() {
                continue;
            }
            let Some(adjacent) = pos.offset(d_row, d_col) else {
                continue;
            };
            match self.board.get(adjacent) {
                None => {
                    if !jumps_only {
                        moves.push(Move::step(pos, adjacent));
                    }
                }
                Some(mid) if mid.owner != piece.owner => {
                    if let Some(landing) = pos.offset(d_row * 2, d_col * 2) {
                        if self.board.is_free(landing) {
                            moves.push(Move::capture(pos, landing, adjacent));
                        }
                    }
                }
                Some(_) => {}
            }
        }
        moves
    }

    /// Whether any of `player`'s pieces has a legal jump. Full-board scan.
    fn has_jump_anywhere(&self, player: Player) -> bool {
        self.board
            .pieces_of(player)
            .any(|(pos, piece)| self.moves_for_piece(pos, piece, true).iter().any(|m| m.jump))
    }

    /// Whether `player` could move at all, were it their turn.
    fn has_any_move(&self, player: Player) -> bool {
        if let Some(forced) = self.forced_from {
            // Mid-chain the mover always has the pending jump
            return self
                .board
                .get(forced)
                .is_some_and(|piece| !self.moves_for_piece(forced, piece, true).is_empty());
        }
        self.board
            .pieces_of(player)
            .any(|(pos, piece)| !self.moves_for_piece(pos, piece, false).is_empty())
    }

    /// A player loses with zero pieces, or when it is their turn and they
    /// have no legal move at all. Run after every successful move.
    fn recompute_winner(&mut self) {
        if self.winner.is_some() {
            return;
        }
        for player in Player::both() {
            if self.board.piece_count(player) == 0 {
                self.winner = Some(player.opponent());
                return;
            }
        }
        if !self.has_any_move(self.turn) {
            self.winner = Some(self.turn.opponent());
        }
    }
}

impl Default for CheckersEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_matches_reset() {
        let mut engine = CheckersEngine::new();
        engine.apply_move(&Move::intent(Position::new(5, 0), Position::new(4, 1)));
        engine.reset();
        assert_eq!(engine, CheckersEngine::new());
        assert_eq!(engine.turn(), Player::One);
        assert!(!engine.is_over());
        assert_eq!(engine.captures(Player::One), 0);
    }

    #[test]
    fn test_opening_moves_for_back_row_piece() {
        let engine = CheckersEngine::new();
        // Back-row piece is blocked by its own side
        assert!(engine.valid_moves_from(Position::new(7, 0)).is_empty());
        // Front-row piece has its forward steps
        let moves = engine.valid_moves_from(Position::new(5, 2));
        let targets: Vec<_> = moves.iter().map(|m| m.to).collect();
        assert_eq!(targets, vec![Position::new(4, 1), Position::new(4, 3)]);
        assert!(moves.iter().all(|m| !m.jump));
    }

    #[test]
    fn test_wrong_side_and_empty_square_yield_no_moves() {
        let engine = CheckersEngine::new();
        // Player Two's piece while One is to move
        assert!(engine.valid_moves_from(Position::new(2, 1)).is_empty());
        // Empty square
        assert!(engine.valid_moves_from(Position::new(4, 1)).is_empty());
    }

    #[test]
    fn test_kings_move_all_four_diagonals() {
        let mut board = Board::empty();
        board.set(Position::new(4, 3), Some(Piece::king(Player::One)));
        board.set(Position::new(0, 1), Some(Piece::man(Player::Two)));
        let engine = CheckersEngine::with_board(board, Player::One);

        let targets: Vec<_> = engine
            .valid_moves_from(Position::new(4, 3))
            .iter()
            .map(|m| m.to)
            .collect();
        assert_eq!(
            targets,
            vec![
                Position::new(3, 2),
                Position::new(3, 4),
                Position::new(5, 2),
                Position::new(5, 4),
            ]
        );
    }

    #[test]
    fn test_men_cannot_move_backward() {
        let mut board = Board::empty();
        board.set(Position::new(4, 3), Some(Piece::man(Player::One)));
        board.set(Position::new(0, 1), Some(Piece::man(Player::Two)));
        let engine = CheckersEngine::with_board(board, Player::One);

        let targets: Vec<_> = engine
            .valid_moves_from(Position::new(4, 3))
            .iter()
            .map(|m| m.to)
            .collect();
        assert_eq!(targets, vec![Position::new(3, 2), Position::new(3, 4)]);
    }

    #[test]
    fn test_jump_requires_enemy_mid_and_free_landing() {
        let mut board = Board::empty();
        board.set(Position::new(5, 2), Some(Piece::man(Player::One)));
        // Friendly blocker: no step onto it, no jump over it
        board.set(Position::new(4, 1), Some(Piece::man(Player::One)));
        // Enemy with occupied landing square
        board.set(Position::new(4, 3), Some(Piece::man(Player::Two)));
        board.set(Position::new(3, 4), Some(Piece::man(Player::Two)));
        let engine = CheckersEngine::with_board(board, Player::One);

        assert!(engine.valid_moves_from(Position::new(5, 2)).is_empty());
    }

    #[test]
    fn test_apply_uses_engine_derived_effect_not_callers() {
        let mut board = Board::empty();
        board.set(Position::new(5, 2), Some(Piece::man(Player::One)));
        board.set(Position::new(4, 3), Some(Piece::man(Player::Two)));
        board.set(Position::new(0, 1), Some(Piece::man(Player::Two)));
        let mut engine = CheckersEngine::with_board(board, Player::One);

        // Caller lies: claims no capture. The engine derives the jump anyway.
        let result = engine.apply_move(&Move::intent(Position::new(5, 2), Position::new(3, 4)));
        assert!(result.success);
        assert!(engine.board().get(Position::new(4, 3)).is_none());
        assert_eq!(engine.captures(Player::One), 1);
    }

    #[test]
    fn test_game_over_rejects_moves_as_ordinary_illegal() {
        let mut board = Board::empty();
        board.set(Position::new(5, 2), Some(Piece::man(Player::One)));
        board.set(Position::new(4, 3), Some(Piece::man(Player::Two)));
        let mut engine = CheckersEngine::with_board(board, Player::One);

        let result = engine.apply_move(&Move::intent(Position::new(5, 2), Position::new(3, 4)));
        assert!(result.success);
        assert_eq!(result.winner, Some(Player::One));
        assert!(engine.is_over());

        let after = engine.apply_move(&Move::intent(Position::new(3, 4), Position::new(2, 3)));
        assert!(!after.success);
        assert_eq!(after.winner, Some(Player::One));
    }
}
