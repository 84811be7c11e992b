//! The 8×8 grid of cells.
//!
//! The grid stores pieces and answers occupancy queries. It knows nothing
//! about legality or turns; that lives in [`crate::rules`].

use serde::{Deserialize, Serialize};

use super::piece::{Piece, Player};
use super::position::Position;

/// Side length of the board.
pub const BOARD_SIZE: usize = 8;

/// Rows initially populated per side (the three back rows).
const SETUP_ROWS: usize = 3;

/// 8×8 board; each cell holds at most one piece.
///
/// ```
/// use p2p_checkers::board::{Board, Player, Position};
///
/// let board = Board::standard();
/// assert_eq!(board.piece_count(Player::One), 12);
/// assert_eq!(board.piece_count(Player::Two), 12);
/// assert!(board.get(Position::new(5, 0)).is_some());
/// assert!(board.is_free(Position::new(4, 1)));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cells: [[Option<Piece>; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// A board with no pieces.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            cells: [[None; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// The standard starting layout: 12 men per side on the dark squares of
    /// the three back rows. `Two` occupies rows 0..3, `One` rows 5..8.
    #[must_use]
    pub fn standard() -> Self {
        let mut board = Self::empty();
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                let pos = Position::new(row as u8, col as u8);
                if !pos.is_dark() {
                    continue;
                }
                if row < SETUP_ROWS {
                    board.set(pos, Some(Piece::man(Player::Two)));
                } else if row >= BOARD_SIZE - SETUP_ROWS {
                    board.set(pos, Some(Piece::man(Player::One)));
                }
            }
        }
        board
    }

    /// The piece at `pos`, if any. Off-board positions read as empty.
    #[must_use]
    pub fn get(&self, pos: Position) -> Option<Piece> {
        if pos.on_board() {
            self.cells[pos.row as usize][pos.col as usize]
        } else {
            None
        }
    }

    /// Whether `pos` is on the board and unoccupied.
    ///
    /// Distinct from `get(pos).is_none()`: off-board squares are not free.
    #[must_use]
    pub fn is_free(&self, pos: Position) -> bool {
        pos.on_board() && self.get(pos).is_none()
    }

    /// Place or clear a cell. Off-board positions are ignored.
    pub fn set(&mut self, pos: Position, piece: Option<Piece>) {
        if pos.on_board() {
            self.cells[pos.row as usize][pos.col as usize] = piece;
        }
    }

    /// Number of pieces a player has on the board.
    #[must_use]
    pub fn piece_count(&self, player: Player) -> usize {
        self.pieces_of(player).count()
    }

    /// Iterate over `(position, piece)` for one player's pieces, row-major.
    pub fn pieces_of(&self, player: Player) -> impl Iterator<Item = (Position, Piece)> + '_ {
        self.cells.iter().enumerate().flat_map(move |(row, cells)| {
            cells.iter().enumerate().filter_map(move |(col, cell)| {
                cell.filter(|piece| piece.owner == player)
                    .map(|piece| (Position::new(row as u8, col as u8), piece))
            })
        })
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}

impl std::fmt::Display for Board {
    /// Renders `o`/`O` for Player 1 man/king, `x`/`X` for Player 2, `.` for
    /// empty. Row 0 is printed first.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in &self.cells {
            for cell in row {
                let glyph = match cell {
                    Some(Piece { owner: Player::One, king: false }) => 'o',
                    Some(Piece { owner: Player::One, king: true }) => 'O',
                    Some(Piece { owner: Player::Two, king: false }) => 'x',
                    Some(Piece { owner: Player::Two, king: true }) => 'X',
                    None => '.',
                };
                write!(f, "{glyph} ")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
