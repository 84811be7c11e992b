//! Board coordinates.

use serde::{Deserialize, Serialize};

use super::grid::BOARD_SIZE;

/// A square on the board, row-major from the top-left.
///
/// Valid positions have both coordinates in `[0, 8)`. Positions are plain
/// data: out-of-range values are representable (they appear transiently
/// during move generation and can arrive over the wire) and are rejected by
/// [`Position::on_board`] checks at the point of use.
///
/// Serializes as `{"row": r, "col": c}` to match the wire payloads.
///
/// ```
/// use p2p_checkers::board::Position;
///
/// let pos = Position::new(5, 0);
/// assert!(pos.on_board());
/// assert!(pos.is_dark());
/// assert_eq!(pos.offset(-1, 1), Some(Position::new(4, 1)));
/// assert_eq!(Position::new(0, 0).offset(-1, -1), None);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: u8,
    pub col: u8,
}

impl Position {
    /// Create a position.
    #[must_use]
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Check that both coordinates are in `[0, 8)`.
    #[must_use]
    pub const fn on_board(self) -> bool {
        (self.row as usize) < BOARD_SIZE && (self.col as usize) < BOARD_SIZE
    }

    /// Dark squares are the playable half of the board.
    #[must_use]
    pub const fn is_dark(self) -> bool {
        (self.row as u16 + self.col as u16) % 2 == 1
    }

    /// Offset by a (row, col) delta, returning `None` if the result leaves
    /// the board.
    #[must_use]
    pub fn offset(self, d_row: i8, d_col: i8) -> Option<Self> {
        let row = self.row as i16 + d_row as i16;
        let col = self.col as i16 + d_col as i16;
        if (0..BOARD_SIZE as i16).contains(&row) && (0..BOARD_SIZE as i16).contains(&col) {
            Some(Self::new(row as u8, col as u8))
        } else {
            None
        }
    }

    /// The square halfway between two positions two diagonal steps apart.
    ///
    /// This is the cell a jump passes over. Returns `None` unless both
    /// coordinates differ by exactly 2.
    #[must_use]
    pub fn midpoint(self, other: Self) -> Option<Self> {
        let d_row = other.row as i16 - self.row as i16;
        let d_col = other.col as i16 - self.col as i16;
        if d_row.abs() == 2 && d_col.abs() == 2 {
            Some(Self::new(
                (self.row as i16 + d_row / 2) as u8,
                (self.col as i16 + d_col / 2) as u8,
            ))
        } else {
            None
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
