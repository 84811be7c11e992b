//! Board representation: positions, pieces, and the 8×8 grid.
//!
//! Only dark squares (`(row + col) % 2 == 1`) are ever occupied. This is an
//! invariant of the setup and of move generation, not something the grid
//! enforces defensively.

pub mod grid;
pub mod piece;
pub mod position;

pub use grid::{Board, BOARD_SIZE};
pub use piece::{Piece, Player};
pub use position::Position;
