//! The checkers rule engine.
//!
//! On each peer this is the sole authority for what moves are legal and what
//! a move does to the board. It is pure and deterministic: the only inputs
//! are `reset` and `apply` calls, so two engines fed the same move sequence
//! hold identical state.

pub mod engine;
pub mod moves;

pub use engine::{CheckersEngine, MoveList};
pub use moves::{Move, MoveResult};
