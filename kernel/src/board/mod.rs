//! The 8-puzzle state and transition model.
//!
//! [`Board`] is an immutable value: every transition builds a new board and
//! illegal moves are rejected with a typed [`IllegalMove`] before anything
//! is constructed.

pub mod moves;
mod render;
pub mod state;

pub use moves::{Move, ParseMoveError};
pub use state::{Board, BoardError, IllegalMove, BLANK, CELLS, SIDE};
