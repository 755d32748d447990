//! Placement legality and the draw condition

use crate::board::{Board, Pos};

use super::win::check_winner;

/// A move is legal on any empty cell. There are no forbidden patterns.
#[inline]
pub fn is_valid_move(board: &Board, pos: Pos) -> bool {
    board.is_empty(pos)
}

/// Full board with no five for either color
pub fn is_draw(board: &Board) -> bool {
    board.is_full() && check_winner(board).is_none()
}
