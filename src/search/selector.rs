//! One-ply move selector
//!
//! Every empty cell is scored twice: once for the mover (offense) and once
//! for the other side (how badly the other side wants the same cell). The
//! two scores are blended with offense weighted above defense and the best
//! cell wins.
//!
//! # Example
//!
//! ```
//! use gomoku::board::{Board, Pos, Stone};
//! use gomoku::search::select_move;
//!
//! let mut board = Board::new();
//! for row in 3..7 {
//!     board.place_stone(Pos::new(row, 7), Stone::Black);
//! }
//!
//! // White must take one end of Black's four
//! let best = select_move(&board, Stone::White).unwrap();
//! assert!(best.pos == Pos::new(2, 7) || best.pos == Pos::new(7, 7));
//! ```

use crate::board::{Board, Pos, Stone};
use crate::eval::evaluate_position;

/// Weight of the mover's own score, in tenths
pub const OFFENSE_WEIGHT: i64 = 10;
/// Weight of the opponent's score at the same cell, in tenths (0.8)
pub const DEFENSE_WEIGHT: i64 = 8;

/// A scored empty cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate {
    pub pos: Pos,
    /// Score for the mover placing here
    pub own: i32,
    /// Score for the opponent placing here
    pub block: i32,
}

impl Candidate {
    /// Score `pos` for `color` to move
    pub fn score(board: &Board, pos: Pos, color: Stone) -> Self {
        Self {
            pos,
            own: evaluate_position(board, pos, color),
            block: evaluate_position(board, pos, color.opponent()),
        }
    }

    /// Combined score, scaled by ten so `own + 0.8 * block` stays exact
    #[inline]
    pub fn combined(&self) -> i64 {
        OFFENSE_WEIGHT * i64::from(self.own) + DEFENSE_WEIGHT * i64::from(self.block)
    }

    /// Combined score in its natural unit, for display
    pub fn combined_f64(&self) -> f64 {
        self.combined() as f64 / OFFENSE_WEIGHT as f64
    }
}

/// Pick the best empty cell for `color`.
///
/// Cells are visited in row-major order and only a strictly higher score
/// replaces the current best, so ties go to the smallest row, then the
/// smallest column. Returns `None` when the board has no empty cell.
pub fn select_move(board: &Board, color: Stone) -> Option<Candidate> {
    select_move_counted(board, color).0
}

/// Same as [`select_move`], also returning how many cells were scored
pub fn select_move_counted(board: &Board, color: Stone) -> (Option<Candidate>, u64) {
    let mut best: Option<Candidate> = None;
    let mut scored = 0u64;

    for pos in board.empty_cells() {
        let candidate = Candidate::score(board, pos, color);
        scored += 1;
        match best {
            Some(current) if candidate.combined() <= current.combined() => {}
            _ => best = Some(candidate),
        }
    }

    (best, scored)
}
