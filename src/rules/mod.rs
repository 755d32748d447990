//! Game rules for Gomoku
//!
//! This module implements the rule set:
//! - Legal placement (on the board, on an empty cell)
//! - Win condition (5-in-a-row, overlines allowed)
//! - Draw condition (full board without a five)

pub mod placement;
pub mod win;

// Re-exports for convenient access
pub use placement::{is_draw, is_valid_move};
pub use win::{check_winner, find_winning_line, has_five_at_pos, has_five_in_row, run_length};
