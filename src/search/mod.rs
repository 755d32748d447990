//! Search module for Gomoku AI
//!
//! Contains:
//! - One-ply greedy selector over every empty cell

pub mod selector;

pub use selector::{select_move, select_move_counted, Candidate, DEFENSE_WEIGHT, OFFENSE_WEIGHT};
