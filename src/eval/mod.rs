//! Evaluation module for Gomoku positions
//!
//! This module scores a single candidate cell for one color:
//! - Line runs through the cell on each axis (ones up to fives)
//! - Whether an opposing stone caps either end of the run

pub mod heuristic;
pub mod patterns;

pub use heuristic::{evaluate_position, scan_line, LineScan};
pub use patterns::{run_score, PatternScore};
