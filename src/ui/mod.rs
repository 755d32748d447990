//! egui front end
//!
//! `GomokuApp` draws the board and side panel; `GameState` sits between it
//! and the [`Session`](crate::Session), adding turn gating and the delayed
//! opponent reply.

mod app;
mod board_view;
mod game_state;
mod theme;

pub use app::GomokuApp;
pub use game_state::GameState;
