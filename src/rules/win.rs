//! Win condition checking
//!
//! A game is won by five or more stones of one color in an unbroken line
//! along any of the four axes. Overlines count.

use crate::board::{Board, Pos, Stone, DIRECTIONS, SCAN_REACH};

/// Count matching stones walking from `pos` along `(dx, dy)`, at most `SCAN_REACH` steps.
///
/// The origin is not counted. Off-board cells end the walk like any mismatch.
#[inline]
fn count_direction(board: &Board, pos: Pos, dx: i32, dy: i32, color: Stone) -> i32 {
    let mut count = 0;
    for step in 1..=SCAN_REACH {
        match board.stone_at(pos.y() + step * dy, pos.x() + step * dx) {
            Some(s) if s == color => count += 1,
            _ => break,
        }
    }
    count
}

/// Length of the run through `pos` along one axis, within the scan window.
///
/// The origin counts as `color` whatever the board holds there.
#[inline]
pub fn run_length(board: &Board, pos: Pos, (dx, dy): (i32, i32), color: Stone) -> i32 {
    1 + count_direction(board, pos, dx, dy, color) + count_direction(board, pos, -dx, -dy, color)
}

/// Five-in-a-row check at a specific position.
///
/// Only checks the 4 axes through `pos`, so it must be called right after
/// `color` was placed there. No allocation.
#[inline]
pub fn has_five_at_pos(board: &Board, pos: Pos, color: Stone) -> bool {
    if color == Stone::Empty {
        return false;
    }
    DIRECTIONS
        .iter()
        .any(|&dir| run_length(board, pos, dir, color) >= 5)
}

/// Every stone of the winning run through `pos`, ordered along the line.
///
/// Unlike `has_five_at_pos` this walks to the end of the run, so an overline
/// is returned whole. Returns `None` if no axis through `pos` holds five.
pub fn find_winning_line(board: &Board, pos: Pos, color: Stone) -> Option<Vec<Pos>> {
    if color == Stone::Empty || board.get(pos) != color {
        return None;
    }

    for &(dx, dy) in &DIRECTIONS {
        // Back up to the start of the run
        let (mut x, mut y) = (pos.x(), pos.y());
        while board.stone_at(y - dy, x - dx) == Some(color) {
            x -= dx;
            y -= dy;
        }

        let mut line = Vec::new();
        while board.stone_at(y, x) == Some(color) {
            line.push(Pos::new(y as u8, x as u8));
            x += dx;
            y += dy;
        }

        if line.len() >= 5 {
            return Some(line);
        }
    }

    None
}

/// Check if there's 5+ in a row anywhere for the given color
pub fn has_five_in_row(board: &Board, color: Stone) -> bool {
    board
        .stones(color)
        .is_some_and(|stones| stones.iter_ones().any(|pos| has_five_at_pos(board, pos, color)))
}

/// Winner on the board, if any. Black is checked first.
pub fn check_winner(board: &Board) -> Option<Stone> {
    [Stone::Black, Stone::White]
        .into_iter()
        .find(|&color| has_five_in_row(board, color))
}
