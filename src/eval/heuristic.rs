//! Heuristic evaluation of a candidate cell
//!
//! A cell is scored for a color as if that color had just been placed there.
//! For each of the four axes the run through the cell is measured, together
//! with whether an opposing stone caps either end. The per-axis scores from
//! [`run_score`] are summed.
//!
//! The board itself is never touched: the origin cell is assumed to hold the
//! scored color, and only its neighbours are read.

use crate::board::{Board, Pos, Stone, DIRECTIONS, SCAN_REACH};

use super::patterns::run_score;

/// Result of scanning one axis through a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LineScan {
    /// Stones in the run, origin included
    pub count: u8,
    /// Ends of the run capped by an opposing stone (0-2)
    pub blocked: u8,
}

impl LineScan {
    #[inline]
    pub fn score(self) -> i32 {
        run_score(self.count, self.blocked)
    }
}

/// Walk one half of an axis.
///
/// Returns the number of matching stones and whether the walk was stopped by
/// an opposing stone. An empty cell or the board edge ends the walk uncapped.
#[inline]
fn half_scan(board: &Board, pos: Pos, dx: i32, dy: i32, color: Stone) -> (u8, bool) {
    let mut count = 0u8;
    for step in 1..=SCAN_REACH {
        match board.stone_at(pos.y() + step * dy, pos.x() + step * dx) {
            Some(s) if s == color => count += 1,
            Some(Stone::Empty) | None => return (count, false),
            Some(_) => return (count, true),
        }
    }
    (count, false)
}

/// Scan the axis `(dx, dy)` through `pos` for `color`.
///
/// The forward half is walked first, then the backward half. Each half
/// records its own cap, so `blocked` counts capped ends independently.
pub fn scan_line(board: &Board, pos: Pos, (dx, dy): (i32, i32), color: Stone) -> LineScan {
    let (forward, forward_capped) = half_scan(board, pos, dx, dy, color);
    let (backward, backward_capped) = half_scan(board, pos, -dx, -dy, color);

    LineScan {
        count: 1 + forward + backward,
        blocked: u8::from(forward_capped) + u8::from(backward_capped),
    }
}

/// Score `pos` for `color` as if `color` were placed there.
///
/// # Returns
/// Sum of the four axis scores. Zero for `Stone::Empty`.
#[must_use]
pub fn evaluate_position(board: &Board, pos: Pos, color: Stone) -> i32 {
    if color == Stone::Empty {
        return 0;
    }
    DIRECTIONS
        .iter()
        .map(|&dir| scan_line(board, pos, dir, color).score())
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eval::PatternScore;

    fn at(x: i32, y: i32) -> Pos {
        Pos::from_xy(x, y).unwrap()
    }

    #[test]
    fn test_lone_cell_scores_ten_per_axis() {
        let board = Board::new();
        assert_eq!(evaluate_position(&board, at(7, 7), Stone::Black), 40);
    }

    #[test]
    fn test_edges_do_not_cap() {
        let board = Board::new();
        assert_eq!(evaluate_position(&board, at(0, 0), Stone::White), 40);
        assert_eq!(evaluate_position(&board, at(14, 7), Stone::White), 40);
        let scan = scan_line(&board, at(0, 0), (1, 1), Stone::White);
        assert_eq!(scan, LineScan { count: 1, blocked: 0 });
    }

    #[test]
    fn test_diagonal_run_against_corner_is_open() {
        let mut board = Board::new();
        for i in 0..4 {
            board.place_stone(at(i, i), Stone::White);
        }
        // The run (0,0)-(3,3) ends on the edge at (-1,-1) and an empty (4,4)
        let scan = scan_line(&board, at(3, 3), (1, 1), Stone::White);
        assert_eq!(scan, LineScan { count: 4, blocked: 0 });
        assert_eq!(scan.score(), PatternScore::OPEN_FOUR);
    }

    #[test]
    fn test_completing_cell_scores_five() {
        let mut board = Board::new();
        for i in 0..4 {
            board.place_stone(at(i, i), Stone::White);
        }
        let scan = scan_line(&board, at(4, 4), (1, 1), Stone::White);
        assert_eq!(scan.count, 5);
        // Diagonal five plus three lone axes
        assert_eq!(
            evaluate_position(&board, at(4, 4), Stone::White),
            PatternScore::FIVE + 3 * PatternScore::OPEN_ONE
        );
    }

    #[test]
    fn test_opposing_stone_caps_run() {
        let mut board = Board::new();
        board.place_stone(at(6, 7), Stone::Black);
        board.place_stone(at(8, 7), Stone::White);

        let scan = scan_line(&board, at(7, 7), (1, 0), Stone::Black);
        assert_eq!(scan, LineScan { count: 2, blocked: 1 });
        assert_eq!(scan.score(), 0);
    }

    #[test]
    fn test_both_ends_capped_counted_independently() {
        let mut board = Board::new();
        board.place_stone(at(7, 6), Stone::White);
        board.place_stone(at(7, 8), Stone::White);

        let scan = scan_line(&board, at(7, 7), (0, 1), Stone::Black);
        assert_eq!(scan, LineScan { count: 1, blocked: 2 });
    }

    #[test]
    fn test_capped_five_still_scores() {
        let mut board = Board::new();
        board.place_stone(at(8, 5), Stone::Black);
        for x in 3..7 {
            board.place_stone(at(x, 5), Stone::White);
        }
        let scan = scan_line(&board, at(7, 5), (1, 0), Stone::White);
        assert_eq!(scan, LineScan { count: 5, blocked: 1 });
        assert_eq!(scan.score(), PatternScore::FIVE);
    }

    #[test]
    fn test_scan_reach_is_four_steps() {
        let mut board = Board::new();
        for x in 8..14 {
            board.place_stone(at(x, 3), Stone::Black);
        }
        // Six stones to the right, only four are within reach
        let scan = scan_line(&board, at(7, 3), (1, 0), Stone::Black);
        assert_eq!(scan.count, 5);

        // Opposing stone beyond an unbroken window is never seen
        let mut board = Board::new();
        for x in 8..12 {
            board.place_stone(at(x, 3), Stone::Black);
        }
        board.place_stone(at(12, 3), Stone::White);
        let scan = scan_line(&board, at(7, 3), (1, 0), Stone::Black);
        assert_eq!(scan, LineScan { count: 5, blocked: 0 });
    }

    #[test]
    fn test_gap_ends_run_without_cap() {
        let mut board = Board::new();
        board.place_stone(at(9, 9), Stone::White);
        board.place_stone(at(10, 9), Stone::Black);
        let scan = scan_line(&board, at(7, 9), (1, 0), Stone::White);
        assert_eq!(scan, LineScan { count: 1, blocked: 0 });
    }

    #[test]
    fn test_anti_diagonal_axis() {
        let mut board = Board::new();
        board.place_stone(at(8, 6), Stone::Black);
        board.place_stone(at(9, 5), Stone::Black);
        board.place_stone(at(6, 8), Stone::Black);
        let scan = scan_line(&board, at(7, 7), (1, -1), Stone::Black);
        assert_eq!(scan, LineScan { count: 4, blocked: 0 });
    }

    #[test]
    fn test_origin_cell_is_not_read() {
        let mut board = Board::new();
        board.place_stone(at(7, 7), Stone::White);
        // Scoring Black at an occupied cell treats the origin as Black
        assert_eq!(evaluate_position(&board, at(7, 7), Stone::Black), 40);
    }

    #[test]
    fn test_empty_color_scores_zero() {
        let board = Board::new();
        assert_eq!(evaluate_position(&board, at(7, 7), Stone::Empty), 0);
    }
}
