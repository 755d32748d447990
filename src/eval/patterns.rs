//! Pattern scores for Gomoku evaluation
//!
//! These constants define the per-axis weight of a run through a candidate
//! cell. Each step up in run length is worth ten times the previous one, so a
//! longer run always beats any number of shorter ones on the other axes.

/// Pattern scores for evaluation
pub struct PatternScore;

impl PatternScore {
    /// Five or more in a row - immediate win, counted even when capped
    pub const FIVE: i32 = 100_000;
    /// Uncapped four: _OOOO_
    pub const OPEN_FOUR: i32 = 10_000;
    /// Uncapped three: _OOO_
    pub const OPEN_THREE: i32 = 1_000;
    /// Uncapped two: _OO_
    pub const OPEN_TWO: i32 = 100;
    /// Lone stone with no opposing neighbour on the axis
    pub const OPEN_ONE: i32 = 10;
}

/// Score of one axis given the run length and how many ends an opposing stone caps.
///
/// Runs of five or more always score `FIVE`. Anything shorter scores only when
/// neither end is capped: a capped run is worth nothing.
#[inline]
pub fn run_score(count: u8, blocked: u8) -> i32 {
    match (count, blocked) {
        (5.., _) => PatternScore::FIVE,
        (4, 0) => PatternScore::OPEN_FOUR,
        (3, 0) => PatternScore::OPEN_THREE,
        (2, 0) => PatternScore::OPEN_TWO,
        (1, 0) => PatternScore::OPEN_ONE,
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_score_hierarchy() {
        assert!(PatternScore::FIVE > PatternScore::OPEN_FOUR);
        assert!(PatternScore::OPEN_FOUR > PatternScore::OPEN_THREE);
        assert!(PatternScore::OPEN_THREE > PatternScore::OPEN_TWO);
        assert!(PatternScore::OPEN_TWO > PatternScore::OPEN_ONE);
    }

    #[test]
    fn test_open_runs() {
        assert_eq!(run_score(1, 0), 10);
        assert_eq!(run_score(2, 0), 100);
        assert_eq!(run_score(3, 0), 1_000);
        assert_eq!(run_score(4, 0), 10_000);
    }

    #[test]
    fn test_five_ignores_blocks() {
        assert_eq!(run_score(5, 0), PatternScore::FIVE);
        assert_eq!(run_score(5, 2), PatternScore::FIVE);
        assert_eq!(run_score(9, 1), PatternScore::FIVE);
    }

    #[test]
    fn test_capped_runs_score_nothing() {
        for count in 1..=4 {
            assert_eq!(run_score(count, 1), 0, "count {count} with one cap");
            assert_eq!(run_score(count, 2), 0, "count {count} with two caps");
        }
    }

    #[test]
    fn test_zero_count() {
        assert_eq!(run_score(0, 0), 0);
    }

    #[test]
    fn test_four_axes_of_fours_stay_below_five() {
        assert!(4 * PatternScore::OPEN_FOUR < PatternScore::FIVE);
    }
}
