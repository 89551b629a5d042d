//! Line scores for the one-ply heuristic

/// Score for a line, keyed by stone count and open ends
pub struct PatternScore;

impl PatternScore {
    /// Five or more - immediate win
    pub const FIVE: i32 = 100_000;
    /// Open four: _OOOO_
    pub const OPEN_FOUR: i32 = 10_000;
    /// Four with one open end
    pub const CLOSED_FOUR: i32 = 1_000;
    /// Open three: _OOO_
    pub const OPEN_THREE: i32 = 1_000;
    /// Three with one open end
    pub const CLOSED_THREE: i32 = 100;
    /// Open two: _OO_
    pub const OPEN_TWO: i32 = 100;
    /// Two with one open end
    pub const CLOSED_TWO: i32 = 10;
}

/// Weight applied to the mover's own line scores
pub const OFFENSE_BIAS: f64 = 1.1;

/// Map a line shape to its score.
///
/// `count` includes the candidate stone. Shapes not in the table (a dead
/// four, a lone stone) score their raw count.
pub fn line_score(count: u32, open_ends: u32) -> i32 {
    match (count, open_ends) {
        (c, _) if c >= 5 => PatternScore::FIVE,
        (4, 2) => PatternScore::OPEN_FOUR,
        (4, 1) => PatternScore::CLOSED_FOUR,
        (3, 2) => PatternScore::OPEN_THREE,
        (3, 1) => PatternScore::CLOSED_THREE,
        (2, 2) => PatternScore::OPEN_TWO,
        (2, 1) => PatternScore::CLOSED_TWO,
        (c, _) => c as i32,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_table() {
        assert_eq!(line_score(5, 0), 100_000);
        assert_eq!(line_score(7, 2), 100_000);
        assert_eq!(line_score(4, 2), 10_000);
        assert_eq!(line_score(4, 1), 1_000);
        assert_eq!(line_score(3, 2), 1_000);
        assert_eq!(line_score(3, 1), 100);
        assert_eq!(line_score(2, 2), 100);
        assert_eq!(line_score(2, 1), 10);
    }

    #[test]
    fn test_unlisted_shapes_score_count() {
        assert_eq!(line_score(4, 0), 4);
        assert_eq!(line_score(3, 0), 3);
        assert_eq!(line_score(1, 0), 1);
        assert_eq!(line_score(1, 2), 1);
    }
}
